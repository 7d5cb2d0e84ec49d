#![cfg(feature = "serde")]

//! Integration tests for serde support of tuples.
//!
//! Tuples serialize as fixed-length sequences, so their JSON matches the
//! JSON of the equivalent native tuple.

use optimus::tuple::Nil;
use optimus::{Tuple, tuple};
use rstest::rstest;
use serde::{Deserialize, Serialize};

// =============================================================================
// Serialization
// =============================================================================

#[rstest]
#[case(
    serde_json::to_string(&tuple![1, "a", true]).unwrap(),
    serde_json::to_string(&(1, "a", true)).unwrap()
)]
#[case(serde_json::to_string(&tuple![0.5]).unwrap(), String::from("[0.5]"))]
#[case(serde_json::to_string(&Nil).unwrap(), String::from("[]"))]
fn test_json_shape(#[case] actual: String, #[case] expected: String) {
    assert_eq!(actual, expected);
}

#[rstest]
fn test_json_roundtrip() {
    let original: Tuple![u32, String, Vec<i8>] = tuple![7, String::from("seven"), vec![-7]];
    let json = serde_json::to_string(&original).unwrap();
    let restored: Tuple![u32, String, Vec<i8>] = serde_json::from_str(&json).unwrap();
    assert_eq!(original, restored);
}

#[rstest]
fn test_native_json_reads_as_tuple() {
    let json = serde_json::to_string(&(3_u8, 'c')).unwrap();
    let restored: Tuple![u8, char] = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, tuple![3, 'c']);
}

#[rstest]
fn test_nested_tuples() {
    let nested = tuple![tuple![1, 2], tuple![], tuple!["x"]];
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, r#"[[1,2],[],["x"]]"#);
}

// =============================================================================
// Deserialization errors
// =============================================================================

#[rstest]
#[case("[1]")]
#[case("[1,2,3]")]
#[case("[]")]
fn test_wrong_length_is_rejected(#[case] json: &str) {
    let result: Result<Tuple![i32, i32], _> = serde_json::from_str(json);
    let message = result.unwrap_err().to_string();
    assert!(message.contains("invalid length"), "{message}");
}

#[rstest]
fn test_wrong_element_type_is_rejected() {
    let result: Result<Tuple![i32, bool], _> = serde_json::from_str(r#"[1,"yes"]"#);
    assert!(result.is_err());
}

// =============================================================================
// Inside derived types
// =============================================================================

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Segment {
    name: String,
    endpoints: Tuple![(i32, i32), (i32, i32)],
}

#[rstest]
fn test_field_of_derived_struct() {
    let segment = Segment {
        name: String::from("diagonal"),
        endpoints: tuple![(0, 0), (3, 3)],
    };
    let json = serde_json::to_string(&segment).unwrap();
    assert_eq!(json, r#"{"name":"diagonal","endpoints":[[0,0],[3,3]]}"#);

    let restored: Segment = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, segment);
}
