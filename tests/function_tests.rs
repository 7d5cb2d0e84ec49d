#![cfg(feature = "function")]
//! Integration tests for function objects and tuple-unpacking invocation.

use optimus::function::*;
use optimus::tuple::{apply, invoke};
use optimus::typenum::{N2, U3};
use optimus::{Tuple, tuple};
use rstest::rstest;
use static_assertions::{assert_impl_all, assert_type_eq_all};

// =============================================================================
// Signatures
// =============================================================================

assert_type_eq_all!(<Plus<i32> as ResultType>::Result, i32);
assert_type_eq_all!(<Less<String> as ResultType>::Result, bool);
assert_type_eq_all!(<Less<String> as BinaryFunction>::FirstArgument, String);
assert_type_eq_all!(<Negate<f32> as UnaryFunction>::Argument, f32);
assert_type_eq_all!(<Constant<u8> as ResultType>::Result, u8);
assert_type_eq_all!(<Literal<ConstI32<4>> as ResultType>::Result, i32);
assert_type_eq_all!(CallOutput<Id, (&'static str,)>, &'static str);

assert_impl_all!(Plus<i32>: Copy, Default, Eq, std::hash::Hash, std::fmt::Debug);
assert_impl_all!(Literal<ConstBool<true>>: Copy, Default, Eq);
assert_impl_all!(Id: Copy, Default, Eq);

fn declared_result<F: ResultType>(_function: &F) -> &'static str {
    std::any::type_name::<F::Result>()
}

#[rstest]
fn test_declared_result_is_usable_generically() {
    assert_eq!(declared_result(&Plus::<u64>::new()), "u64");
    assert_eq!(declared_result(&GreaterEqual::<u64>::new()), "bool");
}

// =============================================================================
// Templates
// =============================================================================

fn instantiate<G: Template, T>() -> G::Instance<T>
where
    G::Instance<T>: Default,
{
    <G::Instance<T>>::default()
}

#[rstest]
fn test_template_instances() {
    let negate = instantiate::<Negate, i32>();
    assert_eq!(negate.call((4,)), -4);

    let not = instantiate::<LogicalNot, bool>();
    assert!(not.call((false,)));

    let id = instantiate::<Id, String>();
    assert_eq!(id.call((String::from("same"),)), "same");
}

// =============================================================================
// Constants
// =============================================================================

#[rstest]
fn test_literal_is_compile_time() {
    const ANSWER: i32 = Literal::<ConstI32<42>>::VALUE;
    assert_eq!(ANSWER, 42);
    assert_eq!(Literal::<ConstI32<42>>::new().call((1, 2, 3)), ANSWER);
    assert_eq!(Literal::<U3>::new().call(()), 3_usize);
    assert_eq!(Literal::<N2>::new().call(()), -2_i64);
}

#[rstest]
fn test_constant_clones_each_call() {
    let words = Constant::new(vec!["a", "b"]);
    let first = words.call(());
    let second = words.call(('x',));
    assert_eq!(first, second);
    assert_eq!(words.value().len(), 2);
}

// =============================================================================
// Closures
// =============================================================================

#[rstest]
fn test_from_fn_with_state() {
    let scale = 3;
    let scaled = from_fn(move |value: i32| value * scale);
    assert_eq!(scaled.call((7,)), 21);
    assert_eq!(scaled.call((0,)), 0);
}

#[rstest]
fn test_from_fn_eight_arguments() {
    let sum = from_fn(|a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8| {
        [a, b, c, d, e, f, g, h].iter().map(|value| u32::from(*value)).sum::<u32>()
    });
    assert_eq!(sum.call((1, 2, 3, 4, 5, 6, 7, 8)), 36);
}

#[rstest]
fn test_function_through_reference() {
    fn call_twice<F: Function<(i32, i32), Output = i32>>(function: F) -> i32 {
        function.call((1, 2)) + function.call((3, 4))
    }

    let plus = Plus::<i32>::new();
    assert_eq!(call_twice(&plus), 10);
    assert_eq!(call_twice(plus), 10);
}

// =============================================================================
// apply / invoke
// =============================================================================

#[rstest]
fn test_apply_returns_function_result() {
    assert_eq!(apply(|a: i32, b: i32| a - b, tuple![10, 3]), 7);
    assert_eq!(apply(|| 5, tuple![]), 5);
    assert_eq!(apply(|a: i32, b: i32| a - b, (10, 3)), 7);
}

#[rstest]
fn test_apply_moves_elements() {
    let values = tuple![String::from("a"), vec![1]];
    let (text, numbers) = apply(|text: String, numbers: Vec<i32>| (text, numbers), values);
    assert_eq!(text, "a");
    assert_eq!(numbers, vec![1]);
}

#[rstest]
fn test_apply_lends_elements() {
    let values = tuple![String::from("left"), String::from("right")];
    let total = apply(|left: &String, right: &String| left.len() + right.len(), &values);
    assert_eq!(total, 9);
    assert_eq!(values.head, "left");
}

#[rstest]
fn test_apply_mutates_through_borrow() {
    let mut counters: Tuple![u32, u32] = tuple![0, 0];
    apply(
        |first: &mut u32, second: &mut u32| {
            *first += 1;
            *second += 2;
        },
        &mut counters,
    );
    assert_eq!(counters, tuple![1, 2]);
}

#[rstest]
fn test_invoke_function_objects() {
    assert_eq!(invoke(&Plus::<i32>::new(), tuple![40, 2]), 42);
    assert!(invoke(&Less::<i32>::new(), &tuple![1, 2]));
    assert_eq!(invoke(&Constant::new('c'), tuple![]), 'c');

    let mut value = tuple![5];
    *invoke(&Id, &mut value) += 1;
    assert_eq!(value, tuple![6]);
}
