//! Test that reading past the last element produces a compile error.

use optimus::tuple;
use optimus::tuple::get;
use optimus::typenum::U2;

fn main() {
    let pair = tuple![1_i32, 2_i32];
    let _ = get::<U2, _>(pair);
}
