//! Test that calling a flipped function object with three arguments produces a compile error.

use optimus::function::{Constant, Function};
use optimus::transform::{Flip, transform};

fn main() {
    let flipped = transform::<Flip, _>(Constant::new(0_i32));
    let _ = flipped.call((1_i32, 2_i32, 3_i32));
}
