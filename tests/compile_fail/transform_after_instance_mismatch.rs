//! Test that a post-processing template rejecting the result type is a compile error.

use optimus::function::{Function, Less, Negate};
use optimus::transform::{After, Apply};

fn main() {
    let negated_less = Apply::<After<Negate>, Less<i32>>::default();
    let _ = negated_less.call((1_i32, 2_i32));
}
