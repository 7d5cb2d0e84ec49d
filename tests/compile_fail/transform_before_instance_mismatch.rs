//! Test that a pre-processing template rejecting the argument type is a compile error.

use optimus::function::{Function, LogicalNot, Plus};
use optimus::transform::{Apply, Before};

fn main() {
    let sum_of_negations = Apply::<Before<LogicalNot>, Plus<i32>>::default();
    let _ = sum_of_negations.call((1_i32, 2_i32));
}
