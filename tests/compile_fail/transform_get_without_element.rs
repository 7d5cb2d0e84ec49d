//! Test that projecting an element out of a non-tuple argument produces a compile error.

use optimus::function::{Function, Plus};
use optimus::transform::{Apply, Fst};

fn main() {
    let sum_of_firsts = Apply::<Fst, Plus<i32>>::default();
    let _ = sum_of_firsts.call((1_i32, 2_i32));
}
