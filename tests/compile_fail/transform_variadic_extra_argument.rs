//! Test that calling a variadic transform with an extra argument produces a compile error.

use optimus::function::{Function, Id, Plus};
use optimus::transform::{Apply, Variadic};

fn main() {
    let plus = Apply::<Variadic<(Id, Id)>, Plus<i32>>::default();
    let _ = plus.call((1_i32, 2_i32, 3_i32));
}
