//! Test that an empty transformer chain produces a compile error.

use optimus::function::Less;
use optimus::transform::{Apply, Compose};

fn main() {
    let _ = Apply::<Compose<()>, Less<i32>>::default();
}
