//! Test that an inner object that cannot take the swapped arguments produces a compile error.

use optimus::function::{Function, from_fn};
use optimus::transform::{Flip, transform};

fn main() {
    let repeat = transform::<Flip, _>(from_fn(|text: String, count: usize| text.repeat(count)));
    let _ = repeat.call((String::from("ab"), 3_usize));
}
