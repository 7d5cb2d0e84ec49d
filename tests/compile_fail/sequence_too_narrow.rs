//! Test that an element type too narrow for the length produces a compile error.

use optimus::sequence::IntegerSequence;
use optimus::typenum::U200;

const SEQUENCE: IntegerSequence<i8, U200> = IntegerSequence::new();

fn main() {
    let _ = SEQUENCE.len();
}
