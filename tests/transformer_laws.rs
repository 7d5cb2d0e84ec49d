#![cfg(feature = "transform")]
//! Property-based tests for the transformer combinators.
//!
//! Laws checked:
//!
//! - **Flip**: `flip(less)(a, b) == greater(a, b)` and flipping twice is a no-op
//! - **Get**: ordering by `Fst` over `Less` equals ordering by the first element
//! - **After**: `after<not>(or)` is NOR
//! - **Before**: `before<not>(or)` is NAND (De Morgan)
//! - **Identity**: `Identity` applied to `f` behaves like `f`
//! - **Compose**: a single-element chain equals the element itself, and a chain
//!   equals nesting its elements by hand
//! - **FoldLeft**: folding `Concatenate` equals `tuple_cat!`

#![allow(unused_imports)]

use optimus::function::*;
use optimus::transform::*;
use optimus::tuple::Concatenate;
use optimus::{tuple, tuple_cat};
use proptest::prelude::*;

// =============================================================================
// Flip
// =============================================================================

proptest! {
    /// Flipping `Less` gives `Greater`.
    #[test]
    fn prop_flip_less_is_greater(lhs in any::<i32>(), rhs in any::<i32>()) {
        let flipped = Apply::<Flip, Less<i32>>::default();
        prop_assert_eq!(flipped.call((lhs, rhs)), Greater::<i32>::new().call((lhs, rhs)));
    }

    /// Flipping twice restores the original argument order.
    #[test]
    fn prop_double_flip_is_identity(lhs in any::<i32>(), rhs in any::<i32>()) {
        let minus = Minus::<i64>::new();
        let twice = transform::<Flip, _>(transform::<Flip, _>(minus));
        let lhs = i64::from(lhs);
        let rhs = i64::from(rhs);
        prop_assert_eq!(twice.call((lhs, rhs)), minus.call((lhs, rhs)));
    }
}

// =============================================================================
// Get
// =============================================================================

proptest! {
    /// Sorting by `Fst` over `Less` matches sorting by the first element.
    #[test]
    fn prop_sort_by_first_element(
        pairs in prop::collection::vec((any::<i16>(), any::<u8>()), 0..32),
    ) {
        let by_first = Apply::<Fst, Less<i16>>::default();

        let mut sorted = pairs.clone();
        sorted.sort_by(|a, b| {
            if by_first.call((a, b)) {
                std::cmp::Ordering::Less
            } else if by_first.call((b, a)) {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        });

        let mut expected = pairs;
        expected.sort_by_key(|pair| pair.0);

        prop_assert_eq!(sorted, expected);
    }

    /// `Snd` over `Plus` adds the second elements.
    #[test]
    fn prop_snd_projects_second(
        a in any::<i8>(),
        b in any::<i8>(),
        x in any::<i16>(),
        y in any::<i16>(),
    ) {
        let sum = Apply::<Snd, Plus<i32>>::default();
        let x = i32::from(x);
        let y = i32::from(y);
        prop_assert_eq!(sum.call(((a, x), tuple![b, y])), x + y);
    }
}

// =============================================================================
// After / Before
// =============================================================================

proptest! {
    /// `After<LogicalNot>` over `LogicalOr` is NOR.
    #[test]
    fn prop_after_not_or_is_nor(lhs in any::<bool>(), rhs in any::<bool>()) {
        let nor = Apply::<After<LogicalNot>, LogicalOr<bool>>::default();
        prop_assert_eq!(nor.call((lhs, rhs)), !(lhs || rhs));
    }

    /// `Before<LogicalNot>` over `LogicalOr` is NAND.
    #[test]
    fn prop_before_not_or_is_nand(lhs in any::<bool>(), rhs in any::<bool>()) {
        let nand = Apply::<Before<LogicalNot>, LogicalOr<bool>>::default();
        prop_assert_eq!(nand.call((lhs, rhs)), !(lhs && rhs));
    }

    /// `After<Negate>` negates the result of the inner object.
    #[test]
    fn prop_after_negate(lhs in any::<i16>(), rhs in any::<i16>()) {
        let negated_sum = Apply::<After<Negate>, Plus<i32>>::default();
        let lhs = i32::from(lhs);
        let rhs = i32::from(rhs);
        prop_assert_eq!(negated_sum.call((lhs, rhs)), -(lhs + rhs));
    }
}

// =============================================================================
// Identity / Compose
// =============================================================================

proptest! {
    /// `Identity` leaves the function object unchanged.
    #[test]
    fn prop_identity_is_transparent(lhs in any::<i16>(), rhs in any::<i16>()) {
        let plus = transform::<Identity, _>(Plus::<i32>::new());
        let lhs = i32::from(lhs);
        let rhs = i32::from(rhs);
        prop_assert_eq!(plus.call((lhs, rhs)), Plus::<i32>::new().call((lhs, rhs)));
    }

    /// A chain of one transformer is that transformer.
    #[test]
    fn prop_single_compose_is_direct(
        a in any::<i32>(),
        b in any::<i32>(),
        x in any::<i32>(),
        y in any::<i32>(),
    ) {
        let composed = Apply::<Compose<(Fst,)>, Less<i32>>::default();
        let direct = Apply::<Fst, Less<i32>>::default();
        prop_assert_eq!(composed.call(((a, x), (b, y))), direct.call(((a, x), (b, y))));
    }

    /// A chain equals nesting its transformers by hand, rightmost innermost.
    #[test]
    fn prop_compose_equals_nesting(
        a in any::<bool>(),
        b in any::<bool>(),
        x in any::<u8>(),
        y in any::<u8>(),
    ) {
        let composed = Apply::<Compose<(After<LogicalNot>, Snd)>, LogicalAnd<bool>>::default();
        let nested =
            transform::<After<LogicalNot>, _>(transform::<Snd, _>(LogicalAnd::<bool>::new()));
        let expected = !(a && b);
        prop_assert_eq!(composed.call(((x, a), (y, b))), expected);
        prop_assert_eq!(nested.call(((x, a), (y, b))), expected);
    }
}

// =============================================================================
// FoldLeft
// =============================================================================

proptest! {
    /// Folding `Concatenate` over tuples equals `tuple_cat!`.
    #[test]
    fn prop_fold_concatenate_is_tuple_cat(
        a in any::<u8>(),
        b in any::<i64>(),
        c in "[a-z]{0,4}",
        d in any::<bool>(),
    ) {
        let concat_all = Apply::<FoldLeft, Concatenate>::default();
        let folded = concat_all.call((tuple![a], tuple![b, c.clone()], tuple![], tuple![d]));
        prop_assert_eq!(folded, tuple_cat!(tuple![a], tuple![b, c], tuple![], tuple![d]));
    }

    /// Folding `Minus` subtracts left to right.
    #[test]
    fn prop_fold_minus_is_left_associative(values in prop::array::uniform4(any::<i16>())) {
        let subtract_all = Apply::<FoldLeft, Minus<i64>>::default();
        let [a, b, c, d] = values.map(i64::from);
        prop_assert_eq!(subtract_all.call((a, b, c, d)), ((a - b) - c) - d);
    }
}
