//! Heterogeneous tuples built from nested head/tail pairs.
//!
//! A tuple of `N` elements is a chain of `N` [`Cons`] cells terminated by
//! [`Nil`]. Because the shape is visible to the type system, every operation
//! in this module is resolved by induction on that shape:
//!
//! - element access ([`TupleGet`], [`get`]) peels one cell per index step
//! - size and element-type queries ([`TupleSize`], [`TupleElement`]) are
//!   purely type-level
//! - concatenation ([`Concat`], [`tuple_cat!`]) rebuilds the left operand
//!   on top of the right one
//! - tuple-unpacking invocation ([`apply`]) spreads the elements into a
//!   positional argument list
//! - destructuring ([`tuple_pat!`]) mirrors [`tuple!`] in pattern position
//!
//! Construction and field access are `const`, so tuples can live in
//! `const` items:
//!
//! ```
//! use optimus::{tuple, Tuple};
//!
//! const ORIGIN: Tuple![i32, i32, &str] = tuple![0, 0, "origin"];
//! const LABEL: &str = ORIGIN.tail.tail.head;
//! assert_eq!(LABEL, "origin");
//! ```
//!
//! # Native tuples
//!
//! Rust's own tuples take part in the same protocol: [`TupleGet`] and
//! [`TupleSize`] are implemented for native tuples of up to eight elements,
//! and both directions of conversion are available through [`From`].
//!
//! ```
//! use optimus::tuple::{get, Cons, Nil};
//! use optimus::typenum::U1;
//!
//! let native = (1, "two", 3.0);
//! assert_eq!(get::<U1, _>(&native), &"two");
//!
//! let list: Cons<i32, Cons<&str, Cons<f64, Nil>>> = native.into();
//! assert_eq!(get::<U1, _>(&list), &"two");
//! ```

mod apply;
mod concat;
mod convert;
mod get;
mod native;
#[cfg(feature = "serde")]
mod serde;
mod size;

use std::fmt;

pub use apply::{Unpack, apply};
#[cfg(feature = "function")]
pub use apply::invoke;
#[cfg(feature = "function")]
pub use concat::Concatenate;
pub use concat::{Concat, concat};
pub use convert::{IntoNative, TupleFrom};
pub use get::{TupleElement, TupleGet, get};
pub use size::TupleSize;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::Tuple;
pub use crate::tuple;
pub use crate::tuple_cat;
pub use crate::tuple_pat;

/// The empty tuple.
///
/// `Nil` terminates every [`Cons`] chain and is the identity element of
/// [`concat`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nil;

/// A non-empty tuple: one `head` element followed by the `tail` tuple.
///
/// Build values with [`tuple!`] and name types with [`Tuple!`] rather than
/// nesting `Cons` by hand.
///
/// Comparison is lexicographic in element order, matching Rust's native
/// tuples.
///
/// # Examples
///
/// ```
/// use optimus::tuple::{Cons, Nil};
/// use optimus::{tuple, Tuple};
///
/// let built: Tuple![i32, bool] = tuple![1, true];
/// let by_hand = Cons::new(1, Cons::new(true, Nil));
/// assert_eq!(built, by_hand);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cons<H, T> {
    /// The first element.
    pub head: H,
    /// The remaining elements.
    pub tail: T,
}

impl<H, T> Cons<H, T> {
    /// Creates a tuple from its first element and the remaining elements.
    #[inline]
    pub const fn new(head: H, tail: T) -> Self {
        Self { head, tail }
    }

    /// Returns a reference to the first element.
    #[inline]
    pub const fn head(&self) -> &H {
        &self.head
    }

    /// Returns a reference to the remaining elements.
    #[inline]
    pub const fn tail(&self) -> &T {
        &self.tail
    }

    /// Splits the tuple into its first element and the remaining elements.
    #[inline]
    pub fn into_parts(self) -> (H, T) {
        (self.head, self.tail)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Nil {}
    impl<H, T: Sealed> Sealed for super::Cons<H, T> {}
}

/// Marker trait implemented by [`Nil`] and every [`Cons`] chain ending in
/// `Nil`.
///
/// This trait is sealed.
pub trait Tuple: sealed::Sealed {
    /// The number of elements.
    const LEN: usize;

    /// Returns the number of elements.
    #[inline]
    fn len(&self) -> usize {
        Self::LEN
    }

    /// Returns `true` for the empty tuple.
    #[inline]
    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    /// Returns a tuple with `value` in front of the current elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimus::tuple::Tuple as _;
    /// use optimus::tuple;
    ///
    /// assert_eq!(tuple![2, 3].prepend(1), tuple![1, 2, 3]);
    /// ```
    #[inline]
    fn prepend<V>(self, value: V) -> Cons<V, Self>
    where
        Self: Sized,
    {
        Cons::new(value, self)
    }

    /// Converts every element into the corresponding element type of `U`.
    ///
    /// Only available when each target element implements `From` the
    /// source element at the same position.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimus::tuple::Tuple as _;
    /// use optimus::{tuple, Tuple};
    ///
    /// let widened: Tuple![i64, f64] = tuple![1_i32, 2.5_f32].convert();
    /// assert_eq!(widened, tuple![1_i64, 2.5_f64]);
    /// ```
    #[inline]
    fn convert<U>(self) -> U
    where
        Self: Sized,
        U: TupleFrom<Self>,
    {
        U::tuple_from(self)
    }
}

impl Tuple for Nil {
    const LEN: usize = 0;
}

impl<H, T: Tuple> Tuple for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

// =============================================================================
// Formatting
// =============================================================================

mod format {
    use std::fmt;

    pub trait DebugElements {
        fn debug_elements(&self, builder: &mut fmt::DebugTuple<'_, '_>);
    }

    impl DebugElements for super::Nil {
        fn debug_elements(&self, _builder: &mut fmt::DebugTuple<'_, '_>) {}
    }

    impl<H: fmt::Debug, T: DebugElements> DebugElements for super::Cons<H, T> {
        fn debug_elements(&self, builder: &mut fmt::DebugTuple<'_, '_>) {
            builder.field(&self.head);
            self.tail.debug_elements(builder);
        }
    }

    pub trait DisplayElements {
        fn display_elements(&self, formatter: &mut fmt::Formatter<'_>, first: bool)
        -> fmt::Result;
    }

    impl DisplayElements for super::Nil {
        fn display_elements(
            &self,
            _formatter: &mut fmt::Formatter<'_>,
            _first: bool,
        ) -> fmt::Result {
            Ok(())
        }
    }

    impl<H: fmt::Display, T: DisplayElements> DisplayElements for super::Cons<H, T> {
        fn display_elements(
            &self,
            formatter: &mut fmt::Formatter<'_>,
            first: bool,
        ) -> fmt::Result {
            if !first {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{}", self.head)?;
            self.tail.display_elements(formatter, false)
        }
    }
}

impl<H: fmt::Debug, T: format::DebugElements> fmt::Debug for Cons<H, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = formatter.debug_tuple("");
        format::DebugElements::debug_elements(self, &mut builder);
        builder.finish()
    }
}

impl fmt::Debug for Nil {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl fmt::Display for Nil {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "()")
    }
}

impl<H: fmt::Display, T: format::DisplayElements> fmt::Display for Cons<H, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        format::DisplayElements::display_elements(self, formatter, true)?;
        write!(formatter, ")")
    }
}

// =============================================================================
// Macros
// =============================================================================

/// Builds a tuple value from a list of expressions.
///
/// `tuple![]` is [`Nil`]; `tuple![a, b]` is `Cons { head: a, tail: Cons {
/// head: b, tail: Nil } }`. The expansion is a plain struct literal, so the
/// macro works in `const` and `static` initializers.
///
/// # Examples
///
/// ```
/// use optimus::tuple;
///
/// let triple = tuple![1, "two", 3.0];
/// assert_eq!(triple.head, 1);
/// assert_eq!(triple.tail.head, "two");
/// ```
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::tuple::Nil
    };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::tuple::Cons {
            head: $head,
            tail: $crate::tuple!($($tail),*),
        }
    };
}

/// Names the tuple type with the given element types.
///
/// # Examples
///
/// ```
/// use optimus::{tuple, Tuple};
///
/// let pair: Tuple![u8, char] = tuple![7, 'x'];
/// assert_eq!(pair.tail.head, 'x');
/// ```
#[macro_export]
macro_rules! Tuple {
    () => {
        $crate::tuple::Nil
    };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::tuple::Cons<$head, $crate::Tuple![$($tail),*]>
    };
}

/// Builds a destructuring pattern for a tuple.
///
/// Each position takes any pattern: a binding, `_`, a literal, a reference
/// pattern or a nested `tuple_pat!`. Bindings to `&mut` elements of a
/// borrowed tuple can be assigned through, which covers unpacking into
/// existing variables.
///
/// # Examples
///
/// ```
/// use optimus::{tuple, tuple_pat};
///
/// let tuple_pat![name, _, tuple_pat![x, y]] = tuple!["origin", 0_u8, tuple![1.5, -2.0]];
/// assert_eq!(name, "origin");
/// assert_eq!((x, y), (1.5, -2.0));
///
/// let (mut low, mut high) = (0, 0);
/// let tuple_pat![first, second] = tuple![&mut low, &mut high];
/// *first = 3;
/// *second = 9;
/// assert_eq!((low, high), (3, 9));
/// ```
#[macro_export]
macro_rules! tuple_pat {
    () => {
        $crate::tuple::Nil
    };
    ($head:pat $(, $tail:pat)* $(,)?) => {
        $crate::tuple::Cons {
            head: $head,
            tail: $crate::tuple_pat!($($tail),*),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    fn test_macro_matches_manual_nesting() {
        let built = tuple![1, 'a', "b"];
        let manual = Cons::new(1, Cons::new('a', Cons::new("b", Nil)));
        assert_eq!(built, manual);
    }

    #[rstest]
    fn test_default_is_element_wise() {
        let value: Tuple![i32, String, bool] = Default::default();
        assert_eq!(value, tuple![0, String::new(), false]);
    }

    #[rstest]
    fn test_const_construction() {
        const PAIR: Tuple![u8, u16] = tuple![1, 2];
        const FIRST: u8 = *PAIR.head();
        assert_eq!(FIRST, 1);
        assert_eq!(PAIR.tail.head, 2);
    }

    #[rstest]
    fn test_clone_preserves_order() {
        let original = tuple![String::from("a"), String::from("b")];
        let copy = original.clone();
        assert_eq!(copy.head, "a");
        assert_eq!(copy.tail.head, "b");
        assert_eq!(original, copy);
    }

    #[rstest]
    fn test_into_parts() {
        let (head, tail) = tuple![1, 2, 3].into_parts();
        assert_eq!(head, 1);
        assert_eq!(tail, tuple![2, 3]);
    }

    // =========================================================================
    // Tuple trait
    // =========================================================================

    #[rstest]
    #[case(Nil.len(), 0)]
    #[case(tuple![1].len(), 1)]
    #[case(tuple![1, 2, 3, 4].len(), 4)]
    fn test_len(#[case] actual: usize, #[case] expected: usize) {
        assert_eq!(actual, expected);
    }

    #[rstest]
    fn test_is_empty() {
        assert!(Nil.is_empty());
        assert!(!tuple![()].is_empty());
    }

    #[rstest]
    fn test_ordering_is_lexicographic() {
        assert!(tuple![1, 9] < tuple![2, 0]);
        assert!(tuple![1, 1] < tuple![1, 2]);
        assert_eq!(tuple![3, 3].cmp(&tuple![3, 3]), std::cmp::Ordering::Equal);
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    #[rstest]
    #[case(format!("{}", Nil), "()")]
    #[case(format!("{}", tuple![1]), "(1)")]
    #[case(format!("{}", tuple![1, "two", 3.5]), "(1, two, 3.5)")]
    fn test_display(#[case] actual: String, #[case] expected: &str) {
        assert_eq!(actual, expected);
    }

    #[rstest]
    fn test_debug_renders_like_native_tuple() {
        assert_eq!(format!("{:?}", tuple![1, "two"]), "(1, \"two\")");
        assert_eq!(format!("{:?}", Nil), "()");
        assert_eq!(format!("{:#?}", Nil), format!("{:#?}", ()));
    }

    #[rstest]
    fn test_pattern_macro_destructures() {
        let tuple_pat![first, second] = tuple![10, 'z'];
        assert_eq!(first, 10);
        assert_eq!(second, 'z');
    }
}
