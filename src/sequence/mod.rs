//! Compile-time integer sequences.
//!
//! The sequence `0, 1, .., N-1` exists in two forms:
//!
//! - a **type**: [`MakeIndexSequence<N>`] is the tuple type
//!   `Tuple![U0, U1, .., U{N-1}]` of typenum markers, usable wherever a
//!   list of positions has to be spelled out at the type level
//! - a **value**: [`IntegerSequence<T, N>`] is a zero-sized handle that
//!   yields the same positions as values of a chosen integer type `T`
//!
//! The type-level builder splits the range at its midpoint and concatenates
//! the two halves, so the recursion depth grows with `log2(N)`.
//!
//! # Examples
//!
//! ```
//! use optimus::sequence::{Indices, IntegerSequence, MakeIndexSequence};
//! use optimus::typenum::{U0, U1, U2, U3, U4};
//! use optimus::Tuple;
//!
//! let _: MakeIndexSequence<U3> = <Tuple![U0, U1, U2]>::default();
//! assert_eq!(<MakeIndexSequence<U4> as Indices>::to_vec::<u8>(), vec![0, 1, 2, 3]);
//! assert_eq!(IntegerSequence::<i16, U3>::new().values(), vec![0, 1, 2]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Sub};

use typenum::{B1, Diff, Sum, U0, UInt, UTerm, Unsigned};

use crate::tuple::{Concat, Cons, Nil, Tuple, TupleSize};

// =============================================================================
// Element types
// =============================================================================

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer type that can hold sequence positions.
///
/// This trait is sealed and implemented for every primitive integer type.
pub trait Integral: Copy + sealed::Sealed {
    /// The largest position representable by this type, saturated at
    /// `usize::MAX`.
    const MAX_INDEX: usize;

    /// Converts a position into this type.
    ///
    /// Positions above [`MAX_INDEX`](Integral::MAX_INDEX) are never passed
    /// in: sequences too long for their element type are rejected at
    /// compile time.
    fn from_index(index: usize) -> Self;
}

macro_rules! impl_integral {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_sign_loss
            )]
            impl Integral for $ty {
                const MAX_INDEX: usize = if (<$ty>::MAX as u128) > (usize::MAX as u128) {
                    usize::MAX
                } else {
                    <$ty>::MAX as usize
                };

                #[inline]
                fn from_index(index: usize) -> Self {
                    index as Self
                }
            }
        )*
    };
}

impl_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// =============================================================================
// Type-level construction
// =============================================================================

/// Builds the tuple type of the `Self` consecutive positions starting at
/// `Lo`.
///
/// Implemented on typenum unsigned widths. A width of zero yields [`Nil`]
/// and a width of one yields `Tuple![Lo]`. Any wider span is split into a
/// lower half of `Self / 2` positions and an upper half holding the rest,
/// and the two results are concatenated.
pub trait Span<Lo> {
    /// `Tuple![Lo, Lo + 1, .., Lo + Self - 1]`.
    type Output;
}

impl<Lo> Span<Lo> for UTerm {
    type Output = Nil;
}

impl<Lo> Span<Lo> for UInt<UTerm, B1> {
    type Output = Cons<Lo, Nil>;
}

// `UInt<U, B>` is the width shifted right by one bit, i.e. `W / 2`.
impl<Lo, U, B, Bit> Span<Lo> for UInt<UInt<U, B>, Bit>
where
    UInt<U, B>: Span<Lo>,
    Self: Sub<UInt<U, B>>,
    Lo: Add<UInt<U, B>>,
    Diff<Self, UInt<U, B>>: Span<Sum<Lo, UInt<U, B>>>,
    <UInt<U, B> as Span<Lo>>::Output:
        Concat<<Diff<Self, UInt<U, B>> as Span<Sum<Lo, UInt<U, B>>>>::Output>,
{
    type Output = <<UInt<U, B> as Span<Lo>>::Output as Concat<
        <Diff<Self, UInt<U, B>> as Span<Sum<Lo, UInt<U, B>>>>::Output,
    >>::Output;
}

/// The tuple type `Tuple![U0, U1, .., U{N-1}]`.
pub type MakeIndexSequence<N> = <N as Span<U0>>::Output;

/// The index sequence covering every position of tuple type `T`.
///
/// # Examples
///
/// ```
/// use optimus::sequence::{Indices, IndexSequenceFor};
/// use optimus::Tuple;
///
/// type Positions = IndexSequenceFor<Tuple![char, bool, ()]>;
/// assert_eq!(<Positions as Indices>::to_vec::<usize>(), vec![0, 1, 2]);
/// ```
pub type IndexSequenceFor<T> = MakeIndexSequence<<T as TupleSize>::Len>;

/// A tuple of typenum unsigned markers read as a list of positions.
pub trait Indices: Tuple {
    /// Appends the positions, in order, to `values`.
    fn extend_into<T: Integral>(values: &mut Vec<T>);

    /// Returns the positions as values of type `T`.
    #[inline]
    #[must_use]
    fn to_vec<T: Integral>() -> Vec<T> {
        let mut values = Vec::with_capacity(Self::LEN);
        Self::extend_into(&mut values);
        values
    }
}

impl Indices for Nil {
    #[inline]
    fn extend_into<T: Integral>(_values: &mut Vec<T>) {}
}

impl<H: Unsigned, Rest: Indices> Indices for Cons<H, Rest> {
    #[inline]
    fn extend_into<T: Integral>(values: &mut Vec<T>) {
        values.push(T::from_index(H::USIZE));
        Rest::extend_into(values);
    }
}

// =============================================================================
// Value-level sequences
// =============================================================================

/// The sequence `0, 1, .., N-1` with elements of type `T`.
///
/// `IntegerSequence` is zero-sized; everything about it is determined by its
/// type parameters, so two values of the same type are always equal.
///
/// Choosing an element type too narrow for `N` is rejected when the
/// sequence is constructed.
pub struct IntegerSequence<T, N> {
    marker: PhantomData<fn() -> (T, N)>,
}

/// A sequence of `usize` positions.
pub type IndexSequence<N> = IntegerSequence<usize, N>;

impl<T: Integral, N: Unsigned> IntegerSequence<T, N> {
    /// The number of elements.
    pub const SIZE: usize = N::USIZE;

    /// Creates the sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        const {
            assert!(
                N::USIZE == 0 || N::USIZE - 1 <= T::MAX_INDEX,
                "element type is too narrow for the sequence length"
            );
        }
        Self {
            marker: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        N::USIZE
    }

    /// Returns `true` when the sequence has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        N::USIZE == 0
    }

    /// Returns an iterator over the elements in ascending order.
    #[inline]
    pub fn iter(self) -> impl ExactSizeIterator<Item = T> + DoubleEndedIterator {
        (0..N::USIZE).map(T::from_index)
    }

    /// Collects the elements in ascending order.
    #[inline]
    #[must_use]
    pub fn values(self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T: Integral, N: Unsigned> Default for IntegerSequence<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, N> Clone for IntegerSequence<T, N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, N> Copy for IntegerSequence<T, N> {}

impl<T, N> PartialEq for IntegerSequence<T, N> {
    #[inline]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T, N> Eq for IntegerSequence<T, N> {}

impl<T, N> Hash for IntegerSequence<T, N> {
    #[inline]
    fn hash<S: Hasher>(&self, _state: &mut S) {}
}

impl<T: Integral + fmt::Debug, N: Unsigned> fmt::Debug for IntegerSequence<T, N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Integral, N: Unsigned> IntoIterator for IntegerSequence<T, N> {
    type Item = T;
    type IntoIter = std::iter::Map<std::ops::Range<usize>, fn(usize) -> T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        (0..N::USIZE).map(T::from_index as fn(usize) -> T)
    }
}
