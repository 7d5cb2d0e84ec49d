//! Type-level tuple size.

use std::ops::Add;

use typenum::{Add1, B1, U0, Unsigned};

use super::{Cons, Nil};

/// The number of elements of a tuple type.
///
/// The size is available both as a typenum unsigned integer ([`Len`]) for
/// use in further type-level computation, and as a `usize` constant
/// ([`SIZE`]).
///
/// References report the size of the tuple they point to.
///
/// [`Len`]: TupleSize::Len
/// [`SIZE`]: TupleSize::SIZE
///
/// # Examples
///
/// ```
/// use optimus::tuple::TupleSize;
/// use optimus::Tuple;
///
/// assert_eq!(<Tuple![u8, u16, u32] as TupleSize>::SIZE, 3);
/// assert_eq!(<&Tuple![u8] as TupleSize>::SIZE, 1);
/// assert_eq!(<(char, char) as TupleSize>::SIZE, 2);
/// ```
pub trait TupleSize {
    /// The number of elements as a type.
    type Len: Unsigned;

    /// The number of elements as a value.
    const SIZE: usize = <Self::Len as Unsigned>::USIZE;
}

impl TupleSize for Nil {
    type Len = U0;
}

impl<H, T> TupleSize for Cons<H, T>
where
    T: TupleSize,
    T::Len: Add<B1>,
    Add1<T::Len>: Unsigned,
{
    type Len = Add1<T::Len>;
}

impl<T: TupleSize + ?Sized> TupleSize for &T {
    type Len = T::Len;
}

impl<T: TupleSize + ?Sized> TupleSize for &mut T {
    type Len = T::Len;
}
