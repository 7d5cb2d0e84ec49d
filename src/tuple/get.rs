//! Element access by type-level index.
//!
//! Indices are typenum unsigned integers (`U0`, `U1`, ...). Access on a
//! [`Cons`] cell is resolved by induction: index `U0` is the head, and any
//! other index `I` is index `I - 1` of the tail. An index past the last
//! element reaches [`Nil`](super::Nil), which has no implementation, so the
//! mistake is a compile-time error.

use std::ops::Sub;

use typenum::{B1, Sub1, UInt, UTerm};

use super::Cons;

/// Access to the element at index `I`.
///
/// The output follows the category of the receiver:
///
/// | Receiver        | Output            |
/// |-----------------|-------------------|
/// | `Cons<..>`      | the element, moved out |
/// | `&'a Cons<..>`  | `&'a Element`     |
/// | `&'a mut Cons<..>` | `&'a mut Element` |
///
/// Native tuples and references to them implement the trait in the same
/// way, and `#[derive(TupleLike)]` extends it to user structs.
pub trait TupleGet<I> {
    /// The element type at index `I`, adjusted to the receiver's category.
    type Output;

    /// Returns the element at index `I`.
    fn get(self) -> Self::Output;
}

/// The element type at index `I` of tuple type `T`.
///
/// For reference receivers the alias yields the corresponding reference
/// type, so `TupleElement<U0, &'a Tuple![A, B]>` is `&'a A`.
pub type TupleElement<I, T> = <T as TupleGet<I>>::Output;

/// Returns the element at index `I` of `tuple`.
///
/// # Examples
///
/// ```
/// use optimus::tuple::get;
/// use optimus::tuple;
/// use optimus::typenum::{U0, U2};
///
/// let mut values = tuple![1, String::from("two"), 3.0];
///
/// assert_eq!(get::<U0, _>(&values), &1);
///
/// *get::<U0, _>(&mut values) += 10;
/// assert_eq!(values.head, 11);
///
/// let moved: f64 = get::<U2, _>(values);
/// assert_eq!(moved, 3.0);
/// ```
#[inline]
pub fn get<I, T>(tuple: T) -> T::Output
where
    T: TupleGet<I>,
{
    TupleGet::<I>::get(tuple)
}

impl<H, T> Cons<H, T> {
    /// Returns a reference to the element at index `I`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimus::tuple;
    /// use optimus::typenum::U1;
    ///
    /// let values = tuple!['a', 'b', 'c'];
    /// assert_eq!(values.at::<U1>(), &'b');
    /// ```
    #[inline]
    pub fn at<'a, I>(&'a self) -> <&'a Self as TupleGet<I>>::Output
    where
        &'a Self: TupleGet<I>,
    {
        TupleGet::<I>::get(self)
    }

    /// Returns a mutable reference to the element at index `I`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimus::tuple;
    /// use optimus::typenum::U2;
    ///
    /// let mut values = tuple![1, 2, 3];
    /// *values.at_mut::<U2>() = 30;
    /// assert_eq!(values, tuple![1, 2, 30]);
    /// ```
    #[inline]
    pub fn at_mut<'a, I>(&'a mut self) -> <&'a mut Self as TupleGet<I>>::Output
    where
        &'a mut Self: TupleGet<I>,
    {
        TupleGet::<I>::get(self)
    }
}

// =============================================================================
// Owned receivers
// =============================================================================

impl<H, T> TupleGet<UTerm> for Cons<H, T> {
    type Output = H;

    #[inline]
    fn get(self) -> H {
        self.head
    }
}

impl<H, T, U, B> TupleGet<UInt<U, B>> for Cons<H, T>
where
    UInt<U, B>: Sub<B1>,
    T: TupleGet<Sub1<UInt<U, B>>>,
{
    type Output = T::Output;

    #[inline]
    fn get(self) -> Self::Output {
        TupleGet::<Sub1<UInt<U, B>>>::get(self.tail)
    }
}

// =============================================================================
// Shared references
// =============================================================================

impl<'a, H, T> TupleGet<UTerm> for &'a Cons<H, T> {
    type Output = &'a H;

    #[inline]
    fn get(self) -> &'a H {
        &self.head
    }
}

impl<'a, H, T, U, B> TupleGet<UInt<U, B>> for &'a Cons<H, T>
where
    UInt<U, B>: Sub<B1>,
    &'a T: TupleGet<Sub1<UInt<U, B>>>,
{
    type Output = <&'a T as TupleGet<Sub1<UInt<U, B>>>>::Output;

    #[inline]
    fn get(self) -> Self::Output {
        TupleGet::<Sub1<UInt<U, B>>>::get(&self.tail)
    }
}

// =============================================================================
// Mutable references
// =============================================================================

impl<'a, H, T> TupleGet<UTerm> for &'a mut Cons<H, T> {
    type Output = &'a mut H;

    #[inline]
    fn get(self) -> &'a mut H {
        &mut self.head
    }
}

impl<'a, H, T, U, B> TupleGet<UInt<U, B>> for &'a mut Cons<H, T>
where
    UInt<U, B>: Sub<B1>,
    &'a mut T: TupleGet<Sub1<UInt<U, B>>>,
{
    type Output = <&'a mut T as TupleGet<Sub1<UInt<U, B>>>>::Output;

    #[inline]
    fn get(self) -> Self::Output {
        TupleGet::<Sub1<UInt<U, B>>>::get(&mut self.tail)
    }
}
