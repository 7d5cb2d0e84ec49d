//! Identity and constant function objects.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use paste::paste;
use typenum::{B0, B1, Bit, Integer, NInt, NonZero, PInt, UInt, UTerm, Unsigned, Z0};

use super::{Function, ResultType, Template};

/// Returns its single argument unchanged.
///
/// The argument's type is preserved exactly: a value comes back as the same
/// value, a `&T` as the same reference and a `&mut T` as the same mutable
/// reference.
///
/// # Examples
///
/// ```
/// use optimus::function::{Function, Id};
///
/// assert_eq!(Id.call((5,)), 5);
///
/// let mut value = 1;
/// *Id.call((&mut value,)) += 1;
/// assert_eq!(value, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Id;

impl<A> Function<(A,)> for Id {
    type Output = A;

    #[inline]
    fn call(&self, (value,): (A,)) -> A {
        value
    }
}

impl Template for Id {
    type Instance<T> = Self;
}

/// Ignores its arguments and returns a clone of the stored value.
///
/// Callable with any argument list, including none.
///
/// # Examples
///
/// ```
/// use optimus::function::{Constant, Function};
///
/// let answer = Constant::new(String::from("42"));
/// assert_eq!(answer.call(()), "42");
/// assert_eq!(answer.call((1, 'x', [0.5])), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constant<T> {
    value: T,
}

impl<T> Constant<T> {
    /// Creates a function object returning `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns a reference to the stored value.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the stored value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone, Args> Function<Args> for Constant<T> {
    type Output = T;

    #[inline]
    fn call(&self, _args: Args) -> T {
        self.value.clone()
    }
}

impl<T> ResultType for Constant<T> {
    type Result = T;
}

// =============================================================================
// Compile-time constants
// =============================================================================

/// A type standing for a single integral value known at compile time.
pub trait IntegralConstant {
    /// The type of the value.
    type Type: Copy;

    /// The value.
    const VALUE: Self::Type;
}

macro_rules! const_markers {
    ($($ty:ident),* $(,)?) => {
        paste! {
            $(
                #[doc = concat!("The `", stringify!($ty), "` constant `V` as a type.")]
                #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
                pub struct [<Const $ty:camel>]<const V: $ty>;

                impl<const V: $ty> IntegralConstant for [<Const $ty:camel>]<V> {
                    type Type = $ty;
                    const VALUE: $ty = V;
                }
            )*
        }
    };
}

const_markers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char
);

impl IntegralConstant for UTerm {
    type Type = usize;
    const VALUE: usize = 0;
}

impl<U: Unsigned, B: Bit> IntegralConstant for UInt<U, B> {
    type Type = usize;
    const VALUE: usize = <Self as Unsigned>::USIZE;
}

impl IntegralConstant for Z0 {
    type Type = i64;
    const VALUE: i64 = 0;
}

impl<U: Unsigned + NonZero> IntegralConstant for PInt<U> {
    type Type = i64;
    const VALUE: i64 = <Self as Integer>::I64;
}

impl<U: Unsigned + NonZero> IntegralConstant for NInt<U> {
    type Type = i64;
    const VALUE: i64 = <Self as Integer>::I64;
}

impl IntegralConstant for B0 {
    type Type = bool;
    const VALUE: bool = false;
}

impl IntegralConstant for B1 {
    type Type = bool;
    const VALUE: bool = true;
}

/// Ignores its arguments and returns `C::VALUE`.
///
/// Unlike [`Constant`], `Literal` stores nothing: the value is part of the
/// type, so `Literal` is zero-sized and default-constructible.
///
/// # Examples
///
/// ```
/// use optimus::function::{ConstI32, Function, Literal};
/// use optimus::typenum::U12;
///
/// assert_eq!(Literal::<ConstI32<-3>>::new().call(("ignored",)), -3);
/// assert_eq!(Literal::<U12>::new().call(()), 12_usize);
/// assert_eq!(std::mem::size_of::<Literal<ConstI32<-3>>>(), 0);
/// ```
pub struct Literal<C> {
    marker: PhantomData<fn() -> C>,
}

impl<C> Literal<C> {
    /// Creates the function object.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<C: IntegralConstant> Literal<C> {
    /// The value every call returns.
    pub const VALUE: C::Type = C::VALUE;
}

impl<C: IntegralConstant, Args> Function<Args> for Literal<C> {
    type Output = C::Type;

    #[inline]
    fn call(&self, _args: Args) -> C::Type {
        C::VALUE
    }
}

impl<C: IntegralConstant> ResultType for Literal<C> {
    type Result = C::Type;
}

impl<C> Default for Literal<C> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Literal<C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Literal<C> {}

impl<C> PartialEq for Literal<C> {
    #[inline]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<C> Eq for Literal<C> {}

impl<C> Hash for Literal<C> {
    #[inline]
    fn hash<S: Hasher>(&self, _state: &mut S) {}
}

impl<C: IntegralConstant> fmt::Debug for Literal<C>
where
    C::Type: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Literal").field(&C::VALUE).finish()
    }
}
