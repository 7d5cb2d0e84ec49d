//! Conversions between tuples.
//!
//! - [`TupleFrom`]: element-wise conversion between two tuples of the same
//!   length, enabled only when every element converts.
//! - [`IntoNative`]: a tuple (owned or borrowed) as a native Rust tuple,
//!   which is the argument shape [`Function`](crate::function::Function)
//!   objects are called with.
//! - `From` in both directions between native tuples of up to eight
//!   elements and the corresponding [`Cons`] chain.

use super::{Cons, Nil, tuple_pat};

/// Element-wise conversion from another tuple.
///
/// `Tuple![T1, .., Tn]: TupleFrom<Tuple![S1, .., Sn]>` holds exactly when
/// `Ti: From<Si>` for every position. Borrowed sources are cloned element by
/// element before conversion.
///
/// # Examples
///
/// ```
/// use optimus::tuple::TupleFrom;
/// use optimus::{tuple, Tuple};
///
/// let source = tuple![1_u8, "text"];
/// let converted = <Tuple![u32, String]>::tuple_from(&source);
/// assert_eq!(converted, tuple![1_u32, String::from("text")]);
/// assert_eq!(source.head, 1);
/// ```
pub trait TupleFrom<Source>: Sized {
    /// Converts `source` element by element.
    fn tuple_from(source: Source) -> Self;
}

impl TupleFrom<Nil> for Nil {
    #[inline]
    fn tuple_from(_source: Nil) -> Self {
        Nil
    }
}

impl TupleFrom<&Nil> for Nil {
    #[inline]
    fn tuple_from(_source: &Nil) -> Self {
        Nil
    }
}

impl<H, T, SourceHead, SourceTail> TupleFrom<Cons<SourceHead, SourceTail>> for Cons<H, T>
where
    H: From<SourceHead>,
    T: TupleFrom<SourceTail>,
{
    #[inline]
    fn tuple_from(source: Cons<SourceHead, SourceTail>) -> Self {
        Self::new(H::from(source.head), T::tuple_from(source.tail))
    }
}

impl<'a, H, T, SourceHead, SourceTail> TupleFrom<&'a Cons<SourceHead, SourceTail>> for Cons<H, T>
where
    SourceHead: Clone,
    H: From<SourceHead>,
    T: TupleFrom<&'a SourceTail>,
{
    #[inline]
    fn tuple_from(source: &'a Cons<SourceHead, SourceTail>) -> Self {
        Self::new(H::from(source.head.clone()), T::tuple_from(&source.tail))
    }
}

/// Conversion of a tuple into the native Rust tuple of its elements.
///
/// Owned tuples yield owned elements, borrowed tuples yield references, so
/// `&Tuple![A, B]` becomes `(&A, &B)`.
///
/// # Examples
///
/// ```
/// use optimus::tuple::IntoNative;
/// use optimus::tuple;
///
/// let mut values = tuple![1, 'x'];
/// assert_eq!((&values).into_native(), (&1, &'x'));
///
/// let (number, _) = (&mut values).into_native();
/// *number = 2;
/// assert_eq!(values.into_native(), (2, 'x'));
/// ```
pub trait IntoNative {
    /// The native tuple type.
    type Native;

    /// Converts into the native tuple.
    fn into_native(self) -> Self::Native;
}

macro_rules! impl_native_conversions {
    ($($T:ident $value:ident),*) => {
        impl<$($T),*> IntoNative for $crate::Tuple![$($T),*] {
            type Native = ($($T,)*);

            #[inline]
            fn into_native(self) -> Self::Native {
                let tuple_pat!($($value),*) = self;
                ($($value,)*)
            }
        }

        impl<'a, $($T),*> IntoNative for &'a $crate::Tuple![$($T),*] {
            type Native = ($(&'a $T,)*);

            #[inline]
            fn into_native(self) -> Self::Native {
                let tuple_pat!($($value),*) = self;
                ($($value,)*)
            }
        }

        impl<'a, $($T),*> IntoNative for &'a mut $crate::Tuple![$($T),*] {
            type Native = ($(&'a mut $T,)*);

            #[inline]
            fn into_native(self) -> Self::Native {
                let tuple_pat!($($value),*) = self;
                ($($value,)*)
            }
        }

        impl<$($T),*> From<($($T,)*)> for $crate::Tuple![$($T),*] {
            #[inline]
            fn from(native: ($($T,)*)) -> Self {
                let ($($value,)*) = native;
                $crate::tuple![$($value),*]
            }
        }

        impl<$($T),*> From<$crate::Tuple![$($T),*]> for ($($T,)*) {
            #[inline]
            fn from(tuple: $crate::Tuple![$($T),*]) -> Self {
                tuple.into_native()
            }
        }
    };
}

impl_native_conversions!();
impl_native_conversions!(A a);
impl_native_conversions!(A a, B b);
impl_native_conversions!(A a, B b, C c);
impl_native_conversions!(A a, B b, C c, D d);
impl_native_conversions!(A a, B b, C c, D d, E e);
impl_native_conversions!(A a, B b, C c, D d, E e, F f);
impl_native_conversions!(A a, B b, C c, D d, E e, F f, G g);
impl_native_conversions!(A a, B b, C c, D d, E e, F f, G g, H h);
