//! Tuple-unpacking invocation.

use super::tuple_pat;

/// A tuple whose elements can be passed to `F` as positional arguments.
///
/// Implemented for [`Cons`](super::Cons) chains and native tuples of up to
/// eight elements, each by value (elements are moved into the call), by
/// shared reference (elements are lent as `&T`) and by mutable reference
/// (elements are lent as `&mut T`).
pub trait Unpack<F> {
    /// What `F` returns for the unpacked argument list.
    type Output;

    /// Calls `function` with the elements of `self`.
    fn unpack(self, function: F) -> Self::Output;
}

/// Calls `function` with the elements of `tuple` as positional arguments.
///
/// The result is exactly what `function` returns.
///
/// # Examples
///
/// ```
/// use optimus::tuple::apply;
/// use optimus::tuple;
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// assert_eq!(apply(volume, tuple![2, 3, 4]), 24);
/// assert_eq!(apply(volume, (2, 3, 4)), 24);
///
/// // Borrowed tuples lend their elements.
/// let mut names = tuple![String::from("a"), String::from("b")];
/// apply(|first: &mut String, second: &mut String| first.push_str(second), &mut names);
/// assert_eq!(names.head, "ab");
/// ```
#[inline]
pub fn apply<F, T>(function: F, tuple: T) -> T::Output
where
    T: Unpack<F>,
{
    tuple.unpack(function)
}

/// Calls a [`Function`](crate::function::Function) object with the
/// elements of `tuple`.
///
/// # Examples
///
/// ```
/// use optimus::function::Plus;
/// use optimus::tuple::invoke;
/// use optimus::tuple;
///
/// let plus = Plus::<i32>::new();
/// assert_eq!(invoke(&plus, tuple![40, 2]), 42);
/// assert_eq!(invoke(&plus, &tuple![40, 2]), 42);
/// ```
#[cfg(feature = "function")]
#[inline]
pub fn invoke<F, T>(function: &F, tuple: T) -> F::Output
where
    T: super::IntoNative,
    F: crate::function::Function<T::Native> + ?Sized,
{
    function.call(tuple.into_native())
}

macro_rules! impl_unpack {
    ($($T:ident $value:ident),*) => {
        impl<Func, Out, $($T),*> Unpack<Func> for $crate::Tuple![$($T),*]
        where
            Func: FnOnce($($T),*) -> Out,
        {
            type Output = Out;

            #[inline]
            fn unpack(self, function: Func) -> Out {
                let tuple_pat!($($value),*) = self;
                function($($value),*)
            }
        }

        impl<'a, Func, Out, $($T),*> Unpack<Func> for &'a $crate::Tuple![$($T),*]
        where
            Func: FnOnce($(&'a $T),*) -> Out,
        {
            type Output = Out;

            #[inline]
            fn unpack(self, function: Func) -> Out {
                let tuple_pat!($($value),*) = self;
                function($($value),*)
            }
        }

        impl<'a, Func, Out, $($T),*> Unpack<Func> for &'a mut $crate::Tuple![$($T),*]
        where
            Func: FnOnce($(&'a mut $T),*) -> Out,
        {
            type Output = Out;

            #[inline]
            fn unpack(self, function: Func) -> Out {
                let tuple_pat!($($value),*) = self;
                function($($value),*)
            }
        }

        impl<Func, Out, $($T),*> Unpack<Func> for ($($T,)*)
        where
            Func: FnOnce($($T),*) -> Out,
        {
            type Output = Out;

            #[inline]
            fn unpack(self, function: Func) -> Out {
                let ($($value,)*) = self;
                function($($value),*)
            }
        }

        impl<'a, Func, Out, $($T),*> Unpack<Func> for &'a ($($T,)*)
        where
            Func: FnOnce($(&'a $T),*) -> Out,
        {
            type Output = Out;

            #[inline]
            fn unpack(self, function: Func) -> Out {
                let ($($value,)*) = self;
                function($($value),*)
            }
        }

        impl<'a, Func, Out, $($T),*> Unpack<Func> for &'a mut ($($T,)*)
        where
            Func: FnOnce($(&'a mut $T),*) -> Out,
        {
            type Output = Out;

            #[inline]
            fn unpack(self, function: Func) -> Out {
                let ($($value,)*) = self;
                function($($value),*)
            }
        }
    };
}

impl_unpack!();
impl_unpack!(A a);
impl_unpack!(A a, B b);
impl_unpack!(A a, B b, C c);
impl_unpack!(A a, B b, C c, D d);
impl_unpack!(A a, B b, C c, D d, E e);
impl_unpack!(A a, B b, C c, D d, E e, F f);
impl_unpack!(A a, B b, C c, D d, E e, F f, G g);
impl_unpack!(A a, B b, C c, D d, E e, F f, G g, H h);
