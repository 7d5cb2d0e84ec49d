use std::marker::PhantomData;

use super::{Transformed, Transformer};
use crate::function::{CallOutput, Function};

/// Applies one function object to each argument before the call.
///
/// `Gs` is a native tuple `(G1, .., Gk)` of default-constructible function
/// objects. The produced function object takes exactly `k` arguments, passes
/// argument `i` through a fresh `Gi`, and calls the inner object with the
/// `k` results in order.
///
/// A call with any other number of arguments does not compile.
///
/// # Examples
///
/// ```
/// use optimus::function::{Function, Id, Minus, Negate};
/// use optimus::transform::{Apply, Variadic};
///
/// let minus = Apply::<Variadic<(Negate<i32>, Id)>, Minus<i32>>::default();
/// assert_eq!(minus.call((3, 4)), -7);
/// ```
pub struct Variadic<Gs> {
    transforms: PhantomData<fn() -> Gs>,
}

impl<Gs> Transformer for Variadic<Gs> {
    type Apply<F> = Transformed<Self, F>;

    #[inline]
    fn wrap<F>(inner: F) -> Self::Apply<F> {
        Transformed::new(inner)
    }
}

macro_rules! impl_variadic {
    ($($G:ident $T:ident $value:ident),*) => {
        impl<Func, $($G, $T),*> Function<($($T,)*)> for Transformed<Variadic<($($G,)*)>, Func>
        where
            $($G: Default + Function<($T,)>,)*
            Func: Function<($(CallOutput<$G, ($T,)>,)*)>,
        {
            type Output = Func::Output;

            #[inline]
            fn call(&self, ($($value,)*): ($($T,)*)) -> Self::Output {
                self.inner.call(($($G::default().call(($value,)),)*))
            }
        }
    };
}

impl_variadic!();
impl_variadic!(G1 A1 a1);
impl_variadic!(G1 A1 a1, G2 A2 a2);
impl_variadic!(G1 A1 a1, G2 A2 a2, G3 A3 a3);
impl_variadic!(G1 A1 a1, G2 A2 a2, G3 A3 a3, G4 A4 a4);
impl_variadic!(G1 A1 a1, G2 A2 a2, G3 A3 a3, G4 A4 a4, G5 A5 a5);
impl_variadic!(G1 A1 a1, G2 A2 a2, G3 A3 a3, G4 A4 a4, G5 A5 a5, G6 A6 a6);
impl_variadic!(G1 A1 a1, G2 A2 a2, G3 A3 a3, G4 A4 a4, G5 A5 a5, G6 A6 a6, G7 A7 a7);
impl_variadic!(
    G1 A1 a1, G2 A2 a2, G3 A3 a3, G4 A4 a4, G5 A5 a5, G6 A6 a6, G7 A7 a7, G8 A8 a8
);
