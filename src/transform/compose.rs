use std::marker::PhantomData;

use super::Transformer;

/// Chains transformers, applied right to left.
///
/// `Ts` is a native tuple `(T1, .., Tk)` of one to eight transformers.
/// `Apply<Compose<(T1, T2, T3)>, F>` is
/// `Apply<T1, Apply<T2, Apply<T3, F>>>`: `T3` wraps `F` directly and `T1` is
/// the outermost layer. A one-element chain is the same type as its only
/// transformer.
///
/// An empty chain is not a transformer.
///
/// # Examples
///
/// ```
/// use optimus::function::{Function, Less, LogicalNot};
/// use optimus::transform::{After, Apply, Compose, Flip, Snd};
///
/// // not(flip(snd(less))): is the second element of `a` at most that of `b`?
/// let at_most = Apply::<Compose<(After<LogicalNot>, Flip, Snd)>, Less<u8>>::default();
/// assert!(at_most.call(((0, 1_u8), (0, 3_u8))));
/// assert!(at_most.call(((0, 3_u8), (0, 3_u8))));
/// assert!(!at_most.call(((0, 5_u8), (0, 3_u8))));
/// ```
pub struct Compose<Ts> {
    transformers: PhantomData<fn() -> Ts>,
}

impl<T1: Transformer> Transformer for Compose<(T1,)> {
    type Apply<F> = T1::Apply<F>;

    #[inline]
    fn wrap<F>(inner: F) -> Self::Apply<F> {
        T1::wrap(inner)
    }
}

macro_rules! impl_compose {
    ($first:ident, $($rest:ident),+) => {
        impl<$first: Transformer, $($rest),+> Transformer for Compose<($first, $($rest,)+)>
        where
            Compose<($($rest,)+)>: Transformer,
        {
            type Apply<F> = $first::Apply<<Compose<($($rest,)+)> as Transformer>::Apply<F>>;

            #[inline]
            fn wrap<F>(inner: F) -> Self::Apply<F> {
                $first::wrap(<Compose<($($rest,)+)> as Transformer>::wrap(inner))
            }
        }
    };
}

impl_compose!(T1, T2);
impl_compose!(T1, T2, T3);
impl_compose!(T1, T2, T3, T4);
impl_compose!(T1, T2, T3, T4, T5);
impl_compose!(T1, T2, T3, T4, T5, T6);
impl_compose!(T1, T2, T3, T4, T5, T6, T7);
impl_compose!(T1, T2, T3, T4, T5, T6, T7, T8);
