use std::marker::PhantomData;

use typenum::{U0, U1};

use super::{Transformed, Transformer};
use crate::function::Function;
use crate::tuple::{TupleElement, TupleGet};

/// Projects element `I` out of every argument before the call.
///
/// Each argument only has to implement [`TupleGet<I>`]: `Cons` lists, native
/// tuples and `#[derive(TupleLike)]` structs all qualify, by value or by
/// reference. The projection keeps the argument's category, so a `&(A, B)`
/// argument yields a `&A`.
///
/// # Examples
///
/// ```
/// use optimus::function::{Function, Plus};
/// use optimus::transform::{Apply, Get, Snd};
/// use optimus::typenum::U2;
/// use optimus::tuple;
///
/// let add_seconds = Apply::<Snd, Plus<i32>>::default();
/// assert_eq!(add_seconds.call(((0, 1), (0, 2))), 3);
///
/// let add_thirds = Apply::<Get<U2>, Plus<i32>>::default();
/// assert_eq!(add_thirds.call((&tuple![0, 0, 5], &tuple![0, 0, 6])), 11);
/// ```
pub struct Get<I> {
    index: PhantomData<fn() -> I>,
}

/// Projects the first element of every argument.
pub type Fst = Get<U0>;

/// Projects the second element of every argument.
pub type Snd = Get<U1>;

impl<I> Transformer for Get<I> {
    type Apply<F> = Transformed<Self, F>;

    #[inline]
    fn wrap<F>(inner: F) -> Self::Apply<F> {
        Transformed::new(inner)
    }
}

macro_rules! impl_get {
    ($($T:ident $value:ident),+) => {
        impl<I, Func, $($T),+> Function<($($T,)+)> for Transformed<Get<I>, Func>
        where
            $($T: TupleGet<I>,)+
            Func: Function<($(TupleElement<I, $T>,)+)>,
        {
            type Output = Func::Output;

            #[inline]
            fn call(&self, ($($value,)+): ($($T,)+)) -> Self::Output {
                self.inner.call(($(TupleGet::<I>::get($value),)+))
            }
        }
    };
}

impl_get!(A a);
impl_get!(A a, B b);
impl_get!(A a, B b, C c);
impl_get!(A a, B b, C c, D d);
impl_get!(A a, B b, C c, D d, E e);
impl_get!(A a, B b, C c, D d, E e, F f);
impl_get!(A a, B b, C c, D d, E e, F f, G g);
impl_get!(A a, B b, C c, D d, E e, F f, G g, H h);
