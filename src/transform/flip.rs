use super::{Transformed, Transformer};
use crate::function::Function;

/// Swaps the two arguments before the call.
///
/// The produced function object is callable with exactly two arguments;
/// any other argument count does not compile.
///
/// # Examples
///
/// ```
/// use optimus::function::{Divides, Function};
/// use optimus::transform::{Apply, Flip};
///
/// let divide_into = Apply::<Flip, Divides<i32>>::default();
/// assert_eq!(divide_into.call((2, 10)), 5);
/// ```
pub enum Flip {}

impl Transformer for Flip {
    type Apply<F> = Transformed<Self, F>;

    #[inline]
    fn wrap<F>(inner: F) -> Self::Apply<F> {
        Transformed::new(inner)
    }
}

impl<Func, A, B> Function<(A, B)> for Transformed<Flip, Func>
where
    Func: Function<(B, A)>,
{
    type Output = Func::Output;

    #[inline]
    fn call(&self, (first, second): (A, B)) -> Self::Output {
        self.inner.call((second, first))
    }
}
