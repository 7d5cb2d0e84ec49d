use super::{Transformed, Transformer};
use crate::function::Function;

/// Folds the arguments from the left with a binary inner object.
///
/// Called with `(acc, a1, .., an)`, the produced function object returns
/// `f(..f(f(acc, a1), a2).., an)`. With the accumulator alone it returns the
/// accumulator. The intermediate results may change type from step to step,
/// which is what lets [`Concatenate`](crate::tuple::Concatenate) grow a
/// tuple one operand at a time. Up to seven operands follow the accumulator.
///
/// # Examples
///
/// ```
/// use optimus::function::{Function, Minus};
/// use optimus::transform::{Apply, FoldLeft};
///
/// let subtract_all = Apply::<FoldLeft, Minus<i32>>::default();
/// assert_eq!(subtract_all.call((10, 1, 2, 3)), 4);
/// assert_eq!(subtract_all.call((10,)), 10);
/// ```
pub enum FoldLeft {}

impl Transformer for FoldLeft {
    type Apply<F> = Transformed<Self, F>;

    #[inline]
    fn wrap<F>(inner: F) -> Self::Apply<F> {
        Transformed::new(inner)
    }
}

impl<Func, Acc> Function<(Acc,)> for Transformed<FoldLeft, Func> {
    type Output = Acc;

    #[inline]
    fn call(&self, (accumulator,): (Acc,)) -> Acc {
        accumulator
    }
}

impl<Func, Acc, A> Function<(Acc, A)> for Transformed<FoldLeft, Func>
where
    Func: Function<(Acc, A)>,
{
    type Output = Func::Output;

    #[inline]
    fn call(&self, (accumulator, operand): (Acc, A)) -> Self::Output {
        self.inner.call((accumulator, operand))
    }
}

// Each longer argument list folds its first operand into the accumulator
// and hands the shorter list back to `Self`.
macro_rules! impl_fold_left {
    ($first:ident $first_value:ident, $($rest:ident $value:ident),+) => {
        impl<Func, Acc, $first, $($rest),+> Function<(Acc, $first, $($rest),+)>
            for Transformed<FoldLeft, Func>
        where
            Func: Function<(Acc, $first)>,
            Self: Function<(Func::Output, $($rest),+)>,
        {
            type Output = <Self as Function<(Func::Output, $($rest),+)>>::Output;

            #[inline]
            fn call(
                &self,
                (accumulator, $first_value, $($value),+): (Acc, $first, $($rest),+),
            ) -> <Self as Function<(Func::Output, $($rest),+)>>::Output {
                let folded = self.inner.call((accumulator, $first_value));
                Function::<(Func::Output, $($rest),+)>::call(self, (folded, $($value),+))
            }
        }
    };
}

impl_fold_left!(A a, B b);
impl_fold_left!(A a, B b, C c);
impl_fold_left!(A a, B b, C c, D d);
impl_fold_left!(A a, B b, C c, D d, E e);
impl_fold_left!(A a, B b, C c, D d, E e, F f);
impl_fold_left!(A a, B b, C c, D d, E e, F f, G g);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{Plus, from_fn};
    use crate::transform::{Apply, transform};
    use rstest::rstest;

    #[rstest]
    fn test_fold_is_left_associative() {
        let render = transform::<FoldLeft, _>(from_fn(|acc: String, next: char| {
            format!("({acc}{next})")
        }));
        assert_eq!(render.call((String::new(), 'a', 'b', 'c')), "(((a)b)c)");
    }

    #[rstest]
    fn test_fold_of_eight_arguments() {
        let sum = Apply::<FoldLeft, Plus<u32>>::default();
        assert_eq!(sum.call((1_u32, 2_u32, 3_u32, 4_u32, 5_u32, 6_u32, 7_u32, 8_u32)), 36);
    }

    #[rstest]
    fn test_fold_changes_accumulator_type() {
        let widen = transform::<FoldLeft, _>(from_fn(|acc: Vec<u8>, next: u8| {
            let mut acc = acc;
            acc.push(next);
            acc
        }));
        assert_eq!(widen.call((Vec::new(), 1, 2)), vec![1, 2]);
    }
}
