//! Post- and pre-processing with a function template.

use std::marker::PhantomData;

use super::{Transformed, Transformer};
use crate::function::{CallOutput, Function, Template};

/// Passes the inner object's result through `G` before returning it.
///
/// `G` is a [`Template`]: the post-processing object is
/// `G::Instance<R>` where `R` is the inner result type, default-constructed
/// on every call. Arguments reach the inner object unchanged, whatever their
/// number.
///
/// # Examples
///
/// ```
/// use optimus::function::{Function, LogicalNot, LogicalOr};
/// use optimus::transform::{After, Apply};
///
/// let nor = Apply::<After<LogicalNot>, LogicalOr<bool>>::default();
/// assert!(nor.call((false, false)));
/// assert!(!nor.call((false, true)));
/// assert!(!nor.call((true, false)));
/// assert!(!nor.call((true, true)));
/// ```
pub struct After<G> {
    function: PhantomData<fn() -> G>,
}

impl<G> Transformer for After<G> {
    type Apply<F> = Transformed<Self, F>;

    #[inline]
    fn wrap<F>(inner: F) -> Self::Apply<F> {
        Transformed::new(inner)
    }
}

impl<G, Func, Args> Function<Args> for Transformed<After<G>, Func>
where
    G: Template,
    Func: Function<Args>,
    G::Instance<Func::Output>: Default + Function<(Func::Output,)>,
{
    type Output = CallOutput<G::Instance<Func::Output>, (Func::Output,)>;

    #[inline]
    fn call(&self, args: Args) -> Self::Output {
        let result = self.inner.call(args);
        <G::Instance<Func::Output>>::default().call((result,))
    }
}

/// Passes every argument through `G` before the call.
///
/// Each argument `Ai` is processed by its own `G::Instance<Ai>`, so
/// arguments of different types are handled by different instances of the
/// same template. Supports up to eight arguments.
///
/// # Examples
///
/// ```
/// use optimus::function::{Function, LogicalNot, LogicalOr};
/// use optimus::transform::{Apply, Before};
///
/// let nand = Apply::<Before<LogicalNot>, LogicalOr<bool>>::default();
/// assert!(nand.call((false, false)));
/// assert!(nand.call((false, true)));
/// assert!(nand.call((true, false)));
/// assert!(!nand.call((true, true)));
/// ```
pub struct Before<G> {
    function: PhantomData<fn() -> G>,
}

impl<G> Transformer for Before<G> {
    type Apply<F> = Transformed<Self, F>;

    #[inline]
    fn wrap<F>(inner: F) -> Self::Apply<F> {
        Transformed::new(inner)
    }
}

macro_rules! impl_before {
    ($($T:ident $value:ident),*) => {
        impl<Pre, Func, $($T),*> Function<($($T,)*)> for Transformed<Before<Pre>, Func>
        where
            Pre: Template,
            $(Pre::Instance<$T>: Default + Function<($T,)>,)*
            Func: Function<($(CallOutput<Pre::Instance<$T>, ($T,)>,)*)>,
        {
            type Output = Func::Output;

            #[inline]
            fn call(&self, ($($value,)*): ($($T,)*)) -> Self::Output {
                self.inner.call(($(<Pre::Instance<$T>>::default().call(($value,)),)*))
            }
        }
    };
}

impl_before!();
impl_before!(A a);
impl_before!(A a, B b);
impl_before!(A a, B b, C c);
impl_before!(A a, B b, C c, D d);
impl_before!(A a, B b, C c, D d, E e);
impl_before!(A a, B b, C c, D d, E e, F f);
impl_before!(A a, B b, C c, D d, E e, F f, G g);
impl_before!(A a, B b, C c, D d, E e, F f, G g, H h);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{Id, LogicalNot, LogicalOr, Negate, Plus, from_fn};
    use crate::transform::{Apply, transform};
    use rstest::rstest;

    #[rstest]
    #[case(false, false, true)]
    #[case(false, true, false)]
    #[case(true, false, false)]
    #[case(true, true, false)]
    fn test_after_logical_not_over_logical_or(
        #[case] lhs: bool,
        #[case] rhs: bool,
        #[case] expected: bool,
    ) {
        let nor = Apply::<After<LogicalNot>, LogicalOr<bool>>::default();
        assert_eq!(nor.call((lhs, rhs)), expected);
    }

    #[rstest]
    #[case(false, false, true)]
    #[case(false, true, true)]
    #[case(true, false, true)]
    #[case(true, true, false)]
    fn test_before_logical_not_over_logical_or(
        #[case] lhs: bool,
        #[case] rhs: bool,
        #[case] expected: bool,
    ) {
        let nand = Apply::<Before<LogicalNot>, LogicalOr<bool>>::default();
        assert_eq!(nand.call((lhs, rhs)), expected);
    }

    #[rstest]
    fn test_after_instantiates_at_result_type() {
        let length = transform::<After<Negate>, _>(from_fn(|text: &str| {
            i64::try_from(text.len()).unwrap_or(i64::MAX)
        }));
        assert_eq!(length.call(("four",)), -4);
    }

    #[rstest]
    fn test_before_instantiates_per_argument_type() {
        let negated_sum =
            transform::<Before<Negate>, _>(from_fn(|a: i32, b: f64| f64::from(a) + b));
        assert_eq!(negated_sum.call((1_i32, 0.5_f64)), -1.5);
    }

    #[rstest]
    fn test_after_id_is_transparent() {
        let plus = Apply::<After<Id>, Plus<i32>>::default();
        assert_eq!(plus.call((1, 2)), 3);
    }

    #[rstest]
    fn test_before_without_arguments() {
        let constant = transform::<Before<Id>, _>(from_fn(|| 'c'));
        assert_eq!(constant.call(()), 'c');
    }
}
