//! Transformers: type-level combinators over function objects.
//!
//! A transformer is a marker type that, given the type `F` of a function
//! object, names a new function-object type that embeds one `F` by value
//! and changes how it is called. The result of applying transformer `T` to
//! `F` is [`Apply<T, F>`].
//!
//! | Transformer        | Calling the result with `(a1, .., an)`                         |
//! |--------------------|----------------------------------------------------------------|
//! | [`Get<I>`]         | `f(a1[I], .., an[I])`                                          |
//! | [`Identity`]       | `f(a1, .., an)`                                                |
//! | [`Flip`]           | `f(a2, a1)`, exactly two arguments                             |
//! | [`Variadic<(G1, .., Gk)>`](Variadic) | `f(G1(a1), .., Gk(ak))`, exactly `k` arguments |
//! | [`After<G>`]       | `G(f(a1, .., an))`                                             |
//! | [`Before<G>`]      | `f(G(a1), .., G(an))`                                          |
//! | [`FoldLeft`]       | `f(..f(f(a1, a2), a3).., an)`                                  |
//! | [`Compose<(T1, .., Tk)>`](Compose) | `T1` applied to .. `Tk` applied to `f`         |
//!
//! Every transformer except [`Identity`] and [`Compose`] produces a
//! [`Transformed<T, F>`]. Since the produced types are function objects
//! themselves, transformers nest freely.
//!
//! # Examples
//!
//! ```
//! use optimus::function::{Function, Greater, Less, LogicalNot, LogicalOr};
//! use optimus::transform::{After, Apply, Compose, Flip, Fst};
//!
//! // Order pairs by their first element.
//! let by_first = Apply::<Fst, Less<i32>>::default();
//! let mut pairs = vec![(3, 'c'), (1, 'a'), (2, 'b')];
//! pairs.sort_by(|a, b| {
//!     if by_first.call((a, b)) {
//!         std::cmp::Ordering::Less
//!     } else if by_first.call((b, a)) {
//!         std::cmp::Ordering::Greater
//!     } else {
//!         std::cmp::Ordering::Equal
//!     }
//! });
//! assert_eq!(pairs, vec![(1, 'a'), (2, 'b'), (3, 'c')]);
//!
//! // `flip(less)` is `greater`.
//! let flipped = Apply::<Flip, Less<i32>>::default();
//! assert_eq!(flipped.call((2, 1)), Greater::<i32>::new().call((2, 1)));
//!
//! // Chains apply right to left: `Fst` runs first, then `After<LogicalNot>`.
//! let neither_first = Apply::<Compose<(After<LogicalNot>, Fst)>, LogicalOr<bool>>::default();
//! assert!(neither_first.call(((false, 1), (false, 2))));
//! ```

mod compose;
mod flip;
mod fold;
mod get;
mod identity;
mod process;
mod variadic;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

pub use compose::Compose;
pub use flip::Flip;
pub use fold::FoldLeft;
pub use get::{Fst, Get, Snd};
pub use identity::Identity;
pub use process::{After, Before};
pub use variadic::Variadic;

/// A type-level function from function-object types to function-object
/// types.
pub trait Transformer {
    /// The function object produced from inner function object `F`.
    type Apply<F>;

    /// Builds the produced function object around `inner`.
    fn wrap<F>(inner: F) -> Self::Apply<F>;
}

/// The function object produced by transformer `T` from inner function
/// object `F`.
pub type Apply<T, F> = <T as Transformer>::Apply<F>;

/// Applies transformer `T` to the function object `inner`.
///
/// # Examples
///
/// ```
/// use optimus::function::{Function, Minus};
/// use optimus::transform::{transform, Flip};
///
/// let subtract_from = transform::<Flip, _>(Minus::<i32>::new());
/// assert_eq!(subtract_from.call((1, 10)), 9);
/// ```
#[inline]
pub fn transform<T: Transformer, F>(inner: F) -> Apply<T, F> {
    T::wrap(inner)
}

/// The function object produced by transformer `T` around inner function
/// object `F`.
///
/// The inner object is the only state: `Transformed<T, F>` has the size of
/// `F`, and is `Default`, `Clone`, `Copy`, `Debug`, comparable and hashable
/// whenever `F` is. What calling it does is defined by the
/// [`Function`](crate::function::Function) impls of the transformer `T`.
///
/// Construction always goes through [`new`](Transformed::new) (or
/// [`Transformer::wrap`]); there is no conversion from `F`, so a
/// `Transformed` passed where an inner object is expected is wrapped again
/// rather than copied.
pub struct Transformed<T, F> {
    inner: F,
    transformer: PhantomData<fn() -> T>,
}

static_assertions::assert_eq_size!(Transformed<Flip, u64>, u64);
static_assertions::assert_not_impl_any!(
    Transformed<Flip, crate::function::Plus<i32>>: From<crate::function::Plus<i32>>
);

impl<T, F> Transformed<T, F> {
    /// Wraps `inner`.
    #[inline]
    pub const fn new(inner: F) -> Self {
        Self {
            inner,
            transformer: PhantomData,
        }
    }

    /// Returns a reference to the inner function object.
    #[inline]
    pub const fn inner(&self) -> &F {
        &self.inner
    }

    /// Unwraps the inner function object.
    #[inline]
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<T, F: Default> Default for Transformed<T, F> {
    #[inline]
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<T, F: Clone> Clone for Transformed<T, F> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<T, F: Copy> Copy for Transformed<T, F> {}

impl<T, F: PartialEq> PartialEq for Transformed<T, F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T, F: Eq> Eq for Transformed<T, F> {}

impl<T, F: Hash> Hash for Transformed<T, F> {
    #[inline]
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.inner.hash(state);
    }
}

impl<T, F: fmt::Debug> fmt::Debug for Transformed<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Transformed")
            .field("inner", &self.inner)
            .finish()
    }
}
