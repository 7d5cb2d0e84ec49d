//! Tuple concatenation.

use super::{Cons, Nil, Tuple};

/// Concatenation of two tuples.
///
/// `left.concat(right)` is a tuple whose first elements are those of `left`
/// and whose remaining elements are those of `right`, both in their original
/// order. Every element is moved into the result.
pub trait Concat<Rhs> {
    /// The concatenated tuple type.
    type Output;

    /// Appends `rhs` after the elements of `self`.
    fn concat(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs: Tuple> Concat<Rhs> for Nil {
    type Output = Rhs;

    #[inline]
    fn concat(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T, Rhs> Concat<Rhs> for Cons<H, T>
where
    T: Concat<Rhs>,
{
    type Output = Cons<H, T::Output>;

    #[inline]
    fn concat(self, rhs: Rhs) -> Self::Output {
        Cons::new(self.head, self.tail.concat(rhs))
    }
}

/// Concatenates two tuples.
///
/// # Examples
///
/// ```
/// use optimus::tuple::{concat, Nil};
/// use optimus::tuple;
///
/// assert_eq!(concat(tuple![1, 2], tuple!['a']), tuple![1, 2, 'a']);
/// assert_eq!(concat(Nil, tuple![1]), tuple![1]);
/// assert_eq!(concat(tuple![1], Nil), tuple![1]);
/// ```
#[inline]
pub fn concat<L, R>(left: L, right: R) -> L::Output
where
    L: Concat<R>,
{
    left.concat(right)
}

/// Concatenation as a binary function object.
///
/// Useful wherever a [`Function`](crate::function::Function) is expected,
/// for instance as the step of a left fold:
///
/// ```
/// use optimus::function::Function;
/// use optimus::transform::{Apply, FoldLeft};
/// use optimus::tuple::Concatenate;
/// use optimus::tuple;
///
/// let concat_all = Apply::<FoldLeft, Concatenate>::default();
/// let joined = concat_all.call((tuple![1], tuple![2, 3], tuple!["four"]));
/// assert_eq!(joined, tuple![1, 2, 3, "four"]);
/// ```
#[cfg(feature = "function")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Concatenate;

#[cfg(feature = "function")]
impl<L, R> crate::function::Function<(L, R)> for Concatenate
where
    L: Concat<R>,
{
    type Output = L::Output;

    #[inline]
    fn call(&self, (left, right): (L, R)) -> Self::Output {
        left.concat(right)
    }
}

/// Concatenates any number of tuples, left to right.
///
/// `tuple_cat!(a, b, c)` is `concat(concat(a, b), c)`. With a single
/// argument the tuple is returned unchanged; with none the result is
/// [`Nil`].
///
/// # Examples
///
/// ```
/// use optimus::{tuple, tuple_cat};
///
/// let joined = tuple_cat!(tuple![1, 2], tuple![], tuple!["three"], tuple![4.0]);
/// assert_eq!(joined, tuple![1, 2, "three", 4.0]);
/// ```
#[macro_export]
macro_rules! tuple_cat {
    () => {
        $crate::tuple::Nil
    };
    ($single:expr $(,)?) => {
        $single
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::tuple_cat!($crate::tuple::concat($first, $second) $(, $rest)*)
    };
}
