//! The standard operators as function objects.
//!
//! Every operator is a zero-sized, `Copy` type parameterized by the operand
//! type `T` (defaulting to [`Unbound`]). Operands may be passed by value or
//! by reference: anything that implements [`Borrow<T>`] is accepted, so
//! `Plus::<i32>::new()` can be called with `(1, 2)`, `(&1, &2)` or
//! `(&1, 2)`.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::{BinaryFunction, Function, ResultType, Template, UnaryFunction, Unbound};

#[inline]
fn operand<T, A: Borrow<T>>(argument: &A) -> &T {
    <A as Borrow<T>>::borrow(argument)
}

macro_rules! function_object {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<T = Unbound> {
            marker: PhantomData<fn() -> T>,
        }

        impl<T> $name<T> {
            /// Creates the function object.
            #[inline]
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    marker: PhantomData,
                }
            }
        }

        impl<T> Default for $name<T> {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> Clone for $name<T> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> PartialEq for $name<T> {
            #[inline]
            fn eq(&self, _other: &Self) -> bool {
                true
            }
        }

        impl<T> Eq for $name<T> {}

        impl<T> Hash for $name<T> {
            #[inline]
            fn hash<S: Hasher>(&self, _state: &mut S) {}
        }

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(stringify!($name))
            }
        }

        impl<T> Template for $name<T> {
            type Instance<X> = $name<X>;
        }
    };
}

macro_rules! binary_signature {
    ($name:ident, $result:ty) => {
        impl<T> ResultType for $name<T> {
            type Result = $result;
        }

        impl<T> BinaryFunction for $name<T> {
            type FirstArgument = T;
            type SecondArgument = T;
        }
    };
}

macro_rules! unary_signature {
    ($name:ident, $result:ty) => {
        impl<T> ResultType for $name<T> {
            type Result = $result;
        }

        impl<T> UnaryFunction for $name<T> {
            type Argument = T;
        }
    };
}

// =============================================================================
// Arithmetic
// =============================================================================

macro_rules! arithmetic {
    ($(#[$meta:meta])* $name:ident, $Op:ident, $method:ident) => {
        function_object!($(#[$meta])* $name);
        binary_signature!($name, T);

        impl<T, L, R> Function<(L, R)> for $name<T>
        where
            L: Borrow<T>,
            R: Borrow<T>,
            for<'a> &'a T: ::core::ops::$Op<&'a T, Output = T>,
        {
            type Output = T;

            #[inline]
            fn call(&self, (lhs, rhs): (L, R)) -> T {
                ::core::ops::$Op::$method(operand::<T, _>(&lhs), operand::<T, _>(&rhs))
            }
        }
    };
}

arithmetic!(
    /// `lhs + rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimus::function::{Function, Plus};
    ///
    /// assert_eq!(Plus::<i32>::new().call((40, 2)), 42);
    /// assert_eq!(Plus::<f64>::new().call((&0.5, &0.25)), 0.75);
    /// ```
    Plus, Add, add
);
arithmetic!(
    /// `lhs - rhs`.
    Minus, Sub, sub
);
arithmetic!(
    /// `lhs * rhs`.
    Multiplies, Mul, mul
);
arithmetic!(
    /// `lhs / rhs`.
    ///
    /// # Panics
    ///
    /// Panics exactly when the underlying `/` does, e.g. integer division
    /// by zero.
    Divides, Div, div
);
arithmetic!(
    /// `lhs % rhs`.
    ///
    /// # Panics
    ///
    /// Panics exactly when the underlying `%` does, e.g. integer remainder
    /// by zero.
    Modulus, Rem, rem
);
arithmetic!(
    /// `lhs & rhs`.
    BitAnd, BitAnd, bitand
);
arithmetic!(
    /// `lhs | rhs`.
    BitOr, BitOr, bitor
);
arithmetic!(
    /// `lhs ^ rhs`.
    BitXor, BitXor, bitxor
);

function_object!(
    /// `-value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimus::function::{Function, Negate};
    ///
    /// assert_eq!(Negate::<i8>::new().call((7,)), -7);
    /// ```
    Negate
);
unary_signature!(Negate, T);

impl<T, A> Function<(A,)> for Negate<T>
where
    A: Borrow<T>,
    for<'a> &'a T: ::core::ops::Neg<Output = T>,
{
    type Output = T;

    #[inline]
    fn call(&self, (value,): (A,)) -> T {
        -operand::<T, _>(&value)
    }
}

static_assertions::assert_eq_size!(Plus<i64>, Negate<String>, ());

// =============================================================================
// Comparison
// =============================================================================

macro_rules! comparison {
    ($(#[$meta:meta])* $name:ident, $Trait:ident :: $method:ident) => {
        function_object!($(#[$meta])* $name);
        binary_signature!($name, bool);

        impl<T, L, R> Function<(L, R)> for $name<T>
        where
            L: Borrow<T>,
            R: Borrow<T>,
            T: $Trait,
        {
            type Output = bool;

            #[inline]
            fn call(&self, (lhs, rhs): (L, R)) -> bool {
                $Trait::$method(operand::<T, _>(&lhs), operand::<T, _>(&rhs))
            }
        }
    };
}

comparison!(
    /// `lhs == rhs`.
    EqualTo, PartialEq::eq
);
comparison!(
    /// `lhs != rhs`.
    NotEqualTo, PartialEq::ne
);
comparison!(
    /// `lhs > rhs`.
    Greater, PartialOrd::gt
);
comparison!(
    /// `lhs < rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimus::function::{Function, Less};
    ///
    /// let less = Less::<String>::new();
    /// assert!(less.call((&String::from("apple"), &String::from("banana"))));
    /// ```
    Less, PartialOrd::lt
);
comparison!(
    /// `lhs >= rhs`.
    GreaterEqual, PartialOrd::ge
);
comparison!(
    /// `lhs <= rhs`.
    LessEqual, PartialOrd::le
);

// =============================================================================
// Logical
// =============================================================================

function_object!(
    /// `lhs && rhs`, with both operands converted to `bool`.
    LogicalAnd
);
binary_signature!(LogicalAnd, bool);

impl<T, L, R> Function<(L, R)> for LogicalAnd<T>
where
    L: Borrow<T>,
    R: Borrow<T>,
    T: Clone + Into<bool>,
{
    type Output = bool;

    #[inline]
    fn call(&self, (lhs, rhs): (L, R)) -> bool {
        operand::<T, _>(&lhs).clone().into() && operand::<T, _>(&rhs).clone().into()
    }
}

function_object!(
    /// `lhs || rhs`, with both operands converted to `bool`.
    LogicalOr
);
binary_signature!(LogicalOr, bool);

impl<T, L, R> Function<(L, R)> for LogicalOr<T>
where
    L: Borrow<T>,
    R: Borrow<T>,
    T: Clone + Into<bool>,
{
    type Output = bool;

    #[inline]
    fn call(&self, (lhs, rhs): (L, R)) -> bool {
        operand::<T, _>(&lhs).clone().into() || operand::<T, _>(&rhs).clone().into()
    }
}

function_object!(
    /// `!value`, with the operand converted to `bool`.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimus::function::{Function, LogicalNot};
    ///
    /// assert!(LogicalNot::<bool>::new().call((false,)));
    /// ```
    LogicalNot
);
unary_signature!(LogicalNot, bool);

impl<T, A> Function<(A,)> for LogicalNot<T>
where
    A: Borrow<T>,
    T: Clone + Into<bool>,
{
    type Output = bool;

    #[inline]
    fn call(&self, (value,): (A,)) -> bool {
        !operand::<T, _>(&value).clone().into()
    }
}
