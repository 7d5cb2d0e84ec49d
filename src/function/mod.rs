//! Function objects.
//!
//! A function object is a value that can be called. In this crate the
//! calling convention is the [`Function`] trait: the arguments arrive as one
//! native tuple, which lets a single trait describe callables of every
//! arity and lets [transformers](crate::transform) rearrange argument lists
//! generically.
//!
//! The module provides:
//!
//! - the standard operators as zero-sized objects ([`Plus`], [`Less`],
//!   [`LogicalNot`], ...)
//! - [`Id`], [`Constant`] and [`Literal`]
//! - [`FromFn`], which lifts an ordinary closure into a function object
//! - [`Template`], the type-level hook [`After`](crate::transform::After)
//!   and [`Before`](crate::transform::Before) use to instantiate a generic
//!   function object at a type only known at the call site
//!
//! # Examples
//!
//! ```
//! use optimus::function::{from_fn, Function, Multiplies, Plus};
//!
//! assert_eq!(Plus::<i32>::new().call((2, 3)), 5);
//! assert_eq!(Multiplies::<u8>::new().call((&4_u8, &5_u8)), 20);
//!
//! let shout = from_fn(|text: &str| text.to_uppercase());
//! assert_eq!(shout.call(("hey",)), "HEY");
//! ```

mod constant;
mod operators;

pub use constant::{
    ConstBool, ConstChar, ConstI8, ConstI16, ConstI32, ConstI64, ConstI128, ConstIsize, ConstU8,
    ConstU16, ConstU32, ConstU64, ConstU128, ConstUsize, Constant, Id, IntegralConstant, Literal,
};
pub use operators::{
    BitAnd, BitOr, BitXor, Divides, EqualTo, Greater, GreaterEqual, Less, LessEqual, LogicalAnd,
    LogicalNot, LogicalOr, Minus, Modulus, Multiplies, Negate, NotEqualTo, Plus,
};

/// A callable value.
///
/// `Args` is the native tuple of argument types: `()` for no arguments,
/// `(A,)` for one, `(A, B)` for two and so on. A type may implement
/// `Function` for several argument lists.
///
/// # Examples
///
/// ```
/// use optimus::function::Function;
///
/// struct Area;
///
/// impl Function<(f64, f64)> for Area {
///     type Output = f64;
///
///     fn call(&self, (width, height): (f64, f64)) -> f64 {
///         width * height
///     }
/// }
///
/// assert_eq!(Area.call((2.0, 4.0)), 8.0);
/// ```
pub trait Function<Args> {
    /// The value returned for this argument list.
    type Output;

    /// Calls the function object.
    fn call(&self, args: Args) -> Self::Output;
}

impl<F, Args> Function<Args> for &F
where
    F: Function<Args> + ?Sized,
{
    type Output = F::Output;

    #[inline]
    fn call(&self, args: Args) -> Self::Output {
        (**self).call(args)
    }
}

/// What `F` returns when called with `Args`.
pub type CallOutput<F, Args> = <F as Function<Args>>::Output;

// =============================================================================
// Declared signatures
// =============================================================================

/// The declared result type of a function object.
///
/// Together with [`UnaryFunction`] and [`BinaryFunction`] this describes a
/// function object's signature without calling it, for generic code that
/// needs the types up front.
pub trait ResultType {
    /// The type returned by a call.
    type Result;
}

/// A function object taking one declared argument.
pub trait UnaryFunction: ResultType {
    /// The argument type.
    type Argument;
}

/// A function object taking two declared arguments.
pub trait BinaryFunction: ResultType {
    /// The type of the first argument.
    type FirstArgument;
    /// The type of the second argument.
    type SecondArgument;
}

// =============================================================================
// Templates
// =============================================================================

/// A function object generic over the type it operates on.
///
/// `Instance<T>` is the same function object specialized for `T`. Generic
/// operators default their type parameter to [`Unbound`], so
/// `After<LogicalNot>` names the template and the transformer picks the
/// concrete instance from the type of the value it post-processes.
///
/// `#[derive(Template)]` implements this trait for structs with a single
/// type parameter.
///
/// # Examples
///
/// ```
/// use optimus::function::{Function, Negate, Template};
///
/// type NegateI64 = <Negate as Template>::Instance<i64>;
/// assert_eq!(NegateI64::new().call((5,)), -5);
/// ```
pub trait Template {
    /// This function object instantiated at `T`.
    type Instance<T>;
}

/// The placeholder type argument of a generic operator that has not been
/// instantiated yet.
///
/// `Unbound` has no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unbound {}

// =============================================================================
// Closures
// =============================================================================

/// A closure used as a function object.
///
/// Created with [`from_fn`]. The closure is called through `Fn`, so it can
/// be called any number of times through a shared reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FromFn<F> {
    function: F,
}

/// Wraps `function` so it can be used where a [`Function`] is expected.
///
/// Closures of zero to eight arguments are supported; the tuple of argument
/// types becomes the `Args` parameter of [`Function`].
///
/// # Examples
///
/// ```
/// use optimus::function::{from_fn, Function};
///
/// let offset = 10;
/// let shifted = from_fn(move |value: i32| value + offset);
/// assert_eq!(shifted.call((5,)), 15);
/// assert_eq!(from_fn(|| "none").call(()), "none");
/// ```
#[inline]
pub const fn from_fn<F>(function: F) -> FromFn<F> {
    FromFn { function }
}

impl<F> FromFn<F> {
    /// Returns the wrapped closure.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

macro_rules! impl_from_fn {
    ($($T:ident $value:ident),*) => {
        impl<Func, Out, $($T),*> Function<($($T,)*)> for FromFn<Func>
        where
            Func: Fn($($T),*) -> Out,
        {
            type Output = Out;

            #[inline]
            fn call(&self, ($($value,)*): ($($T,)*)) -> Out {
                (self.function)($($value),*)
            }
        }
    };
}

impl_from_fn!();
impl_from_fn!(A a);
impl_from_fn!(A a, B b);
impl_from_fn!(A a, B b, C c);
impl_from_fn!(A a, B b, C c, D d);
impl_from_fn!(A a, B b, C c, D d, E e);
impl_from_fn!(A a, B b, C c, D d, E e, F f);
impl_from_fn!(A a, B b, C c, D d, E e, F f, G g);
impl_from_fn!(A a, B b, C c, D d, E e, F f, G g, H h);
