//! # optimus
//!
//! Compile-time function objects, transformer combinators and a
//! const-friendly heterogeneous tuple.
//!
//! ## Overview
//!
//! The crate is built around two tightly coupled pieces:
//!
//! - **Tuples**: a recursive head/tail list ([`tuple::Cons`] / [`tuple::Nil`])
//!   with element access resolved by induction on type-level indices,
//!   size and element-type queries, concatenation and tuple-unpacking
//!   invocation ([`tuple::apply`]).
//! - **Transformers**: type-level combinators that wrap a function object and
//!   adapt how it is called (project a tuple element, flip two arguments,
//!   pre- or post-process, chain any number of adaptations).
//!
//! Around them sit the plain function objects ([`function::Plus`],
//! [`function::Less`], [`function::Id`], [`function::Constant`], ...) and the
//! integer sequences ([`sequence::MakeIndexSequence`]) that describe tuple
//! positions at the type level.
//!
//! ## Feature Flags
//!
//! - `tuple`: tuples, element access, concatenation, apply and integer sequences
//! - `function`: the [`function::Function`] trait and plain function objects
//! - `transform`: transformer combinators
//! - `derive`: `#[derive(TupleLike)]` and `#[derive(Template)]`
//! - `serde`: serialization of tuples as fixed-length sequences
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optimus::prelude::*;
//!
//! // Compare pairs by their first element.
//! let by_first = Apply::<Fst, Less<i32>>::default();
//! assert!(by_first.call((&(1, 9), &(2, 0))));
//!
//! // Negate the result of an `or`.
//! let nor = Apply::<After<LogicalNot>, LogicalOr<bool>>::default();
//! assert!(nor.call((false, false)));
//! assert!(!nor.call((true, false)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros.
///
/// # Usage
///
/// ```rust
/// use optimus::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "tuple")]
    pub use crate::sequence::*;

    #[cfg(feature = "tuple")]
    pub use crate::tuple::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "transform")]
    pub use crate::transform::*;

    #[cfg(feature = "derive")]
    pub use optimus_derive::{Template, TupleLike};

    pub use typenum::consts::{U0, U1, U2, U3, U4, U5, U6, U7};
}

#[cfg(feature = "tuple")]
pub mod sequence;

#[cfg(feature = "tuple")]
pub mod tuple;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "transform")]
pub mod transform;

#[cfg(feature = "derive")]
pub use optimus_derive::{Template, TupleLike};

// Index types are typenum unsigned integers; the derive macros name them
// through this path.
pub use typenum;
