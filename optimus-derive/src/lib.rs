//! Derive macros for optimus.
//!
//! # Available Derive Macros
//!
//! - [`TupleLike`]: lets a struct take part in the tuple protocol
//!   (element access, size, conversion, unpacking)
//! - [`Template`]: lets a single-parameter function object be instantiated
//!   by `After` and `Before`
//!
//! # Example: `TupleLike`
//!
//! ```rust,ignore
//! use optimus::function::{Function, Less};
//! use optimus::transform::{Apply, Fst};
//! use optimus::TupleLike;
//!
//! #[derive(TupleLike)]
//! struct Version {
//!     major: u32,
//!     minor: u32,
//! }
//!
//! let older = Apply::<Fst, Less<u32>>::default();
//! assert!(older.call((&Version { major: 1, minor: 9 }, &Version { major: 2, minor: 0 })));
//! ```
//!
//! # Example: `Template`
//!
//! ```rust,ignore
//! use std::marker::PhantomData;
//! use optimus::function::{Function, Unbound};
//! use optimus::transform::{After, Apply};
//! use optimus::Template;
//!
//! #[derive(Default, Template)]
//! struct Double<T = Unbound>(PhantomData<T>);
//!
//! impl Function<(i32,)> for Double<i32> {
//!     type Output = i32;
//!     fn call(&self, (value,): (i32,)) -> i32 { value * 2 }
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod template;
mod tuple_like;

use proc_macro::TokenStream;

/// Derives the tuple protocol for a struct.
///
/// Field `i`, in declaration order, becomes tuple element `i`. The derive
/// implements, with paths under `::optimus`:
///
/// - `tuple::TupleSize`, with `Len` equal to the number of fields
/// - `tuple::TupleGet<U_i>` for the struct, `&Struct` and `&mut Struct`,
///   returning the field by value, by shared reference and by mutable
///   reference respectively
/// - `tuple::Unpack<F>` and `tuple::IntoNative` for the same three receivers
/// - `From` in both directions between the struct and the `Cons` list of
///   its field types
///
/// Named, tuple and unit structs are supported. Enums and unions are
/// rejected.
///
/// # Example
///
/// ```rust,ignore
/// use optimus::tuple::get;
/// use optimus::typenum::U1;
/// use optimus::{tuple, TupleLike};
///
/// #[derive(TupleLike)]
/// struct Pair(i32, &'static str);
///
/// let pair = Pair(1, "one");
/// assert_eq!(get::<U1, _>(&pair), &"one");
///
/// let list: optimus::Tuple![i32, &str] = pair.into();
/// assert_eq!(list, tuple![1, "one"]);
/// ```
#[proc_macro_derive(TupleLike)]
pub fn derive_tuple_like(input: TokenStream) -> TokenStream {
    tuple_like::derive_tuple_like_impl(input)
}

/// Derives `::optimus::function::Template` for a generic function object.
///
/// The struct must have exactly one type parameter, without bounds, and no
/// other generic parameters or where clause. `Instance<X>` is the same
/// struct with `X` substituted for that parameter.
///
/// # Example
///
/// ```rust,ignore
/// use std::marker::PhantomData;
/// use optimus::Template;
///
/// #[derive(Template)]
/// struct Square<T>(PhantomData<T>);
///
/// // <Square<()> as Template>::Instance<u8> == Square<u8>
/// ```
#[proc_macro_derive(Template)]
pub fn derive_template(input: TokenStream) -> TokenStream {
    template::derive_template_impl(input)
}
