//! # Arity
//!
//! Compile-time arity counting, arity-directed dispatch, and bounds-checked
//! fixed-array access.
//!
//! The toolkit lets a call site supply a variable number of arguments and
//! have the implementation for exactly that count selected before the
//! program runs, with no count parameter and no runtime branch:
//!
//! ```
//! fn greet1(name: &str) -> String { format!("hello, {name}") }
//! fn greet2(name: &str, title: &str) -> String { format!("hello, {title} {name}") }
//!
//! use arity::dispatch;
//!
//! assert_eq!(dispatch!(greet, "ada"), "hello, ada");
//! assert_eq!(dispatch!(greet, "ada", "countess"), "hello, countess ada");
//! ```
//!
//! ## Surface
//!
//! - [`arity_of!`]: the argument count of an invocation, as an integer
//!   literal (0 through [`MAX_ARITY`]).
//! - [`dispatch!`]: joins a base name with the computed count and calls
//!   the resulting `baseK` item with the original arguments.
//! - [`with_arity!`]: hands the computed count to a caller-chosen macro as
//!   a literal token, for building things other than a direct call.
//! - [`join!`] and [`to_str!`]: identifier merging and token
//!   stringification.
//! - [`checked_get`](fn@checked_get), [`try_get`], [`checked_get!`]:
//!   fixed-array access with the bound asserted at the access point,
//!   const-evaluable.
//! - [`Arity`]: the type-level pack width of a tuple.
//!
//! ## Core Principles
//!
//! - **Everything resolves before the program runs**: counting and
//!   overload selection happen during macro expansion; a missing `baseK`
//!   implementation or an over-long argument list is a compile error,
//!   never a runtime condition.
//! - **Arguments pass through verbatim**: every stage measures and
//!   forwards the argument list without reordering or early evaluation.
//! - **One runtime failure exists**: the checked accessor's assertion.
//!   Everything else that can go wrong goes wrong in the compiler.

pub mod array;
pub mod count;
pub mod dispatch;
pub mod error;
pub mod token;
pub mod tuple;

pub use crate::array::{checked_get, try_get};
pub use crate::count::MAX_ARITY;
pub use crate::error::ArityError;
pub use crate::tuple::Arity;

// Expansion-time support for the exported macros. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}
