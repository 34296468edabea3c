//! Crate error type.
//!
//! Almost everything here resolves at compile time, where failures surface
//! as compiler errors rather than values. The only fallible runtime surface
//! is checked array access, and [`ArityError`] is its error.

use thiserror::Error;

/// Errors produced by the fallible surfaces of the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArityError {
    /// The requested index does not exist in a fixed-size array.
    #[error("index {index} is out of bounds for an array of length {len}")]
    IndexOutOfBounds {
        /// The index that was asked for.
        index: usize,
        /// The length of the array it was asked of.
        len: usize,
    },
}
