//! # Arity Counting
//!
//! This module is the counting core of the toolkit: `arity_of!` expands to
//! the number of comma-separated arguments it received, as a plain integer
//! literal, entirely during macro expansion.
//!
//! ## Core Principles
//!
//! - **Positional, not additive**: the count is read off a descending index
//!   table rather than summed with `0 + 1 + ...`. A sum is an expression; a
//!   positional read yields a *single literal token*, which is what the
//!   dispatch layer must have in order to paste the count into an
//!   identifier.
//! - **Pure Transformation**: arguments are only measured, never evaluated.
//!   `arity_of!(a, b)` compiles even when `a` and `b` name nothing; the
//!   tokens are discarded by the picker before name resolution runs.
//! - **Fixed ceiling**: the table supports arities `0..=63`. Raising the
//!   ceiling means extending the table in `arity_of!` and the position
//!   slots in `__arity_pick!` by the same amount; the two must always move
//!   together.
//!
//! ## How the read works
//!
//! `arity_of!` appends the table `63, 62, ..., 1, 0` to the argument list and
//! hands the combined sequence to the hidden picker `__arity_pick!`, whose
//! pattern binds the first 63 positions and returns the 64th token. Appending `k` arguments
//! shifts the table right by `k` slots, so the 64th position always lands on
//! the table entry whose value is exactly `k`.

/// Highest argument count the counting and dispatch macros support.
///
/// Invocations beyond this ceiling misread: an argument token, not a table
/// entry, lands in the counting slot. [`crate::dispatch!`] fails to compile
/// in that case; [`crate::arity_of!`] expands to the stray token.
pub const MAX_ARITY: usize = 63;

/// Expands to the number of arguments supplied, as an integer literal.
///
/// The result is untyped and usable anywhere a literal is, including
/// `const` initializers and array lengths. Zero arguments yield `0`.
/// A trailing comma is accepted.
///
/// ```
/// use arity::arity_of;
///
/// assert_eq!(arity_of!(), 0);
/// assert_eq!(arity_of!('a'), 1);
/// assert_eq!(arity_of!('a', "b", 3), 3);
///
/// const WIDTH: usize = arity_of!(1, 2, 3, 4);
/// let row = [0u8; arity_of!(x, y)];
/// assert_eq!(WIDTH, 4);
/// assert_eq!(row.len(), 2);
/// ```
#[macro_export]
macro_rules! arity_of {
    ($($arg:expr),* $(,)?) => {
        $crate::__arity_pick!($($arg,)*
            63, 62, 61, 60, 59, 58, 57, 56, 55, 54,
            53, 52, 51, 50, 49, 48, 47, 46, 45, 44,
            43, 42, 41, 40, 39, 38, 37, 36, 35, 34,
            33, 32, 31, 30, 29, 28, 27, 26, 25, 24,
            23, 22, 21, 20, 19, 18, 17, 16, 15, 14,
            13, 12, 11, 10,  9,  8,  7,  6,  5,  4,
             3,  2,  1,  0)
    };
}

/// Positional read: binds 63 leading tokens, returns the 64th.
///
/// The slot count here and the table length in [`arity_of!`] must change
/// together.
#[doc(hidden)]
#[macro_export]
macro_rules! __arity_pick {
    ($_1:tt,  $_2:tt,  $_3:tt,  $_4:tt,  $_5:tt,  $_6:tt,  $_7:tt,  $_8:tt,  $_9:tt,
     $_10:tt, $_11:tt, $_12:tt, $_13:tt, $_14:tt, $_15:tt, $_16:tt, $_17:tt, $_18:tt,
     $_19:tt, $_20:tt, $_21:tt, $_22:tt, $_23:tt, $_24:tt, $_25:tt, $_26:tt, $_27:tt,
     $_28:tt, $_29:tt, $_30:tt, $_31:tt, $_32:tt, $_33:tt, $_34:tt, $_35:tt, $_36:tt,
     $_37:tt, $_38:tt, $_39:tt, $_40:tt, $_41:tt, $_42:tt, $_43:tt, $_44:tt, $_45:tt,
     $_46:tt, $_47:tt, $_48:tt, $_49:tt, $_50:tt, $_51:tt, $_52:tt, $_53:tt, $_54:tt,
     $_55:tt, $_56:tt, $_57:tt, $_58:tt, $_59:tt, $_60:tt, $_61:tt, $_62:tt, $_63:tt,
     $n:tt $(, $rest:tt)*) => {
        $n
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn counts_zero_through_five() {
        assert_eq!(arity_of!(), 0);
        assert_eq!(arity_of!(1), 1);
        assert_eq!(arity_of!(1, 2), 2);
        assert_eq!(arity_of!(1, 2, 3), 3);
        assert_eq!(arity_of!(1, 2, 3, 4), 4);
        assert_eq!(arity_of!(1, 2, 3, 4, 5), 5);
    }

    #[test]
    fn arguments_are_measured_not_evaluated() {
        // Tokens that name nothing still count; the picker drops them
        // before resolution.
        assert_eq!(arity_of!(no_such_item, also_missing), 2);
    }

    #[test]
    fn trailing_comma_is_ignored() {
        assert_eq!(arity_of!(1, 2,), 2);
    }
}
