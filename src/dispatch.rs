//! # Arity-Directed Dispatch
//!
//! This module turns an argument count into a call. `dispatch!` joins a
//! caller-chosen base name with the computed arity and invokes the
//! resulting identifier; `with_arity!` hands the computed arity to a
//! caller-chosen macro instead, for consumers that build something other
//! than a direct call out of the count.
//!
//! ## Core Principles
//!
//! - **The overload table is the item namespace**: `dispatch!(base, ...)`
//!   resolves to `base0`, `base1`, and so on, which are ordinary functions
//!   (or closures, statics, anything callable) the implementer defines
//!   ahead of time. A missing variant is a "cannot find" error at the call
//!   site, never a runtime condition.
//! - **Counts travel as literal tokens**: a computed count is useless in
//!   identifier position, where macros do not expand. Both macros here
//!   therefore finish the job themselves: the positional read and the
//!   identifier join (or callback invocation) happen inside one expansion
//!   chain, and the output is re-scanned by the compiler as often as it
//!   takes. Nested invocations in argument position resolve for the same
//!   reason.
//!
//! ## Layering
//!
//! Both macros repeat the positional-read step of [`crate::arity_of!`]
//! rather than invoking it: the count must arrive as a matchable token
//! *inside* the same expansion, and a nested `arity_of!` call would arrive
//! as unexpanded tokens instead. The index table and slot grid are shared
//! with `count.rs` by convention; every copy must be extended together.

/// Calls `baseK(args...)` where `K` is the number of arguments supplied.
///
/// The join is token-level: `dispatch!(label, a, b)` resolves to the
/// identifier `label2`, which must name a callable item in scope. Zero
/// arguments dispatch to `base0()`. More than 63 arguments fail to
/// compile.
///
/// ```
/// fn label0() -> String { "none".into() }
/// fn label1(a: &str) -> String { a.into() }
/// fn label2(a: &str, b: &str) -> String { format!("{a}+{b}") }
///
/// use arity::dispatch;
///
/// assert_eq!(dispatch!(label), "none");
/// assert_eq!(dispatch!(label, "x"), "x");
/// assert_eq!(dispatch!(label, "x", "y"), "x+y");
/// ```
///
/// Invocations nest: an inner `dispatch!` in argument position is an
/// ordinary expression and resolves fully before the program runs.
///
/// ```
/// fn double1(n: i32) -> i32 { n * 2 }
/// fn add2(a: i32, b: i32) -> i32 { a + b }
///
/// use arity::dispatch;
///
/// assert_eq!(dispatch!(add, dispatch!(double, 3), 1), 7);
/// ```
#[macro_export]
macro_rules! dispatch {
    ($base:ident $(, $arg:expr)* $(,)?) => {
        $crate::__dispatch_pick!([$base] [$($arg),*] $($arg,)*
            63, 62, 61, 60, 59, 58, 57, 56, 55, 54,
            53, 52, 51, 50, 49, 48, 47, 46, 45, 44,
            43, 42, 41, 40, 39, 38, 37, 36, 35, 34,
            33, 32, 31, 30, 29, 28, 27, 26, 25, 24,
            23, 22, 21, 20, 19, 18, 17, 16, 15, 14,
            13, 12, 11, 10,  9,  8,  7,  6,  5,  4,
             3,  2,  1,  0)
    };
}

/// Invokes `callback!(K, args...)` where `K` is the number of arguments in
/// `args...`, delivered as a literal token.
///
/// This is the building block for consumers that need the count for
/// something other than a direct call, such as matching on it or pasting
/// it into a name of their own. The callback must
/// be a macro in scope at the call site, and receives the count first,
/// followed by the unchanged arguments.
///
/// ```
/// macro_rules! banner {
///     ($count:tt $(, $rest:expr)*) => {
///         concat!("arity=", stringify!($count))
///     };
/// }
///
/// assert_eq!(arity::with_arity!(banner, 9, 8, 7), "arity=3");
/// assert_eq!(arity::with_arity!(banner), "arity=0");
/// ```
#[macro_export]
macro_rules! with_arity {
    ($callback:ident $(, $arg:expr)* $(,)?) => {
        $crate::__with_arity_pick!([$callback] [$($arg),*] $($arg,)*
            63, 62, 61, 60, 59, 58, 57, 56, 55, 54,
            53, 52, 51, 50, 49, 48, 47, 46, 45, 44,
            43, 42, 41, 40, 39, 38, 37, 36, 35, 34,
            33, 32, 31, 30, 29, 28, 27, 26, 25, 24,
            23, 22, 21, 20, 19, 18, 17, 16, 15, 14,
            13, 12, 11, 10,  9,  8,  7,  6,  5,  4,
             3,  2,  1,  0)
    };
}

// Positional read plus identifier join. The slot grid must stay in step
// with `__arity_pick!`.
#[doc(hidden)]
#[macro_export]
macro_rules! __dispatch_pick {
    ([$base:ident] [$($arg:expr),*]
     $_1:tt,  $_2:tt,  $_3:tt,  $_4:tt,  $_5:tt,  $_6:tt,  $_7:tt,  $_8:tt,  $_9:tt,
     $_10:tt, $_11:tt, $_12:tt, $_13:tt, $_14:tt, $_15:tt, $_16:tt, $_17:tt, $_18:tt,
     $_19:tt, $_20:tt, $_21:tt, $_22:tt, $_23:tt, $_24:tt, $_25:tt, $_26:tt, $_27:tt,
     $_28:tt, $_29:tt, $_30:tt, $_31:tt, $_32:tt, $_33:tt, $_34:tt, $_35:tt, $_36:tt,
     $_37:tt, $_38:tt, $_39:tt, $_40:tt, $_41:tt, $_42:tt, $_43:tt, $_44:tt, $_45:tt,
     $_46:tt, $_47:tt, $_48:tt, $_49:tt, $_50:tt, $_51:tt, $_52:tt, $_53:tt, $_54:tt,
     $_55:tt, $_56:tt, $_57:tt, $_58:tt, $_59:tt, $_60:tt, $_61:tt, $_62:tt, $_63:tt,
     $n:tt $(, $rest:tt)*) => {
        $crate::__private::paste! {
            [<$base $n>]($($arg),*)
        }
    };
}

// Positional read plus callback invocation.
#[doc(hidden)]
#[macro_export]
macro_rules! __with_arity_pick {
    ([$callback:ident] [$($arg:expr),*]
     $_1:tt,  $_2:tt,  $_3:tt,  $_4:tt,  $_5:tt,  $_6:tt,  $_7:tt,  $_8:tt,  $_9:tt,
     $_10:tt, $_11:tt, $_12:tt, $_13:tt, $_14:tt, $_15:tt, $_16:tt, $_17:tt, $_18:tt,
     $_19:tt, $_20:tt, $_21:tt, $_22:tt, $_23:tt, $_24:tt, $_25:tt, $_26:tt, $_27:tt,
     $_28:tt, $_29:tt, $_30:tt, $_31:tt, $_32:tt, $_33:tt, $_34:tt, $_35:tt, $_36:tt,
     $_37:tt, $_38:tt, $_39:tt, $_40:tt, $_41:tt, $_42:tt, $_43:tt, $_44:tt, $_45:tt,
     $_46:tt, $_47:tt, $_48:tt, $_49:tt, $_50:tt, $_51:tt, $_52:tt, $_53:tt, $_54:tt,
     $_55:tt, $_56:tt, $_57:tt, $_58:tt, $_59:tt, $_60:tt, $_61:tt, $_62:tt, $_63:tt,
     $n:tt $(, $rest:tt)*) => {
        $callback!($n $(, $arg)*)
    };
}

#[cfg(test)]
mod tests {
    fn pair0() -> (i32, i32) {
        (0, 0)
    }
    fn pair1(a: i32) -> (i32, i32) {
        (a, a)
    }
    fn pair2(a: i32, b: i32) -> (i32, i32) {
        (a, b)
    }

    #[test]
    fn selects_by_count() {
        assert_eq!(dispatch!(pair), (0, 0));
        assert_eq!(dispatch!(pair, 7), (7, 7));
        assert_eq!(dispatch!(pair, 7, 9), (7, 9));
    }

    #[test]
    fn resolves_same_item_as_direct_call() {
        assert_eq!(dispatch!(pair, 1, 2), pair2(1, 2));
    }
}
