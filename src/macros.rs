//! Ergonomic macros over the union algebra.
//!
//! - [`macro@crate::dispatch`] - Flattens a fallible value and routes its
//!   innermost payload to the handler whose parameter type matches, with
//!   compile-time exhaustiveness checking.
//! - [`macro@crate::propagate`] - Unwraps a fallible expression or returns
//!   early with its error lifted into the enclosing function's union.
//! - [`macro@crate::zip_match`] - Joins several independently-typed fallible
//!   values under all-or-nothing-success semantics.
//!
//! # Examples
//!
//! ```
//! use error_union::{dispatch, propagate, ErrorUnion, Fallible};
//!
//! #[derive(Debug)]
//! struct BadHeader;
//! #[derive(Debug)]
//! struct BadBody;
//!
//! fn header(raw: &str) -> Fallible<&str, (BadHeader,)> {
//!     raw.strip_prefix("v1:").ok_or_else(|| ErrorUnion::new(BadHeader))
//! }
//!
//! fn decode(raw: &str) -> Fallible<usize, (BadHeader, BadBody)> {
//!     let body = propagate!(header(raw));
//!     if body.is_empty() {
//!         return Err(ErrorUnion::new(BadBody));
//!     }
//!     Ok(body.len())
//! }
//!
//! let verdict = dispatch!(decode("v1:payload"), {
//!     |len: usize| format!("{len} bytes"),
//!     |_e: BadHeader| "unversioned".to_string(),
//!     |_e: BadBody| "empty".to_string(),
//! });
//! assert_eq!(verdict, "7 bytes");
//! ```

/// Routes the innermost payload of a fallible value to the first handler
/// whose parameter type matches it.
///
/// The scrutinee may be a `Result`, an [`ErrorUnion`](crate::ErrorUnion), a
/// plain value, or any nesting of these: union layers are unwrapped
/// recursively until a concrete payload remains, and success and error
/// payloads are routed uniformly, by type. Handlers are written
/// `|binding: Type| expression` and form an unordered set: declaration
/// order never changes which handler runs.
///
/// Exhaustiveness is checked at compile time: every concrete alternative
/// reachable by full flattening must have exactly one matching handler.
/// Too few handlers, or two handlers for the same type, reject the program.
///
/// # Catch-all form
///
/// When the scrutinee is already an `ErrorUnion`, a trailing
/// `else |rest| expression` arm absorbs every alternative the preceding
/// handlers did not claim. `rest` is bound to the remaining union, still a
/// precisely-typed value, so it can be displayed, logged, or forwarded.
///
/// # Examples
///
/// ```
/// use error_union::dispatch;
///
/// let outcome: Result<i32, &str> = Ok(5);
/// let doubled = dispatch!(outcome, {
///     |value: i32| value * 2,
///     |_message: &str| -1,
/// });
/// assert_eq!(doubled, 10);
/// ```
///
/// A missing handler does not compile:
///
/// ```compile_fail
/// use error_union::{dispatch, ErrorUnion};
///
/// let err: ErrorUnion<(u32, &str)> = ErrorUnion::new("boom");
/// dispatch!(err, {
///     |code: u32| i64::from(code),
/// });
/// ```
///
/// Neither do two handlers for one type:
///
/// ```compile_fail
/// use error_union::{dispatch, ErrorUnion};
///
/// let err: ErrorUnion<(u32, &str)> = ErrorUnion::new("boom");
/// dispatch!(err, {
///     |code: u32| 1,
///     |text: &str| 2,
///     |again: u32| 3,
/// });
/// ```
#[macro_export]
macro_rules! dispatch {
    (@chain $u:ident, else |$rest:tt| $rbody:expr $(,)?) => {{
        let $rest = $u;
        $rbody
    }};
    (@chain $u:ident, |$pat:tt : $ty:ty| $body:expr $(,)?) => {
        match $u.narrow::<$ty, _>() {
            ::core::result::Result::Ok($pat) => $body,
            ::core::result::Result::Err(__rest) => __rest.never(),
        }
    };
    (@chain $u:ident, |$pat:tt : $ty:ty| $body:expr, $($rest:tt)+) => {
        match $u.narrow::<$ty, _>() {
            ::core::result::Result::Ok($pat) => $body,
            ::core::result::Result::Err(__next) => $crate::dispatch!(@chain __next, $($rest)+),
        }
    };
    // Exhaustive form: the handler parameter types, in arm order, become the
    // target union the scrutinee must dissolve into.
    ($value:expr, { $(|$pat:tt : $ty:ty| $body:expr),+ $(,)? }) => {{
        let __cases: $crate::ErrorUnion<($($ty,)+)> =
            $crate::FlattenInto::flatten_into($value);
        $crate::dispatch!(@chain __cases, $(|$pat : $ty| $body),+)
    }};
    // Catch-all form: narrows the scrutinee's own declared set, handing the
    // remainder union to the `else` arm.
    ($value:expr, { $($arms:tt)+ }) => {{
        let __cases = $value;
        $crate::dispatch!(@chain __cases, $($arms)+)
    }};
}

/// Unwraps a fallible expression, or returns early with its error lifted
/// into the enclosing function's error union.
///
/// The expression is evaluated exactly once. On the success alternative the
/// payload becomes the macro's value; on the error alternative the enclosing
/// function returns immediately, with the error re-tagged in the enclosing
/// return type's union: a plain error lifts to a declared alternative, a
/// narrower union widens, and nested unions dissolve. An enclosing error
/// type that cannot absorb the error rejects the program:
///
/// ```compile_fail
/// use error_union::{propagate, ErrorUnion, Fallible};
///
/// #[derive(Debug)]
/// struct AErr;
/// #[derive(Debug)]
/// struct BErr;
///
/// fn inner() -> Fallible<i32, (AErr,)> {
///     Err(ErrorUnion::new(AErr))
/// }
///
/// fn outer() -> Fallible<i32, (BErr,)> {
///     Ok(propagate!(inner()))
/// }
/// ```
///
/// Because it expands to a `return`, the macro is only usable in positions
/// where early return is legal (function and closure bodies, not constant
/// initializers).
///
/// # Examples
///
/// ```
/// use error_union::{propagate, ErrorUnion, Fallible};
///
/// #[derive(Debug, PartialEq)]
/// struct OddNumber;
/// #[derive(Debug, PartialEq)]
/// struct TooBig;
///
/// fn even(n: i32) -> Result<i32, OddNumber> {
///     if n % 2 == 0 { Ok(n) } else { Err(OddNumber) }
/// }
///
/// fn small_half(n: i32) -> Fallible<i32, (OddNumber, TooBig)> {
///     let n = propagate!(even(n));
///     if n > 100 {
///         return Err(ErrorUnion::new(TooBig));
///     }
///     Ok(n / 2)
/// }
///
/// assert_eq!(small_half(10), Ok(5));
/// assert!(small_half(7).unwrap_err().is::<OddNumber, _>());
/// ```
#[macro_export]
macro_rules! propagate {
    ($expr:expr $(,)?) => {
        match $expr {
            ::core::result::Result::Ok(__value) => __value,
            ::core::result::Result::Err(__error) => {
                return ::core::result::Result::Err($crate::FlattenInto::flatten_into(__error))
            }
        }
    };
}

/// Joins several independently-typed fallible values: all successes feed the
/// function, otherwise the leftmost error wins.
///
/// Inputs are evaluated left to right, each at most once; evaluation stops
/// at the first live error, which is lifted into the combined error union
/// fixed by the call site (a binding annotation or the enclosing return
/// type). Errors at later positions are discarded; the leftmost rule is
/// positional, never priority-based. A `()`-returning function joins to
/// `Ok(())`.
///
/// For inputs that already share one error type, the
/// [`ZipMatch`](crate::ZipMatch) trait needs no annotation at all.
///
/// # Examples
///
/// ```
/// use error_union::{zip_match, Fallible};
///
/// #[derive(Debug, PartialEq)]
/// struct BadUser;
/// #[derive(Debug, PartialEq)]
/// struct BadQuota;
///
/// let user: Result<&str, BadUser> = Ok("ada");
/// let quota: Result<u32, BadQuota> = Ok(3);
///
/// let line: Fallible<String, (BadUser, BadQuota)> =
///     zip_match!(|name, limit| format!("{name}:{limit}"), user, quota);
/// assert_eq!(line.unwrap(), "ada:3");
/// ```
#[macro_export]
macro_rules! zip_match {
    ($f:expr, $($input:expr),+ $(,)?) => {{
        let __zip = $f;
        (|| {
            ::core::result::Result::Ok(__zip($(
                match $input {
                    ::core::result::Result::Ok(__value) => __value,
                    ::core::result::Result::Err(__error) => {
                        return ::core::result::Result::Err(
                            $crate::FlattenInto::flatten_into(__error),
                        )
                    }
                }
            ),+))
        })()
    }};
}
