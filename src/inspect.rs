//! Discriminant predicates and payload extraction for two-alternative unions.
//!
//! Rust's [`Result`] is the two-alternative tagged union this crate builds
//! on, so the inspection surface is thin: `const`-evaluable predicates over
//! the discriminant and a fallback extractor. For every value exactly one of
//! [`is_success`] and [`is_error`] is true, in constant and runtime contexts
//! alike.

/// Returns `true` if the success alternative is live.
///
/// Usable in constant evaluation:
///
/// ```
/// use error_union::is_success;
///
/// const PARSED: Result<i32, &str> = Ok(10);
/// const _: () = assert!(is_success(&PARSED));
/// ```
#[inline]
#[must_use]
pub const fn is_success<T, E>(result: &Result<T, E>) -> bool {
    matches!(result, Ok(_))
}

/// Returns `true` if the error alternative is live.
///
/// Always the negation of [`is_success`] for the same value.
///
/// # Examples
///
/// ```
/// use error_union::{is_error, is_success};
///
/// let missing: Result<i32, &str> = Err("missing");
/// assert!(is_error(&missing));
/// assert!(!is_success(&missing));
/// ```
#[inline]
#[must_use]
pub const fn is_error<T, E>(result: &Result<T, E>) -> bool {
    !is_success(result)
}

/// Returns the success payload, or `fallback` if the error alternative is
/// live. No handler runs and the error payload is dropped.
///
/// # Examples
///
/// ```
/// use error_union::default_or;
///
/// let parsed: Result<i32, &str> = Err("bad digit");
/// assert_eq!(default_or(parsed, 0), 0);
///
/// let parsed: Result<i32, &str> = Ok(42);
/// assert_eq!(default_or(parsed, 0), 42);
/// ```
#[inline]
#[must_use]
pub fn default_or<T, E>(result: Result<T, E>, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(_) => fallback,
    }
}
