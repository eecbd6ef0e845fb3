//! Error propagation across differently-shaped union returns.
//!
//! Rust's `?` operator is the propagation primitive: it evaluates a fallible
//! expression once, returns early on the error alternative, and unwraps the
//! success payload otherwise. What `?` cannot do on its own is cross a shape
//! boundary, such as a callee returning `Fallible<_, (ParseError,)>` inside
//! a caller returning `Fallible<_, (ParseError, IoError)>`. [`ResultUnionExt::widen_err`]
//! bridges that gap, and the [`propagate!`](crate::propagate!) macro fuses
//! the lift and the early return into one step.
//!
//! ```
//! use error_union::{ErrorUnion, Fallible, ResultUnionExt};
//!
//! #[derive(Debug, PartialEq)]
//! struct BadDigit;
//! #[derive(Debug, PartialEq)]
//! struct Empty;
//!
//! fn digit(byte: u8) -> Result<u32, BadDigit> {
//!     match byte {
//!         b'0'..=b'9' => Ok(u32::from(byte - b'0')),
//!         _ => Err(BadDigit),
//!     }
//! }
//!
//! fn checksum(input: &str) -> Fallible<u32, (Empty, BadDigit)> {
//!     if input.is_empty() {
//!         return Err(ErrorUnion::new(Empty));
//!     }
//!     let mut total = 0;
//!     for byte in input.bytes() {
//!         total += digit(byte).widen_err()?;
//!     }
//!     Ok(total)
//! }
//!
//! assert_eq!(checksum("123"), Ok(6));
//! assert!(checksum("1x3").unwrap_err().is::<BadDigit, _>());
//! ```

use crate::dispatch::FlattenInto;

/// Extension trait lifting a `Result`'s error into a wider union before `?`.
///
/// Covers the three shapes an error can arrive in: a plain error type that is
/// a declared alternative of the target, a union whose set is a subset of the
/// target's, and a union with further unions nested inside (dissolved all the
/// way down). A target that cannot absorb the error is a compile error.
pub trait ResultUnionExt<T, E> {
    /// Re-tags the error alternative in a wider union, leaving success
    /// untouched.
    ///
    /// The target type is taken from context, typically the enclosing
    /// function's return type via `?`.
    fn widen_err<U, M>(self) -> Result<T, U>
    where
        E: FlattenInto<U, M>;
}

impl<T, E> ResultUnionExt<T, E> for Result<T, E> {
    #[inline]
    fn widen_err<U, M>(self) -> Result<T, U>
    where
        E: FlattenInto<U, M>,
    {
        self.map_err(FlattenInto::flatten_into)
    }
}
