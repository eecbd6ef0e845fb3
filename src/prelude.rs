//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_union::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`dispatch!`], [`propagate!`], [`zip_match!`]
//! - **Types**: [`ErrorUnion`], [`Fallible`], [`Successes`]
//! - **Traits**: [`ResultUnionExt`], [`SuccessesExt`], [`ZipMatch`]
//! - **Functions**: [`is_success`], [`is_error`], [`default_or`]
//!
//! # Examples
//!
//! ```
//! use error_union::prelude::*;
//!
//! #[derive(Debug)]
//! struct OutOfRange;
//!
//! fn clamp_percent(n: i32) -> Fallible<u8, (OutOfRange,)> {
//!     u8::try_from(n)
//!         .ok()
//!         .filter(|&p| p <= 100)
//!         .ok_or_else(|| ErrorUnion::new(OutOfRange))
//! }
//!
//! let scores = [clamp_percent(40), clamp_percent(400), clamp_percent(100)];
//! let valid: Vec<u8> = scores.into_iter().successes().collect();
//! assert_eq!(valid, vec![40, 100]);
//! ```

// Macros
pub use crate::{dispatch, propagate, zip_match};

// Core types
pub use crate::iter::Successes;
pub use crate::union::{ErrorUnion, Fallible};

// Traits
pub use crate::dispatch::FlattenInto;
pub use crate::iter::SuccessesExt;
pub use crate::propagate::ResultUnionExt;
pub use crate::zip::ZipMatch;

// Inspection primitives
pub use crate::inspect::{default_or, is_error, is_success};

#[cfg(feature = "std")]
pub use crate::bridge::{catch_union, unwrap_or_raise};

#[cfg(feature = "tracing")]
pub use crate::trace::TraceResultExt;
