//! Value-level error unions: widening conversions, flattening dispatch, and
//! short-circuit combinators, with no exception machinery and no global
//! error enum.
//!
//! A fallible operation returns a plain two-alternative union,
//! [`Result<T, E>`], where `E` may be an [`ErrorUnion`] over several error
//! kinds. Call sites compose these values with four tools: the
//! [`dispatch!`] macro flattens any nesting of unions and routes the
//! innermost payload to a matching handler, the [`propagate!`] macro (and
//! [`ResultUnionExt::widen_err`] with `?`) short-circuits across
//! differently-shaped union returns, [`ZipMatch`]/[`zip_match!`] join
//! independent fallible values under all-or-nothing semantics, and
//! [`SuccessesExt::successes`] lazily filters a sequence down to its
//! success payloads. Everything is checked at compile time: non-member
//! constructions, non-superset widenings, non-exhaustive or ambiguous
//! handler sets, and arity mismatches all reject the program.
//!
//! # Examples
//!
//! ## Merging error kinds without an enum
//!
//! ```
//! use error_union::{dispatch, propagate, ErrorUnion, Fallible};
//!
//! #[derive(Debug)]
//! struct MissingComma;
//! #[derive(Debug)]
//! struct BadNumber { text: String }
//!
//! fn number(text: &str) -> Fallible<f64, (BadNumber,)> {
//!     text.trim()
//!         .parse()
//!         .map_err(|_| ErrorUnion::new(BadNumber { text: text.into() }))
//! }
//!
//! fn point(raw: &str) -> Fallible<(f64, f64), (MissingComma, BadNumber)> {
//!     let (x, y) = match raw.split_once(',') {
//!         Some(parts) => parts,
//!         None => return Err(ErrorUnion::new(MissingComma)),
//!     };
//!     Ok((propagate!(number(x)), propagate!(number(y))))
//! }
//!
//! let report = dispatch!(point("3.5, oops"), {
//!     |pair: (f64, f64)| format!("({}, {})", pair.0, pair.1),
//!     |_e: MissingComma| "expected `x,y`".to_string(),
//!     |e: BadNumber| format!("not a number: {}", e.text),
//! });
//! assert_eq!(report, "not a number:  oops");
//! ```
//!
//! ## All-or-nothing joins
//!
//! ```
//! use error_union::ZipMatch;
//!
//! let w: Result<i32, &str> = Ok(2);
//! let h: Result<i32, &str> = Ok(3);
//! let d: Result<i32, &str> = Ok(4);
//! assert_eq!((w, h, d).zip_match(|w, h, d| w * h * d), Ok(24));
//! ```
//!
//! ## Keeping only the successes
//!
//! ```
//! use error_union::SuccessesExt;
//!
//! let batch: [Result<u32, &str>; 4] = [Ok(1), Err("skip"), Ok(2), Err("skip")];
//! let kept: Vec<u32> = batch.into_iter().successes().collect();
//! assert_eq!(kept, vec![1, 2]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

/// Flattening conversion into a target union
pub mod dispatch;
/// Discriminant predicates and payload extraction
pub mod inspect;
/// Lazy success-filtering sequence adaptor
pub mod iter;
/// Macros: `dispatch!`, `propagate!`, `zip_match!`
pub mod macros;
/// Error propagation across differently-shaped union returns
pub mod propagate;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The variadic error union and its inspection primitives
pub mod union;
/// All-or-nothing joins over several fallible values
pub mod zip;

/// Panic interop boundary (requires the `std` feature)
#[cfg(feature = "std")]
pub mod bridge;

/// Tracing integration (requires the `tracing` feature)
#[cfg(feature = "tracing")]
pub mod trace;

pub use dispatch::FlattenInto;
pub use inspect::{default_or, is_error, is_success};
pub use iter::{successes, Successes, SuccessesExt};
pub use propagate::ResultUnionExt;
pub use union::set::UnionSet;
pub use union::{ErrorUnion, Fallible};
pub use zip::ZipMatch;

#[cfg(feature = "std")]
pub use bridge::{catch_union, unwrap_or_raise};

#[cfg(feature = "tracing")]
pub use trace::TraceResultExt;
