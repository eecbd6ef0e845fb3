//! Interop between panicking code and union-returning code.
//!
//! The core never raises: failures are values. Code that panics instead
//! (FFI callbacks, assertion-style helpers, third-party crates) is adapted
//! at this boundary. [`catch_union`] runs a union-returning callable inside
//! an unwind trap and converts a panic payload into the union's matching
//! alternative; [`unwrap_or_raise`] goes the other way, re-raising a live
//! error as a typed panic payload so the two directions round-trip.
//!
//! Requires the `std` feature:
//!
//! ```toml
//! [dependencies]
//! error-union = { version = "0.3", features = ["std"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use error_union::{catch_union, Fallible};
//!
//! #[derive(Debug, PartialEq)]
//! struct Corrupt { offset: usize }
//!
//! let outcome: Fallible<u32, (Corrupt,)> = catch_union(|| {
//!     std::panic::panic_any(Corrupt { offset: 12 });
//! });
//! assert_eq!(outcome.unwrap_err().into_single(), Corrupt { offset: 12 });
//! ```

use std::any::Any;
use std::panic::{self, UnwindSafe};

use crate::union::list::{CaseList, CaseNil};
use crate::union::set::UnionSet;
use crate::union::{ErrorUnion, Fallible};

/// A panic payload in transit: what `catch_unwind` hands back.
pub type Payload = Box<dyn Any + Send + 'static>;

/// Claims a panic payload for the first alternative whose type matches.
///
/// Alternatives are tried in declaration order; an unclaimed payload is
/// returned so the caller can keep it unwinding.
pub trait CatchPayload: Sized {
    /// Downcasts `payload` into the first matching alternative.
    fn from_payload(payload: Payload) -> Result<Self, Payload>;
}

impl CatchPayload for CaseNil {
    #[inline]
    fn from_payload(payload: Payload) -> Result<Self, Payload> {
        Err(payload)
    }
}

impl<H, Rest> CatchPayload for CaseList<H, Rest>
where
    H: Any,
    Rest: CatchPayload,
{
    fn from_payload(payload: Payload) -> Result<Self, Payload> {
        match payload.downcast::<H>() {
            Ok(head) => Ok(CaseList::Head(*head)),
            Err(payload) => Rest::from_payload(payload).map(CaseList::Tail),
        }
    }
}

/// Raises the live alternative as a typed panic payload.
pub trait RaisePayload {
    /// Unwinds with the live value as the payload.
    fn raise(self) -> !;
}

impl RaisePayload for CaseNil {
    #[inline]
    fn raise(self) -> ! {
        match self {}
    }
}

impl<H, Rest> RaisePayload for CaseList<H, Rest>
where
    H: Any + Send,
    Rest: RaisePayload,
{
    fn raise(self) -> ! {
        match self {
            CaseList::Head(head) => panic::panic_any(head),
            CaseList::Tail(rest) => rest.raise(),
        }
    }
}

/// Runs a union-returning callable, converting a panic whose payload type is
/// a declared alternative into that alternative.
///
/// The payload is matched against `S`'s alternatives in declaration order;
/// the first match wins. A payload matching no alternative resumes
/// unwinding unchanged: the bridge never swallows a panic it was not told
/// about.
///
/// # Examples
///
/// ```
/// use error_union::{catch_union, Fallible};
///
/// // A callable that never panics passes straight through.
/// let outcome: Fallible<u32, (String,)> = catch_union(|| Ok(7));
/// assert_eq!(outcome.unwrap(), 7);
/// ```
pub fn catch_union<T, S, F>(f: F) -> Fallible<T, S>
where
    S: UnionSet,
    S::Repr: CatchPayload,
    F: FnOnce() -> Fallible<T, S> + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(outcome) => outcome,
        Err(payload) => match <S::Repr as CatchPayload>::from_payload(payload) {
            Ok(cases) => Err(ErrorUnion::from_repr(cases)),
            Err(payload) => panic::resume_unwind(payload),
        },
    }
}

/// Returns the success payload, or unwinds with the live error alternative
/// as a typed panic payload.
///
/// The inverse of [`catch_union`]: an error raised here and trapped by a
/// surrounding `catch_union` over a compatible set lands in the same
/// alternative it started in.
///
/// # Examples
///
/// ```
/// use error_union::{catch_union, unwrap_or_raise, ErrorUnion, Fallible};
///
/// #[derive(Debug, PartialEq)]
/// struct Stale;
///
/// let source: Fallible<u32, (Stale,)> = Err(ErrorUnion::new(Stale));
/// let round_trip: Fallible<u32, (Stale,)> = catch_union(move || Ok(unwrap_or_raise(source)));
/// assert_eq!(round_trip.unwrap_err().into_single(), Stale);
/// ```
pub fn unwrap_or_raise<T, S>(outcome: Fallible<T, S>) -> T
where
    S: UnionSet,
    S::Repr: RaisePayload,
{
    match outcome {
        Ok(value) => value,
        Err(error) => error.into_repr().raise(),
    }
}
