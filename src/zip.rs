//! All-or-nothing joins over several independent fallible values.
//!
//! [`ZipMatch`] is implemented for tuples of up to eight [`Result`]s sharing
//! an error type: if every input is a success the joined function runs over
//! all payloads in input order, otherwise the error at the **leftmost** error
//! position is returned and the rest are dropped.
//!
//! The leftmost rule is positional, not severity-based. When several inputs
//! fail, everything but the first failure is discarded by position in the
//! tuple, regardless of which error "matters more". Callers who need all
//! failures should inspect the inputs individually instead of zipping them.
//!
//! For inputs whose error types differ, the [`zip_match!`](crate::zip_match!)
//! macro lifts each error into the combined union named by the call site.
//!
//! # Examples
//!
//! ```
//! use error_union::ZipMatch;
//!
//! let width: Result<u32, &str> = Ok(3);
//! let height: Result<u32, &str> = Ok(8);
//! let area = (width, height).zip_match(|w, h| w * h);
//! assert_eq!(area, Ok(24));
//! ```
//!
//! A function arity that does not match the tuple is rejected:
//!
//! ```compile_fail
//! use error_union::ZipMatch;
//!
//! let a: Result<i32, &str> = Ok(1);
//! let b: Result<i32, &str> = Ok(2);
//! let _ = (a, b).zip_match(|x: i32, y: i32, z: i32| x + y + z);
//! ```

/// N-ary join of independent `Result`s under all-success semantics.
///
/// A `()`-returning function joins to `Ok(())`: succeeding with nothing to
/// say is still succeeding.
pub trait ZipMatch<F> {
    /// `Result` of the function's return over the shared error type.
    type Output;

    /// Runs `f` over all success payloads, or returns the leftmost error.
    fn zip_match(self, f: F) -> Self::Output;
}

macro_rules! impl_zip_match {
    ($($t:ident $r:ident),+) => {
        impl<F, R, E, $($t),+> ZipMatch<F> for ($(Result<$t, E>,)+)
        where
            F: FnOnce($($t),+) -> R,
        {
            type Output = Result<R, E>;

            #[inline]
            fn zip_match(self, f: F) -> Result<R, E> {
                let ($($r,)+) = self;
                Ok(f($($r?),+))
            }
        }
    };
}

impl_zip_match!(T0 r0);
impl_zip_match!(T0 r0, T1 r1);
impl_zip_match!(T0 r0, T1 r1, T2 r2);
impl_zip_match!(T0 r0, T1 r1, T2 r2, T3 r3);
impl_zip_match!(T0 r0, T1 r1, T2 r2, T3 r3, T4 r4);
impl_zip_match!(T0 r0, T1 r1, T2 r2, T3 r3, T4 r4, T5 r5);
impl_zip_match!(T0 r0, T1 r1, T2 r2, T3 r3, T4 r4, T5 r5, T6 r6);
impl_zip_match!(T0 r0, T1 r1, T2 r2, T3 r3, T4 r4, T5 r5, T6 r6, T7 r7);
