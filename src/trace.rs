//! Tracing integration for error-union.
//!
//! Structured logging for failures as they flow through a pipeline, without
//! disturbing the pipeline itself: each method returns the `Result`
//! unchanged, so it composes with `?`,
//! [`widen_err`](crate::ResultUnionExt::widen_err), and the combinators.
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-union = { version = "0.3", features = ["tracing"] }
//! ```

use core::fmt::Display;

/// Extension trait emitting `tracing` events for the error alternative.
pub trait TraceResultExt<T, E> {
    /// Emits an error-level event naming the failed operation, then passes
    /// the value through.
    ///
    /// Nothing is emitted on the success path.
    #[must_use]
    fn trace_err(self, operation: &str) -> Self;

    /// Like [`trace_err`](TraceResultExt::trace_err), but the label is built
    /// lazily, only when a failure actually flows through.
    #[must_use]
    fn trace_err_with<F>(self, label: F) -> Self
    where
        F: FnOnce() -> String;
}

impl<T, E: Display> TraceResultExt<T, E> for Result<T, E> {
    fn trace_err(self, operation: &str) -> Self {
        if let Err(error) = &self {
            tracing::error!(operation, error = %error, "operation failed");
        }
        self
    }

    fn trace_err_with<F>(self, label: F) -> Self
    where
        F: FnOnce() -> String,
    {
        if let Err(error) = &self {
            tracing::error!(operation = %label(), error = %error, "operation failed");
        }
        self
    }
}
