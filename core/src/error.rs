//! Error types for sequence operations.
//!
//! Only one failure is owned by this crate: asking for a maximum, minimum or
//! unseeded reduction of a sequence that has no elements. Errors raised by
//! caller-supplied callbacks belong to the caller and pass through the
//! `try_` operations untouched.

use thiserror::Error;

/// Returned by operations that need at least one element when given none.
///
/// Raised by [`max`](crate::max), [`min`](crate::min),
/// [`reduce`](crate::reduce) and their `try_` forms.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("operation requires a non-empty input sequence")]
pub struct EmptyInputError;

static_assertions::assert_impl_all!(EmptyInputError: Send, Sync, Copy, core::error::Error);

/// Logs and builds the error for an operation that rejected an empty slice.
#[cold]
pub(crate) fn empty_input(op: &'static str) -> EmptyInputError {
    tracing::debug!(op, "rejected empty input sequence");
    EmptyInputError
}
