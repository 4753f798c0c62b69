//! Error types for todo domain validation.

use thiserror::Error;

/// Errors returned while constructing domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The title is empty after trimming.
    #[error("todo title must not be empty")]
    EmptyTitle,

    /// The priority is outside the accepted range.
    #[error("priority {0} out of range, expected 1 to 5")]
    PriorityOutOfRange(i32),
}
