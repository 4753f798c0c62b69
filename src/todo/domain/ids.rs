//! Identifier and validated scalar types for the todo domain.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a todo record.
///
/// Assigned by the store on insertion and immutable thereafter; the domain
/// never fabricates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Wraps a store-assigned identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Todo urgency on a fixed 1 (lowest) to 5 (highest) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(i32);

impl Priority {
    /// Lowest accepted priority.
    pub const MIN: i32 = 1;
    /// Highest accepted priority.
    pub const MAX: i32 = 5;

    /// Creates a validated priority.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::PriorityOutOfRange`] when the value falls
    /// outside the inclusive 1 to 5 range.
    pub const fn new(value: i32) -> Result<Self, TodoDomainError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(TodoDomainError::PriorityOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
