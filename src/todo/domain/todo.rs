//! Todo record aggregate and its validated content.

use super::{Priority, TodoDomainError, TodoId};
use crate::identity::domain::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty todo title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    /// Creates a validated title, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TodoDomainError::EmptyTitle);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The mutable fields of a todo record.
///
/// Shared between creation and update: an update overwrites all four fields
/// in place, so both operations carry the same validated payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoContent {
    title: Title,
    description: Option<String>,
    priority: Priority,
    complete: bool,
}

impl TodoContent {
    /// Creates content from validated required fields.
    #[must_use]
    pub const fn new(title: Title, priority: Priority, complete: bool) -> Self {
        Self {
            title,
            description: None,
            priority,
            complete,
        }
    }

    /// Sets the free-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn complete(&self) -> bool {
        self.complete
    }
}

/// A todo record awaiting its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    owner_id: UserId,
    content: TodoContent,
}

impl TodoDraft {
    /// Creates a draft owned by the given user.
    #[must_use]
    pub const fn new(owner_id: UserId, content: TodoContent) -> Self {
        Self { owner_id, content }
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the record content.
    #[must_use]
    pub const fn content(&self) -> &TodoContent {
        &self.content
    }
}

/// Parameter object for reconstructing a persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Store-assigned record identifier.
    pub id: TodoId,
    /// Owning user identifier.
    pub owner_id: UserId,
    /// Persisted record content.
    pub content: TodoContent,
}

/// Persisted todo record.
///
/// `id` and `owner_id` are immutable for the life of the record; only the
/// [`TodoContent`] fields change on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    owner_id: UserId,
    content: TodoContent,
}

impl Todo {
    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        let PersistedTodoData {
            id,
            owner_id,
            content,
        } = data;
        Self {
            id,
            owner_id,
            content,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the record content.
    #[must_use]
    pub const fn content(&self) -> &TodoContent {
        &self.content
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        self.content.title()
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.content.description()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.content.priority()
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn complete(&self) -> bool {
        self.content.complete()
    }
}
