//! Repository port for todo persistence, lookup, and owner-scoped mutation.

use crate::identity::domain::UserId;
use crate::todo::domain::{Todo, TodoContent, TodoDraft, TodoId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Owner-scoped mutations (`update_owned`, `delete_owned`) must match the
/// record identifier and the owner in a single atomic store operation, so
/// that an ownership check can never race the mutation it guards. A record
/// that exists under a different owner yields the same `None`/`false`
/// outcome as one that does not exist at all.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Persists a draft, returning the stored record with its assigned id.
    async fn insert(&self, draft: &TodoDraft) -> TodoRepositoryResult<Todo>;

    /// Returns every todo record regardless of owner.
    async fn list_all(&self) -> TodoRepositoryResult<Vec<Todo>>;

    /// Returns all todo records owned by the given user.
    async fn list_by_owner(&self, owner_id: UserId) -> TodoRepositoryResult<Vec<Todo>>;

    /// Finds a record by identifier regardless of owner.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Finds a record matching both identifier and owner.
    ///
    /// Returns `None` when no such record exists under that owner.
    async fn find_owned(&self, owner_id: UserId, id: TodoId)
    -> TodoRepositoryResult<Option<Todo>>;

    /// Overwrites the mutable fields of a record matching both identifier
    /// and owner, leaving id and owner untouched.
    ///
    /// Returns the updated record, or `None` when no such record exists
    /// under that owner.
    async fn update_owned(
        &self,
        owner_id: UserId,
        id: TodoId,
        content: &TodoContent,
    ) -> TodoRepositoryResult<Option<Todo>>;

    /// Physically removes a record matching both identifier and owner.
    ///
    /// Returns `true` when a record was removed, `false` when no such record
    /// exists under that owner.
    async fn delete_owned(&self, owner_id: UserId, id: TodoId) -> TodoRepositoryResult<bool>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
