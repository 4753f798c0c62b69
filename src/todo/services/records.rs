//! Service layer for owner-scoped todo CRUD.
//!
//! Provides [`TodoService`], which validates inputs before any store
//! interaction, scopes every self-service operation to the caller's own
//! records, and gates the unscoped read paths behind an explicit
//! construction-time policy.

use crate::identity::domain::UserIdentity;
use crate::todo::{
    domain::{Priority, Title, Todo, TodoContent, TodoDomainError, TodoDraft, TodoId},
    ports::{TodoRepository, TodoRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Write payload shared by create and update.
///
/// Carries raw caller input; the service validates it into a
/// [`TodoContent`] before any repository call. An update overwrites all
/// four mutable fields, so both operations take the same payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoWriteRequest {
    title: String,
    description: Option<String>,
    priority: i32,
    complete: bool,
}

impl TodoWriteRequest {
    /// Creates a request with required fields.
    ///
    /// Completion is always supplied explicitly rather than relying on the
    /// stored column default.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: i32, complete: bool) -> Self {
        Self {
            title: title.into(),
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

    /// Validates the raw payload into domain content.
    fn into_content(self) -> Result<TodoContent, TodoDomainError> {
        let title = Title::new(self.title)?;
        let priority = Priority::new(self.priority)?;
        let mut content = TodoContent::new(title, priority, self.complete);
        if let Some(description) = self.description {
            content = content.with_description(description);
        }
        Ok(content)
    }
}

/// Access policy for the unscoped read paths (`list_all`, `get_unscoped`).
///
/// Whether cross-owner reads should be open or privileged is an operator
/// decision, so it is surfaced as configuration rather than assumed: the
/// default demands the admin capability, `AnyCaller` keeps the read surface
/// fully open for deployments that rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnscopedAccess {
    /// Unscoped reads require an authenticated identity with the admin
    /// capability.
    #[default]
    AdminOnly,
    /// Unscoped reads are open to any caller, authenticated or not.
    AnyCaller,
}

/// Construction-time configuration for [`TodoService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoServiceConfig {
    /// Policy applied to the unscoped read paths.
    pub unscoped_access: UnscopedAccess,
}

/// Service-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// No verified identity was supplied for an operation that requires one.
    #[error("authentication required")]
    Unauthenticated,

    /// The caller is authenticated but lacks the required capability.
    #[error("caller lacks the required capability")]
    Forbidden,

    /// No record with this identifier exists under the caller's scope.
    ///
    /// A record owned by someone else yields the same error as a missing
    /// one, so existence never leaks across owners.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Input validation failed before reaching the store.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Owner-scoped todo CRUD service.
///
/// Holds no cross-call state; every operation is a single request against
/// the injected repository.
#[derive(Clone)]
pub struct TodoService<R>
where
    R: TodoRepository,
{
    repository: Arc<R>,
    config: TodoServiceConfig,
}

impl<R> TodoService<R>
where
    R: TodoRepository,
{
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_config(repository, TodoServiceConfig::default())
    }

    /// Creates a service with an explicit configuration.
    #[must_use]
    pub const fn with_config(repository: Arc<R>, config: TodoServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Returns every record in the store regardless of owner.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Unauthenticated`] or
    /// [`TodoServiceError::Forbidden`] when the unscoped-access policy
    /// denies the caller, and [`TodoServiceError::Repository`] when the
    /// store fails.
    pub async fn list_all(&self, identity: Option<&UserIdentity>) -> TodoServiceResult<Vec<Todo>> {
        self.authorize_unscoped(identity)?;
        Ok(self.repository.list_all().await?)
    }

    /// Returns the caller's own records.
    ///
    /// No ordering is guaranteed beyond the store's natural order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Unauthenticated`] when no identity is
    /// supplied and [`TodoServiceError::Repository`] when the store fails.
    pub async fn list_mine(&self, identity: Option<&UserIdentity>) -> TodoServiceResult<Vec<Todo>> {
        let user = require_identity(identity)?;
        Ok(self.repository.list_by_owner(user.id()).await?)
    }

    /// Fetches one of the caller's own records by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Unauthenticated`] when no identity is
    /// supplied and [`TodoServiceError::NotFound`] when no such record
    /// exists under the caller's scope.
    pub async fn get(
        &self,
        identity: Option<&UserIdentity>,
        id: TodoId,
    ) -> TodoServiceResult<Todo> {
        let user = require_identity(identity)?;
        self.repository
            .find_owned(user.id(), id)
            .await?
            .ok_or(TodoServiceError::NotFound(id))
    }

    /// Fetches a record by identifier regardless of owner.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Unauthenticated`] or
    /// [`TodoServiceError::Forbidden`] when the unscoped-access policy
    /// denies the caller, and [`TodoServiceError::NotFound`] when the
    /// record does not exist.
    pub async fn get_unscoped(
        &self,
        identity: Option<&UserIdentity>,
        id: TodoId,
    ) -> TodoServiceResult<Todo> {
        self.authorize_unscoped(identity)?;
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TodoServiceError::NotFound(id))
    }

    /// Creates a record owned by the caller.
    ///
    /// Returns the stored record with its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Unauthenticated`] when no identity is
    /// supplied, [`TodoServiceError::Domain`] when validation fails, and
    /// [`TodoServiceError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        identity: Option<&UserIdentity>,
        request: TodoWriteRequest,
    ) -> TodoServiceResult<Todo> {
        let user = require_identity(identity)?;
        let content = request.into_content()?;

        let draft = TodoDraft::new(user.id(), content);
        let todo = self.repository.insert(&draft).await?;
        debug!(owner_id = %user.id(), id = %todo.id(), "created todo");
        Ok(todo)
    }

    /// Overwrites the mutable fields of one of the caller's own records.
    ///
    /// Identifier and owner are untouched. The ownership check and the
    /// overwrite are one atomic repository operation.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Unauthenticated`] when no identity is
    /// supplied, [`TodoServiceError::Domain`] when validation fails, and
    /// [`TodoServiceError::NotFound`] when no such record exists under the
    /// caller's scope.
    pub async fn update(
        &self,
        identity: Option<&UserIdentity>,
        id: TodoId,
        request: TodoWriteRequest,
    ) -> TodoServiceResult<Todo> {
        let user = require_identity(identity)?;
        let content = request.into_content()?;

        let updated = self
            .repository
            .update_owned(user.id(), id, &content)
            .await?
            .ok_or(TodoServiceError::NotFound(id))?;
        debug!(owner_id = %user.id(), id = %id, "updated todo");
        Ok(updated)
    }

    /// Physically removes one of the caller's own records.
    ///
    /// Deletion is irreversible; a second delete of the same identifier
    /// yields [`TodoServiceError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Unauthenticated`] when no identity is
    /// supplied and [`TodoServiceError::NotFound`] when no such record
    /// exists under the caller's scope.
    pub async fn delete(
        &self,
        identity: Option<&UserIdentity>,
        id: TodoId,
    ) -> TodoServiceResult<()> {
        let user = require_identity(identity)?;
        let removed = self.repository.delete_owned(user.id(), id).await?;
        if !removed {
            return Err(TodoServiceError::NotFound(id));
        }
        debug!(owner_id = %user.id(), id = %id, "deleted todo");
        Ok(())
    }

    fn authorize_unscoped(&self, identity: Option<&UserIdentity>) -> TodoServiceResult<()> {
        match self.config.unscoped_access {
            UnscopedAccess::AnyCaller => Ok(()),
            UnscopedAccess::AdminOnly => {
                let user = require_identity(identity)?;
                if user.is_admin() {
                    Ok(())
                } else {
                    warn!(user_id = %user.id(), "unscoped read denied");
                    Err(TodoServiceError::Forbidden)
                }
            }
        }
    }
}

fn require_identity(identity: Option<&UserIdentity>) -> TodoServiceResult<&UserIdentity> {
    identity.ok_or(TodoServiceError::Unauthenticated)
}
