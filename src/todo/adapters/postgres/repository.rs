//! `PostgreSQL` repository implementation for todo storage.

use super::{
    models::{NewTodoRow, TodoChangeset, TodoRow},
    schema::todos,
};
use crate::identity::domain::UserId;
use crate::todo::{
    domain::{PersistedTodoData, Priority, Title, Todo, TodoContent, TodoDraft, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use tracing::debug;

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed todo repository.
///
/// Owner-scoped mutations are single statements filtered on both id and
/// owner, so the ownership check and the mutation commit together.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    ///
    /// The pool is constructed and closed by the process lifecycle; the
    /// repository only borrows connections from it per operation.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn insert(&self, draft: &TodoDraft) -> TodoRepositoryResult<Todo> {
        let new_row = to_new_row(draft);

        let stored = self
            .run_blocking(move |connection| {
                diesel::insert_into(todos::table)
                    .values(&new_row)
                    .returning(TodoRow::as_returning())
                    .get_result::<TodoRow>(connection)
                    .map_err(TodoRepositoryError::persistence)
            })
            .await?;

        debug!(id = stored.id, owner_id = stored.owner_id, "inserted todo record");
        row_to_todo(stored)
    }

    async fn list_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.run_blocking(|connection| {
            let rows = todos::table
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }

    async fn list_by_owner(&self, owner_id: UserId) -> TodoRepositoryResult<Vec<Todo>> {
        self.run_blocking(move |connection| {
            let rows = todos::table
                .filter(todos::owner_id.eq(owner_id.value()))
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .filter(todos::id.eq(id.value()))
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_todo).transpose()
        })
        .await
    }

    async fn find_owned(
        &self,
        owner_id: UserId,
        id: TodoId,
    ) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .filter(todos::id.eq(id.value()))
                .filter(todos::owner_id.eq(owner_id.value()))
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_todo).transpose()
        })
        .await
    }

    async fn update_owned(
        &self,
        owner_id: UserId,
        id: TodoId,
        content: &TodoContent,
    ) -> TodoRepositoryResult<Option<Todo>> {
        let changeset = to_changeset(content);

        let updated = self
            .run_blocking(move |connection| {
                diesel::update(
                    todos::table
                        .filter(todos::id.eq(id.value()))
                        .filter(todos::owner_id.eq(owner_id.value())),
                )
                .set(&changeset)
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)
            })
            .await?;

        updated.map(row_to_todo).transpose()
    }

    async fn delete_owned(&self, owner_id: UserId, id: TodoId) -> TodoRepositoryResult<bool> {
        let removed = self
            .run_blocking(move |connection| {
                diesel::delete(
                    todos::table
                        .filter(todos::id.eq(id.value()))
                        .filter(todos::owner_id.eq(owner_id.value())),
                )
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)
            })
            .await?;

        debug!(id = id.value(), owner_id = owner_id.value(), removed, "deleted todo record");
        Ok(removed > 0)
    }
}

fn to_new_row(draft: &TodoDraft) -> NewTodoRow {
    let content = draft.content();
    NewTodoRow {
        title: content.title().as_str().to_owned(),
        description: content.description().map(str::to_owned),
        priority: content.priority().value(),
        complete: content.complete(),
        owner_id: draft.owner_id().value(),
    }
}

fn to_changeset(content: &TodoContent) -> TodoChangeset {
    TodoChangeset {
        title: content.title().as_str().to_owned(),
        description: content.description().map(str::to_owned),
        priority: content.priority().value(),
        complete: content.complete(),
    }
}

/// Rebuilds a domain record from a stored row.
///
/// Stored rows re-pass domain validation; a violating row indicates store
/// corruption and surfaces as a persistence error.
fn row_to_todo(row: TodoRow) -> TodoRepositoryResult<Todo> {
    let TodoRow {
        id,
        title,
        description,
        priority,
        complete,
        owner_id,
    } = row;

    let title = Title::new(title).map_err(TodoRepositoryError::persistence)?;
    let priority = Priority::new(priority).map_err(TodoRepositoryError::persistence)?;
    let mut content = TodoContent::new(title, priority, complete);
    if let Some(description) = description {
        content = content.with_description(description);
    }

    Ok(Todo::from_persisted(PersistedTodoData {
        id: TodoId::new(id),
        owner_id: UserId::new(owner_id),
        content,
    }))
}
