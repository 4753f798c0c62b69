//! In-memory repository for todo tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::identity::domain::UserId;
use crate::todo::{
    domain::{PersistedTodoData, Todo, TodoContent, TodoDraft, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Every mutation holds the write lock across its ownership check and the
/// mutation itself, mirroring the single-statement atomicity of the
/// `PostgreSQL` adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug)]
struct InMemoryTodoState {
    todos: BTreeMap<TodoId, Todo>,
    next_id: i64,
}

impl Default for InMemoryTodoState {
    fn default() -> Self {
        Self {
            todos: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned<T>(err: std::sync::PoisonError<T>) -> TodoRepositoryError {
    TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, draft: &TodoDraft) -> TodoRepositoryResult<Todo> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        let id = TodoId::new(state.next_id);
        state.next_id += 1;

        let todo = Todo::from_persisted(PersistedTodoData {
            id,
            owner_id: draft.owner_id(),
            content: draft.content().clone(),
        });
        state.todos.insert(id, todo.clone());
        Ok(todo)
    }

    async fn list_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.todos.values().cloned().collect())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .todos
            .values()
            .filter(|todo| todo.owner_id() == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.todos.get(&id).cloned())
    }

    async fn find_owned(
        &self,
        owner_id: UserId,
        id: TodoId,
    ) -> TodoRepositoryResult<Option<Todo>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .todos
            .get(&id)
            .filter(|todo| todo.owner_id() == owner_id)
            .cloned())
    }

    async fn update_owned(
        &self,
        owner_id: UserId,
        id: TodoId,
        content: &TodoContent,
    ) -> TodoRepositoryResult<Option<Todo>> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        let Some(existing) = state.todos.get_mut(&id) else {
            return Ok(None);
        };
        if existing.owner_id() != owner_id {
            return Ok(None);
        }

        *existing = Todo::from_persisted(PersistedTodoData {
            id,
            owner_id,
            content: content.clone(),
        });
        Ok(Some(existing.clone()))
    }

    async fn delete_owned(&self, owner_id: UserId, id: TodoId) -> TodoRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        let owned = state
            .todos
            .get(&id)
            .is_some_and(|todo| todo.owner_id() == owner_id);
        if !owned {
            return Ok(false);
        }

        Ok(state.todos.remove(&id).is_some())
    }
}
