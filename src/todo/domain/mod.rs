//! Domain model for owner-scoped task records.
//!
//! The todo domain models validated record content, draft records awaiting a
//! store-assigned identifier, and persisted records, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod todo;

pub use error::TodoDomainError;
pub use ids::{Priority, TodoId};
pub use todo::{PersistedTodoData, Title, Todo, TodoContent, TodoDraft};
