//! Orchestration services for owner-scoped todo operations.

pub mod records;

pub use records::{
    TodoService, TodoServiceConfig, TodoServiceError, TodoServiceResult, TodoWriteRequest,
    UnscopedAccess,
};
