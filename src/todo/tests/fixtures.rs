//! Shared fixtures for todo unit tests.

use std::sync::Arc;

use crate::identity::domain::{Role, UserId, UserIdentity, Username};
use crate::todo::{
    adapters::memory::InMemoryTodoRepository,
    services::{TodoService, TodoServiceConfig, TodoWriteRequest, UnscopedAccess},
};

/// Service type used across the todo unit suites.
pub type TestService = TodoService<InMemoryTodoRepository>;

/// Service over a fresh in-memory repository, default (admin-only) policy.
pub fn scoped_service() -> TestService {
    TodoService::new(Arc::new(InMemoryTodoRepository::new()))
}

/// Service with the unscoped read paths open to any caller.
pub fn open_service() -> TestService {
    TodoService::with_config(
        Arc::new(InMemoryTodoRepository::new()),
        TodoServiceConfig {
            unscoped_access: UnscopedAccess::AnyCaller,
        },
    )
}

/// Ordinary user with id 1.
pub fn alice() -> UserIdentity {
    UserIdentity::new(UserId::new(1), Username::new("alice"), Role::User)
}

/// Ordinary user with id 2.
pub fn bob() -> UserIdentity {
    UserIdentity::new(UserId::new(2), Username::new("bob"), Role::User)
}

/// Admin user with id 99.
pub fn admin() -> UserIdentity {
    UserIdentity::new(UserId::new(99), Username::new("root"), Role::Admin)
}

/// Minimal valid write payload.
pub fn buy_milk() -> TodoWriteRequest {
    TodoWriteRequest::new("Buy milk", 3, false)
}
