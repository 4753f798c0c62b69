//! Tasklist: authorization-scoped task storage core.
//!
//! This crate provides the core logic of a multi-user task-list backend:
//! authenticated users create, read, update, and delete task records they
//! own, backed by a relational store.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`identity`]: Credential resolution to a verified user identity
//! - [`todo`]: Owner-scoped task records and their lifecycle

pub mod identity;
pub mod todo;
