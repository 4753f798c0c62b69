//! Owner-scoped task records for the task-list core.
//!
//! This module implements the task-list CRUD surface: creating task records
//! owned by the authenticated caller, listing and fetching them under owner
//! scoping, overwriting their mutable fields in place, and physically
//! deleting them. Ownership checks and mutations share a single atomic store
//! operation, and a record that exists but belongs to someone else is
//! indistinguishable from one that does not exist. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
