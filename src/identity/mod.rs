//! Identity resolution for the task-list core.
//!
//! Token issuance and user account lifecycle live outside this crate; the
//! core only ever receives an opaque credential and needs it resolved to a
//! verified user identity. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
