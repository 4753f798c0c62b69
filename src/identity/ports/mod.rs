//! Port contracts for identity resolution.
//!
//! Ports define infrastructure-agnostic interfaces used by the task-list
//! core to obtain a verified user identity.

pub mod provider;

pub use provider::{IdentityError, IdentityProvider, IdentityResult};
