//! Domain model for identity resolution.
//!
//! These types describe the verified identity handed to the task-list core
//! by an external identity provider. The core never creates or destroys
//! users; it only consumes the resolved identity as an authorization token.

mod user;

pub use user::{Credential, Role, UserId, UserIdentity, Username};
