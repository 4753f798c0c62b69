//! Provider port resolving opaque credentials to verified identities.

use crate::identity::domain::{Credential, UserIdentity};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity provider operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Credential verification contract.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves a bearer credential to a verified identity.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidCredential`] when the credential does
    /// not map to a known identity.
    async fn resolve(&self, credential: &Credential) -> IdentityResult<UserIdentity>;
}

/// Errors returned by identity provider implementations.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// The credential is missing, malformed, or unknown.
    #[error("invalid credential")]
    InvalidCredential,

    /// Provider-side failure unrelated to the credential itself.
    #[error("identity provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityError {
    /// Wraps a provider-side error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
