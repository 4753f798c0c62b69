//! In-memory identity provider for tests and local wiring.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::identity::{
    domain::{Credential, UserIdentity},
    ports::{IdentityError, IdentityProvider, IdentityResult},
};

/// Identity provider backed by a fixed credential-to-identity table.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    identities: HashMap<String, UserIdentity>,
}

impl StaticTokenProvider {
    /// Creates a provider that rejects every credential.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a credential that resolves to the given identity.
    #[must_use]
    pub fn with_token(mut self, credential: impl Into<String>, identity: UserIdentity) -> Self {
        self.identities.insert(credential.into(), identity);
        self
    }
}

#[async_trait]
impl IdentityProvider for StaticTokenProvider {
    async fn resolve(&self, credential: &Credential) -> IdentityResult<UserIdentity> {
        self.identities
            .get(credential.as_str())
            .cloned()
            .ok_or(IdentityError::InvalidCredential)
    }
}
