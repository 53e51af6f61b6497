//! Store authentication
//!
//! The cron-driven batch run authenticates against the document store with
//! a service token injected at construction time; there is no interactive
//! flow and no lazily-initialized global handle.

use async_trait::async_trait;

use super::errors::StoreError;

/// Trait for providing bearer tokens for store calls.
///
/// Allows dependency injection and testing with mock providers. `Ok(None)`
/// means "send no Authorization header" (local emulators).
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token, or `None` when the store is unauthenticated
    async fn access_token(&self) -> Result<Option<String>, StoreError>;
}

/// Provider backed by a fixed service token from configuration
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    /// Create a provider; `None` disables the Authorization header
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, StoreError> {
        Ok(self.token.clone())
    }
}
