//! Store-specific error types
//!
//! Provides error classification for document store operations with retry
//! metadata.

use std::time::Duration;

use thiserror::Error;
use worktrack_domain::WorktrackError;

/// Categories of store errors for retry logic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreErrorCategory {
    /// Authentication errors (401, 403) - retry after credential refresh
    Authentication,
    /// Rate limiting errors (429) - retry with backoff
    RateLimit,
    /// Server errors (5xx) - retryable
    Server,
    /// Client errors (4xx except auth) - non-retryable
    Client,
    /// Network/connection errors - retryable
    Network,
    /// Document decoding errors - non-retryable
    Decode,
    /// Configuration errors - non-retryable
    Config,
}

/// Document store operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl StoreError {
    /// Get the error category for this error
    pub fn category(&self) -> StoreErrorCategory {
        match self {
            Self::Auth(_) => StoreErrorCategory::Authentication,
            Self::RateLimit(_) => StoreErrorCategory::RateLimit,
            Self::Server(_) => StoreErrorCategory::Server,
            Self::Client(_) => StoreErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => StoreErrorCategory::Network,
            Self::Decode(_) => StoreErrorCategory::Decode,
            Self::Config(_) => StoreErrorCategory::Config,
        }
    }

    /// Check if this error should be retried
    pub fn should_retry(&self) -> bool {
        matches!(
            self.category(),
            StoreErrorCategory::Authentication
                | StoreErrorCategory::RateLimit
                | StoreErrorCategory::Server
                | StoreErrorCategory::Network
        )
    }
}

/// Convert from WorktrackError (HTTP client layer) to StoreError
impl From<WorktrackError> for StoreError {
    fn from(err: WorktrackError) -> Self {
        match err {
            WorktrackError::Network(message) => Self::Network(message),
            WorktrackError::Auth(message) => Self::Auth(message),
            WorktrackError::Config(message) => Self::Config(message),
            WorktrackError::Store(message)
            | WorktrackError::Email(message)
            | WorktrackError::NotFound(message)
            | WorktrackError::InvalidInput(message)
            | WorktrackError::Internal(message) => Self::Client(message),
        }
    }
}

/// Convert to the domain error taxonomy at the repository boundary
impl From<StoreError> for WorktrackError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Auth(message) => Self::Auth(message),
            StoreError::Network(message) => Self::Network(message),
            StoreError::Timeout(duration) => {
                Self::Network(format!("store call timed out after {duration:?}"))
            }
            StoreError::Config(message) => Self::Config(message),
            StoreError::RateLimit(message)
            | StoreError::Server(message)
            | StoreError::Client(message)
            | StoreError::Decode(message) => Self::Store(message),
        }
    }
}
