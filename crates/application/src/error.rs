//! Application-level errors

use domain::ValidationError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Provider payload failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Requested location does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    ///
    /// Nothing in this crate retries; the flag is for callers.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::ExternalService(_))
    }
}
