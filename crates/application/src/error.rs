//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Operation exceeded its deadline
    #[error("Operation timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ExternalService(_) | Self::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_service_is_retryable() {
        assert!(ApplicationError::ExternalService("down".into()).is_retryable());
        assert!(ApplicationError::RateLimited.is_retryable());
        assert!(ApplicationError::Timeout { timeout_secs: 10 }.is_retryable());
    }

    #[test]
    fn domain_error_is_not_retryable() {
        let err = ApplicationError::Domain(DomainError::InvalidCoordinates);
        assert!(!err.is_retryable());
    }

    #[test]
    fn domain_error_message_passes_through() {
        let err = ApplicationError::from(DomainError::MalformedAddress("x".into()));
        assert!(err.to_string().contains("Malformed address"));
    }
}
