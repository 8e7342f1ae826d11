//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding operations
#[derive(Debug, Error)]
pub enum GeocoderError {
    /// Connection to the geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the geocoding service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the geocoding service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Access token is missing
    #[error("No access token configured")]
    MissingAccessToken,

    /// Access token was rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl GeocoderError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::ServiceUnavailable(_)
                | Self::RateLimitExceeded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(GeocoderError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(GeocoderError::ServiceUnavailable("test".to_string()).is_retryable());
        assert!(GeocoderError::RateLimitExceeded.is_retryable());

        assert!(!GeocoderError::MissingAccessToken.is_retryable());
        assert!(!GeocoderError::AuthenticationFailed("test".to_string()).is_retryable());
        assert!(!GeocoderError::ParseError("test".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = GeocoderError::MissingAccessToken;
        assert!(err.to_string().contains("access token"));

        let err = GeocoderError::AuthenticationFailed("401".to_string());
        assert!(err.to_string().contains("401"));
    }
}
