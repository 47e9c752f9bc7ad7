//! openrouteservice error types

use thiserror::Error;

/// Errors that can occur when talking to openrouteservice
#[derive(Debug, Error)]
pub enum OrsError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The service answered with an unexpected HTTP status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the service response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// API key missing, invalid, or without access to the endpoint
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Quota or rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// The geocoder returned no match for the address
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// No route between origin and destination
    #[error("No route found from {from} to {to}")]
    NoRouteFound {
        /// Origin description
        from: String,
        /// Destination description
        to: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl OrsError {
    /// Returns true if this error is transient
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::Timeout { .. } | Self::RateLimitExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(OrsError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(OrsError::Timeout { timeout_secs: 15 }.is_retryable());
        assert!(
            OrsError::RateLimitExceeded {
                retry_after_secs: Some(60)
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!OrsError::AddressNotFound("???".to_string()).is_retryable());
        assert!(!OrsError::Unauthorized("bad key".to_string()).is_retryable());
        assert!(!OrsError::ParseError("test".to_string()).is_retryable());
        assert!(!OrsError::RequestFailed("HTTP 500".to_string()).is_retryable());
        assert!(
            !OrsError::NoRouteFound {
                from: "A".to_string(),
                to: "B".to_string(),
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_error_display() {
        let err = OrsError::NoRouteFound {
            from: "47.376900, 8.541700".to_string(),
            to: "51.503300, -0.127600".to_string(),
        };
        assert!(err.to_string().contains("47.376900"));
        assert!(err.to_string().contains("-0.127600"));

        let err = OrsError::AddressNotFound("???, Switzerland".to_string());
        assert_eq!(err.to_string(), "Address not found: ???, Switzerland");

        let err = OrsError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }
}
