//! Routing error types

use thiserror::Error;

/// Errors that can occur during route computation
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Routing connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the routing service failed
    #[error("Routing request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the routing response
    #[error("Routing parse error: {0}")]
    ParseError(String),

    /// The backend found no route between the endpoints
    #[error("No route found: {0}")]
    NoRouteFound(String),

    /// Configuration error
    #[error("Routing configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Routing request timed out")]
    Timeout,
}

impl RoutingError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout
        )
    }
}
