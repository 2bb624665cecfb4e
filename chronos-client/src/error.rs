//! Error types for the Chronos client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the auth or status service
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure: timeout, DNS, connection refused, truncated body
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service rejected the request (4xx, or a non-200 login)
    #[error("Unauthorized (status {status}): {message}")]
    Auth {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// The service failed (5xx); whether to retry is up to the caller
    #[error("Server error (status {status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// The response body is not valid JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The response is JSON but lacks an expected field or type
    #[error("Invalid response type: {0}")]
    Protocol(String),

    /// The request could not be built (e.g., malformed base URL)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::Transport(err)
        }
    }
}

impl ClientError {
    /// Classify a non-success HTTP status into an error
    ///
    /// 5xx becomes [`ClientError::Server`]; everything else is treated as a
    /// rejection.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if (500..600).contains(&status) {
            Self::Server { status, message }
        } else {
            Self::Auth { status, message }
        }
    }

    /// Check if the service rejected the call
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    /// Check if the request exceeded the client timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}
