//! REST client error types using thiserror 2.0.
//!
//! Errors carry a retryability classification so the retry policy can
//! distinguish transient transport failures from hard API errors.

use thiserror::Error;

/// Errors produced by the REST client.
#[derive(Error, Debug)]
pub enum RestError {
    /// The client configuration is unusable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// More than one authentication method was configured
    #[error("username/password, bearer token, or secret id/key may be set, but only one of them")]
    MultipleAuthMethods,

    /// The request was malformed before it was sent
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing or construction failed
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Body encoding or response decoding failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Server rejected the credentials (401)
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// Server refused access to the resource (403)
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Resource not found (404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Too many requests (429)
    #[error("rate limited")]
    RateLimited,

    /// Server-side failure (5xx)
    #[error("server error ({status}): {message}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        message: String,
    },

    /// Any other non-2xx API response
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        message: String,
    },

    /// JWT signing for secret-key auth failed
    #[error("token signing failed: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),

    /// Reading credential or TLS files failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for REST operations.
pub type RestResult<T> = Result<T, RestError>;

impl RestError {
    /// Check if the error is transient and worth retrying.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::RateLimited | Self::ServerError { .. }
        )
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create an authentication failed error.
    #[must_use]
    pub fn auth_failed(msg: impl Into<String>) -> Self {
        Self::AuthFailed(msg.into())
    }

    /// Create a not found error for the given path.
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }
}
