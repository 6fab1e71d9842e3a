//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connectivity loss, timeout, malformed body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required or token expired (HTTP 401)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied (HTTP 403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by the backend (HTTP 409, e.g. room already taken)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Request rejected as invalid (HTTP 400/422)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server-side failure (HTTP 5xx)
    #[error("Server error: {0}")]
    Server(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the same request may be retried unchanged.
    ///
    /// Transport failures and 5xx responses are transient; everything
    /// the backend rejected deliberately (4xx) is not.
    pub fn is_transient(&self) -> bool {
        matches!(self, ClientError::Http(_) | ClientError::Server(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
