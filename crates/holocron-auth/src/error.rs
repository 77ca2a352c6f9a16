//! Error types for authentication operations.

use std::io;

/// Result type alias for authentication operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Authentication error types.
///
/// Bad credentials are not an error; see [`crate::LoginOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Token could not be decoded.
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// Token store is unusable.
    #[error("Token store error: {0}")]
    Store(String),
}

impl Error {
    /// Creates a store error from any displayable cause.
    #[must_use]
    pub fn store(cause: impl std::fmt::Display) -> Self {
        Self::Store(cause.to_string())
    }
}
