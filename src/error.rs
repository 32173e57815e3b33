// Error handling module
// Defines the error types surfaced by the typed API clients

use thiserror::Error;

/// Errors that can occur while talking to the Larder backend
#[derive(Error, Debug)]
pub enum ApiError {
    /// Authentication failed and could not be recovered by a refresh
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Non-2xx response from the backend
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (connect, timeout, decode)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// No active session where one is required
    #[error("Not logged in: {0}")]
    NotLoggedIn(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
