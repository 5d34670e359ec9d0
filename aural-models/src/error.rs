//! Error types for the completion client.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the completion server.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("completion server returned status {status}: {body}")]
    Completion {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A configuration value was out of range or unparseable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Completion { status, .. } => Some(*status),
            _ => None,
        }
    }
}
