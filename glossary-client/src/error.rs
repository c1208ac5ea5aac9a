//! Error types for the governance client.

use glossary_model::ModelError;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the governance API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Bad credentials or a malformed token response.
    #[error("authentication error: {0}")]
    Auth(String),

    /// The request never produced a response (connect, timeout, body read).
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with an unexpected status.
    #[error("{context} failed with HTTP {status}: {body}")]
    Status {
        context: String,
        status: u16,
        body: String,
    },

    /// An entitlement id that cannot be addressed as a resource path segment.
    #[error("invalid entitlement id: {0:?}")]
    InvalidId(String),

    /// Malformed glossary schema response.
    #[error("schema error: {0}")]
    Schema(String),

    /// CSV file could not be opened, read or written.
    #[error("file error: {0}")]
    File(#[from] ModelError),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns true for failures of the HTTP exchange itself, whether or not
    /// a response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::Status { .. })
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
