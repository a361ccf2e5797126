//! Client error types.

use notify_admin_core::cache::KeyResolutionError;
use notify_admin_core::remote::RemoteError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
///
/// Cache failures never appear here: the cache wrappers log them and fall
/// back to the remote API.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Mutation attempted without an acting user")]
    MissingActor,

    #[error(transparent)]
    KeyResolution(#[from] KeyResolutionError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns the remote API error, if this is one.
    pub fn as_remote(&self) -> Option<&RemoteError> {
        match self {
            ClientError::Remote(err) => Some(err),
            _ => None,
        }
    }

    /// Returns true if the remote API answered 404.
    pub fn is_not_found(&self) -> bool {
        self.as_remote().is_some_and(RemoteError::is_not_found)
    }
}
