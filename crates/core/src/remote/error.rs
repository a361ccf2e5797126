use thiserror::Error;

/// A non-2xx response from the remote API.
///
/// Propagated unchanged through the cache wrappers; callers decide whether a
/// 4xx is user-correctable or a 5xx is fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Remote API returned {status_code}: {message}")]
pub struct RemoteError {
    pub status_code: u16,
    pub message: String,
}

impl RemoteError {
    /// Creates a remote error from a status code and message.
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> RemoteErrorKind {
        RemoteErrorKind::from_status(self.status_code)
    }

    /// 400: the request was rejected by validation.
    pub fn is_validation(&self) -> bool {
        self.kind() == RemoteErrorKind::Validation
    }

    /// 401 or 403: the caller may not perform this action.
    pub fn is_authorization(&self) -> bool {
        matches!(
            self.kind(),
            RemoteErrorKind::Unauthorized | RemoteErrorKind::Forbidden
        )
    }

    /// 404: the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.kind() == RemoteErrorKind::NotFound
    }

    /// 5xx: the remote API failed. Not retried by this layer.
    pub fn is_server_error(&self) -> bool {
        self.kind() == RemoteErrorKind::Server
    }
}

/// Categories of remote API failures callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Server,
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display() {
        let error = RemoteError::new(400, "Template name is required");
        assert_eq!(
            error.to_string(),
            "Remote API returned 400: Template name is required"
        );
    }

    #[test]
    fn test_predicates() {
        assert!(RemoteError::new(400, "").is_validation());
        assert!(RemoteError::new(401, "").is_authorization());
        assert!(RemoteError::new(403, "").is_authorization());
        assert!(RemoteError::new(404, "").is_not_found());
        assert!(RemoteError::new(500, "").is_server_error());
        assert!(RemoteError::new(503, "").is_server_error());
        assert!(!RemoteError::new(404, "").is_server_error());
    }
}
