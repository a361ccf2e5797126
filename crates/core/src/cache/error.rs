use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

/// Errors raised while turning a key template into a concrete key.
///
/// These indicate a programming mistake (a template that names an argument
/// the caller never supplied), never a runtime condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyResolutionError {
    #[error("Cache key template '{template}' has no value for placeholder '{name}'")]
    MissingPlaceholder { template: String, name: String },
    #[error("Malformed cache key template '{template}': {reason}")]
    MalformedTemplate { template: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_display() {
        let error = CacheError::ConnectionFailed("timeout".to_string());
        assert_eq!(error.to_string(), "Cache connection failed: timeout");
    }

    #[test]
    fn test_operation_failed_display() {
        let error = CacheError::OperationFailed("READONLY replica".to_string());
        assert_eq!(error.to_string(), "Cache operation failed: READONLY replica");
    }

    #[test]
    fn test_serialization_display() {
        let error = CacheError::Serialization("invalid JSON".to_string());
        assert_eq!(error.to_string(), "Serialization error: invalid JSON");
    }

    #[test]
    fn test_missing_placeholder_names_the_placeholder() {
        let error = KeyResolutionError::MissingPlaceholder {
            template: "service-{service_id}-templates".to_string(),
            name: "service_id".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cache key template 'service-{service_id}-templates' has no value for placeholder 'service_id'"
        );
    }
}
