//! Application Error Types
//!
//! Centralized error handling for store and storage operations.

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = AppError::NotFound("Post 42".to_string());
        assert_eq!(err.to_string(), "Not found: Post 42");
    }

    #[test]
    fn test_validation_message() {
        let err = AppError::Validation("Post text cannot be empty".to_string());
        assert_eq!(err.to_string(), "Validation error: Post text cannot be empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::from(io);
        assert!(matches!(err, AppError::Storage(_)));
    }
}
