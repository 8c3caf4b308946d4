use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Write failed: {0}")]
    WriteFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Story",
            id: "default_storybook/42".to_string(),
        };
        assert_eq!(error.to_string(), "Story not found: default_storybook/42");
    }

    #[test]
    fn test_repository_error_write_failed_display() {
        let error = RepositoryError::WriteFailed("disk full".to_string());
        assert_eq!(error.to_string(), "Write failed: disk full");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout");
    }
}
