use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors surfaced by the feed and mutation operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoryError {
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Content cannot be empty")]
    EmptyContent,
    #[error("Write failed: {0}")]
    WriteFailure(#[source] RepositoryError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_error_display() {
        assert_eq!(
            StoryError::InvalidIdentifier("abc".to_string()).to_string(),
            "Invalid identifier: \"abc\""
        );
        assert_eq!(
            StoryError::EmptyContent.to_string(),
            "Content cannot be empty"
        );
        assert_eq!(
            StoryError::NotFound {
                entity_type: "Story",
                id: "default_storybook/9".to_string(),
            }
            .to_string(),
            "Story not found: default_storybook/9"
        );
    }

    #[test]
    fn test_repository_error_converts_transparently() {
        let error: StoryError = RepositoryError::QueryFailed("boom".to_string()).into();
        assert_eq!(error.to_string(), "Query failed: boom");
    }
}
