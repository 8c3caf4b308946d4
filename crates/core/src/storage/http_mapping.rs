//! Pure functions for mapping storage and story errors to HTTP status codes.

use crate::story::StoryError;

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `InvalidData` -> 400 (Bad Request)
/// - everything else -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use storybook_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Story",
///     id: "default_storybook/1".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::WriteFailed(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}

/// Maps a [`StoryError`] to an HTTP status code.
///
/// Malformed identifiers are reported like missing records: a story id that
/// cannot be parsed addresses nothing.
pub fn story_error_to_status_code(error: &StoryError) -> u16 {
    match error {
        StoryError::InvalidIdentifier(_) => 404,
        StoryError::NotFound { .. } => 404,
        StoryError::EmptyContent => 400,
        StoryError::WriteFailure(_) => 500,
        StoryError::Repository(repo_error) => repository_error_to_status_code(repo_error),
    }
}
