use super::error::StoryError;

/// Validates submitted story or comment content.
///
/// Content is stored verbatim; the only requirement is that it is not blank.
/// Escaping is left to the templates.
pub fn validate_content(content: &str) -> Result<(), StoryError> {
    if content.trim().is_empty() {
        return Err(StoryError::EmptyContent);
    }
    Ok(())
}
