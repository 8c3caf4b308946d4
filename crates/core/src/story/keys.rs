use super::error::StoryError;
use super::types::{PartitionKey, StoryKey};

/// Derives the partition key for an optional storybook name.
///
/// Absent and empty names map to the default partition. Any other name is
/// used literally, so the same name always yields the same key and distinct
/// names never collide.
///
/// # Examples
///
/// ```
/// use storybook_core::story::partition_key;
///
/// assert_eq!(partition_key(None), partition_key(Some("")));
/// assert_ne!(partition_key(Some("tales")), partition_key(Some("fables")));
/// ```
pub fn partition_key(name: Option<&str>) -> PartitionKey {
    match name {
        Some(name) if !name.is_empty() => PartitionKey::new(name),
        _ => PartitionKey::default_storybook(),
    }
}

/// Parses a story identifier from a request field.
///
/// Identifiers are positive integers; surrounding whitespace is ignored.
pub fn parse_story_id(raw: &str) -> Result<i64, StoryError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(StoryError::InvalidIdentifier(raw.to_string())),
    }
}

/// Builds the fully qualified key of a story.
///
/// The key is scoped by the partition the caller supplies, the same one used
/// when the story was listed.
pub fn story_key(story_id: &str, partition_name: Option<&str>) -> Result<StoryKey, StoryError> {
    let id = parse_story_id(story_id)?;
    Ok(StoryKey::new(partition_key(partition_name), id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::DEFAULT_STORYBOOK;

    #[test]
    fn test_partition_key_is_deterministic() {
        assert_eq!(partition_key(Some("tales")), partition_key(Some("tales")));
        assert_eq!(partition_key(None), partition_key(None));
    }

    #[test]
    fn test_partition_key_distinguishes_names() {
        assert_ne!(partition_key(Some("tales")), partition_key(Some("Tales")));
        assert_ne!(partition_key(Some("tales")), partition_key(None));
    }

    #[test]
    fn test_empty_name_is_default_partition() {
        assert_eq!(partition_key(Some("")), partition_key(None));
        assert_eq!(partition_key(None).as_str(), DEFAULT_STORYBOOK);
        assert!(partition_key(None).is_default());
    }

    #[test]
    fn test_parse_story_id_accepts_positive_integers() {
        assert_eq!(parse_story_id("42"), Ok(42));
        assert_eq!(parse_story_id(" 7 "), Ok(7));
    }

    #[test]
    fn test_parse_story_id_rejects_malformed_input() {
        for raw in ["", "abc", "0", "-3", "1.5", "12abc"] {
            assert_eq!(
                parse_story_id(raw),
                Err(StoryError::InvalidIdentifier(raw.to_string())),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_story_key_uses_caller_partition() {
        let key = story_key("5", Some("tales")).unwrap();
        assert_eq!(key.id, 5);
        assert_eq!(key.partition, partition_key(Some("tales")));

        let key = story_key("5", None).unwrap();
        assert!(key.partition.is_default());
    }

    #[test]
    fn test_story_key_rejects_invalid_identifier() {
        assert!(matches!(
            story_key("five", Some("tales")),
            Err(StoryError::InvalidIdentifier(_))
        ));
    }
}
