//! Serde helper functions for form and query deserialization.
//!
//! HTML forms submit empty strings for untouched fields; these helpers turn
//! them into `None` so handlers only deal with meaningful values.

use serde::{Deserialize, Deserializer};

use crate::story::VoteDirection;

/// Deserialize an optional string, treating empty strings as None.
///
/// Non-empty values are kept verbatim, whitespace included, because
/// storybook names are used literally as partition keys.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// Deserialize the `upvote` flag of a vote request.
///
/// `1` is an upvote; any other value, or no value at all, is a downvote.
pub fn deserialize_vote_direction<'de, D>(deserializer: D) -> Result<VoteDirection, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.as_deref()
        .map(VoteDirection::from_flag)
        .unwrap_or(VoteDirection::Down))
}
