//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;

use storybook_core::identity::Identity;
use storybook_core::story::{partition_key, Comment, Story, StoryKey};

/// Convert a SQLite row to a Story.
///
/// Expected columns: id, partition, author, content, date, up_vote, down_vote
pub fn row_to_story(row: &Row) -> rusqlite::Result<Story> {
    let id: i64 = row.get(0)?;
    let partition: String = row.get(1)?;
    let author: Option<String> = row.get(2)?;
    let content: String = row.get(3)?;
    let date: String = row.get(4)?;
    let up_vote: u32 = row.get(5)?;
    let down_vote: u32 = row.get(6)?;

    Ok(Story {
        key: StoryKey::new(partition_key(Some(&partition)), id),
        author: parse_author(author),
        content,
        date: parse_datetime(&date)?,
        up_vote,
        down_vote,
    })
}

/// Convert a SQLite row to a Comment.
///
/// Expected columns: id, story_id, partition, author, content, date
pub fn row_to_comment(row: &Row) -> rusqlite::Result<Comment> {
    let id: i64 = row.get(0)?;
    let story_id: i64 = row.get(1)?;
    let partition: String = row.get(2)?;
    let author: Option<String> = row.get(3)?;
    let content: String = row.get(4)?;
    let date: String = row.get(5)?;

    Ok(Comment {
        id,
        story: StoryKey::new(partition_key(Some(&partition)), story_id),
        author: parse_author(author),
        content,
        date: parse_datetime(&date)?,
    })
}

/// Stored nicknames go back through `Identity::new`, so a blank column reads
/// as anonymous.
fn parse_author(author: Option<String>) -> Option<Identity> {
    author.and_then(Identity::new)
}

pub fn format_author(author: &Option<Identity>) -> Option<String> {
    author.as_ref().map(|a| a.nickname().to_string())
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage.
///
/// Always nanosecond precision with a `Z` suffix, so `ORDER BY date` sorts
/// chronologically.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_datetime_is_fixed_width() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        assert_eq!(format_datetime(&dt), "2024-06-15T10:30:00.000000000Z");
    }

    #[test]
    fn test_formatted_dates_sort_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        let later = earlier + Duration::nanoseconds(1500);

        assert!(format_datetime(&earlier) < format_datetime(&later));
    }

    #[test]
    fn test_parse_datetime_keeps_subsecond_precision() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap() + Duration::nanoseconds(42);
        assert_eq!(parse_datetime(&format_datetime(&dt)).unwrap(), dt);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("not-a-datetime").is_err());
    }

    #[test]
    fn test_author_columns() {
        assert_eq!(parse_author(None), None);
        assert_eq!(parse_author(Some("  ".to_string())), None);
        assert_eq!(parse_author(Some("alice".to_string())), Identity::new("alice"));
        assert_eq!(
            format_author(&Identity::new("alice")),
            Some("alice".to_string())
        );
        assert_eq!(format_author(&None), None);
    }
}
