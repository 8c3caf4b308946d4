use chrono::{DateTime, Utc};

use crate::identity::Identity;

/// Name of the partition used when no storybook name is supplied.
pub const DEFAULT_STORYBOOK: &str = "default_storybook";

/// Key of a storybook partition.
///
/// Every story and comment is grouped under exactly one partition. All reads
/// and writes for a given storybook go through the same key, so the store can
/// serialize writes per partition. Sustained writes into a single partition
/// should stay below roughly one per second.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartitionKey(String);

impl PartitionKey {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The default partition.
    pub fn default_storybook() -> Self {
        Self(DEFAULT_STORYBOOK.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the default partition.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_STORYBOOK
    }

    /// The storybook name to carry in links, `None` for the default partition.
    pub fn storybook_name(&self) -> Option<&str> {
        if self.is_default() {
            None
        } else {
            Some(&self.0)
        }
    }
}

impl std::fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fully qualified key of a story: its partition plus a store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoryKey {
    pub partition: PartitionKey,
    pub id: i64,
}

impl StoryKey {
    pub fn new(partition: PartitionKey, id: i64) -> Self {
        Self { partition, id }
    }
}

impl std::fmt::Display for StoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.partition, self.id)
    }
}

/// A storybook entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub key: StoryKey,
    pub author: Option<Identity>,
    pub content: String,
    pub date: DateTime<Utc>,
    pub up_vote: u32,
    pub down_vote: u32,
}

impl Story {
    pub fn id(&self) -> i64 {
        self.key.id
    }

    /// Returns a copy with the counter for `direction` incremented by one.
    pub fn with_vote(mut self, direction: VoteDirection) -> Self {
        match direction {
            VoteDirection::Up => self.up_vote = self.up_vote.saturating_add(1),
            VoteDirection::Down => self.down_vote = self.down_vote.saturating_add(1),
        }
        self
    }
}

/// A story that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStory {
    pub partition: PartitionKey,
    pub author: Option<Identity>,
    pub content: String,
    pub date: DateTime<Utc>,
}

impl NewStory {
    pub fn new(partition: PartitionKey, content: impl Into<String>) -> Self {
        Self {
            partition,
            author: None,
            content: content.into(),
            date: Utc::now(),
        }
    }

    pub fn with_author(mut self, author: Option<Identity>) -> Self {
        self.author = author;
        self
    }

    /// Sets a specific creation time (useful for testing).
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Builds the stored story once the store has assigned an id.
    pub fn into_story(self, id: i64) -> Story {
        Story {
            key: StoryKey::new(self.partition, id),
            author: self.author,
            content: self.content,
            date: self.date,
            up_vote: 0,
            down_vote: 0,
        }
    }
}

/// A comment on a story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub story: StoryKey,
    pub author: Option<Identity>,
    pub content: String,
    pub date: DateTime<Utc>,
}

/// A comment that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub story: StoryKey,
    pub author: Option<Identity>,
    pub content: String,
    pub date: DateTime<Utc>,
}

impl NewComment {
    pub fn new(story: StoryKey, content: impl Into<String>) -> Self {
        Self {
            story,
            author: None,
            content: content.into(),
            date: Utc::now(),
        }
    }

    pub fn with_author(mut self, author: Option<Identity>) -> Self {
        self.author = author;
        self
    }

    /// Sets a specific creation time (useful for testing).
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn into_comment(self, id: i64) -> Comment {
        Comment {
            id,
            story: self.story,
            author: self.author,
            content: self.content,
            date: self.date,
        }
    }
}

/// Which counter a vote increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Parses the `upvote` request flag: `1` is an upvote, anything else a downvote.
    pub fn from_flag(flag: &str) -> Self {
        if flag.trim() == "1" {
            VoteDirection::Up
        } else {
            VoteDirection::Down
        }
    }

    pub fn as_flag(&self) -> &'static str {
        match self {
            VoteDirection::Up => "1",
            VoteDirection::Down => "0",
        }
    }
}

impl std::fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_story_starts_with_zero_votes() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let story = NewStory::new(PartitionKey::default_storybook(), "hello")
            .with_date(date)
            .into_story(7);

        assert_eq!(story.id(), 7);
        assert_eq!(story.up_vote, 0);
        assert_eq!(story.down_vote, 0);
        assert_eq!(story.date, date);
        assert!(story.author.is_none());
    }

    #[test]
    fn test_with_vote_touches_one_counter() {
        let story = NewStory::new(PartitionKey::default_storybook(), "hello").into_story(1);

        let up = story.clone().with_vote(VoteDirection::Up);
        assert_eq!((up.up_vote, up.down_vote), (1, 0));

        let down = story.with_vote(VoteDirection::Down).with_vote(VoteDirection::Down);
        assert_eq!((down.up_vote, down.down_vote), (0, 2));
    }

    #[test]
    fn test_vote_direction_from_flag() {
        assert_eq!(VoteDirection::from_flag("1"), VoteDirection::Up);
        assert_eq!(VoteDirection::from_flag("0"), VoteDirection::Down);
        assert_eq!(VoteDirection::from_flag(""), VoteDirection::Down);
        assert_eq!(VoteDirection::from_flag("yes"), VoteDirection::Down);
        assert_eq!(VoteDirection::from_flag(" 1 "), VoteDirection::Up);
        assert_eq!(VoteDirection::from_flag("2"), VoteDirection::Down);
        assert_eq!(VoteDirection::from_flag("-1"), VoteDirection::Down);
        assert_eq!(VoteDirection::from_flag("01"), VoteDirection::Down);
    }

    #[test]
    fn test_default_partition_has_no_storybook_name() {
        assert_eq!(PartitionKey::default_storybook().storybook_name(), None);
        assert_eq!(PartitionKey::new("tales").storybook_name(), Some("tales"));
    }
}
