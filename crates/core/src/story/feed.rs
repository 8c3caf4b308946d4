use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rand::{seq::SliceRandom, Rng};

use super::types::{Comment, Story};

/// Number of stories shown on a feed page.
pub const DEFAULT_FEED_SIZE: usize = 10;

/// Number of comments shown under a story.
pub const DEFAULT_COMMENT_PAGE_SIZE: usize = 10;

/// Presentation options for a feed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedOptions {
    /// Maximum number of stories returned.
    pub limit: usize,
    /// Randomly permute the fetched window.
    pub shuffle: bool,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_FEED_SIZE,
            shuffle: false,
        }
    }
}

impl FeedOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn shuffled(mut self) -> Self {
        self.shuffle = true;
        self
    }
}

fn newest_first(a: (&DateTime<Utc>, i64), b: (&DateTime<Utc>, i64)) -> Ordering {
    b.0.cmp(a.0).then_with(|| b.1.cmp(&a.1))
}

/// Sorts stories newest first. Stories created at the same instant are
/// ordered by descending id.
pub fn sort_stories_newest_first(stories: &mut [Story]) {
    stories.sort_by(|a, b| newest_first((&a.date, a.id()), (&b.date, b.id())));
}

/// Sorts comments newest first, ties broken by descending id.
pub fn sort_comments_newest_first(comments: &mut [Comment]) {
    comments.sort_by(|a, b| newest_first((&a.date, a.id), (&b.date, b.id)));
}

/// Shapes a raw store result into the feed window.
///
/// The stories are ordered newest first and truncated to `options.limit`.
/// Shuffling happens after truncation, so a shuffled feed only ever reorders
/// the most recent window and never reaches further back in history.
pub fn shape_feed<R>(mut stories: Vec<Story>, options: FeedOptions, rng: &mut R) -> Vec<Story>
where
    R: Rng + ?Sized,
{
    sort_stories_newest_first(&mut stories);
    stories.truncate(options.limit);

    if options.shuffle {
        stories.shuffle(rng);
    }

    stories
}

/// Orders comments newest first and truncates them to `limit`.
pub fn shape_comments(mut comments: Vec<Comment>, limit: usize) -> Vec<Comment> {
    sort_comments_newest_first(&mut comments);
    comments.truncate(limit);
    comments
}
