//! Per-request presentation of stories and comments.
//!
//! Nothing here is persisted: the human-readable time and the navigation
//! links are recomputed on every fetch.

use chrono::{DateTime, Utc};
use url::form_urlencoded;

use super::types::{Comment, PartitionKey, Story, StoryKey, VoteDirection};

/// Formats a creation timestamp for display, e.g. `Mon Jan 15 10:30:00 2024`.
pub fn nicetime(date: &DateTime<Utc>) -> String {
    date.format("%c").to_string()
}

fn with_partition(
    mut serializer: form_urlencoded::Serializer<'_, String>,
    partition: &PartitionKey,
) -> String {
    if let Some(name) = partition.storybook_name() {
        serializer.append_pair("storybook_name", name);
    }
    serializer.finish()
}

/// Link to the story page with its comments.
pub fn story_url(key: &StoryKey) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("story_id", &key.id.to_string());
    format!("/story?{}", with_partition(query, &key.partition))
}

/// Link that casts a vote on a story.
pub fn vote_url(key: &StoryKey, direction: VoteDirection) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("story_id", &key.id.to_string())
        .append_pair("upvote", direction.as_flag());
    format!("/vote?{}", with_partition(query, &key.partition))
}

/// Link back to a storybook feed.
///
/// The default feed is plain `/`; named feeds keep their `storybook_name`.
pub fn feed_url(storybook_name: Option<&str>) -> String {
    match storybook_name {
        Some(name) if !name.is_empty() => {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair("storybook_name", name)
                .finish();
            format!("/?{query}")
        }
        _ => "/".to_string(),
    }
}

/// A story annotated for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryView {
    pub id: i64,
    pub storybook_name: Option<String>,
    pub author: Option<String>,
    pub content: String,
    pub nicetime: String,
    pub up_vote: u32,
    pub down_vote: u32,
    pub comment_url: String,
    pub upvote_url: String,
    pub downvote_url: String,
}

impl From<&Story> for StoryView {
    fn from(story: &Story) -> Self {
        Self {
            id: story.id(),
            storybook_name: story.key.partition.storybook_name().map(str::to_string),
            author: story.author.as_ref().map(|a| a.nickname().to_string()),
            content: story.content.clone(),
            nicetime: nicetime(&story.date),
            up_vote: story.up_vote,
            down_vote: story.down_vote,
            comment_url: story_url(&story.key),
            upvote_url: vote_url(&story.key, VoteDirection::Up),
            downvote_url: vote_url(&story.key, VoteDirection::Down),
        }
    }
}

/// A comment annotated for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub id: i64,
    pub author: Option<String>,
    pub content: String,
    pub nicetime: String,
}

impl From<&Comment> for CommentView {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            author: comment.author.as_ref().map(|a| a.nickname().to_string()),
            content: comment.content.clone(),
            nicetime: nicetime(&comment.date),
        }
    }
}
