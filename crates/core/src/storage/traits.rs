use async_trait::async_trait;

use crate::story::{Comment, NewComment, NewStory, PartitionKey, Story, StoryKey, VoteDirection};

use super::Result;

/// Repository for story operations.
///
/// Stories are always addressed through their partition; queries never cross
/// partitions.
#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Gets a story by its fully qualified key.
    async fn get_story(&self, key: &StoryKey) -> Result<Option<Story>>;

    /// Gets the most recent stories of a partition, newest first, at most `limit`.
    async fn get_stories_by_partition(
        &self,
        partition: &PartitionKey,
        limit: usize,
    ) -> Result<Vec<Story>>;

    /// Creates a new story, returning it with its store-assigned id.
    async fn create_story(&self, story: &NewStory) -> Result<Story>;

    /// Overwrites an existing story.
    async fn update_story(&self, story: &Story) -> Result<()>;

    /// Atomically increments one vote counter.
    ///
    /// Returns the updated story, or `None` if it does not exist.
    async fn increment_vote(
        &self,
        key: &StoryKey,
        direction: VoteDirection,
    ) -> Result<Option<Story>>;
}

/// Repository for comment operations.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Gets the most recent comments on a story, newest first, at most `limit`.
    async fn get_comments_by_story(&self, story: &StoryKey, limit: usize) -> Result<Vec<Comment>>;

    /// Creates a new comment, returning it with its store-assigned id.
    async fn create_comment(&self, comment: &NewComment) -> Result<Comment>;
}
