//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use storybook_core::storage::{CommentRepository, RepositoryError, Result, StoryRepository};
use storybook_core::story::{
    shape_comments, sort_stories_newest_first, Comment, NewComment, NewStory, PartitionKey, Story,
    StoryKey, VoteDirection,
};

/// In-memory storage backend.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access. Ids are
/// allocated from per-kind counters starting at 1.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    stories: Arc<RwLock<HashMap<StoryKey, Story>>>,
    comments: Arc<RwLock<HashMap<i64, Comment>>>,
    next_story_id: Arc<AtomicI64>,
    next_comment_id: Arc<AtomicI64>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            stories: Arc::new(RwLock::new(HashMap::new())),
            comments: Arc::new(RwLock::new(HashMap::new())),
            next_story_id: Arc::new(AtomicI64::new(1)),
            next_comment_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl StoryRepository for InMemoryRepository {
    async fn get_story(&self, key: &StoryKey) -> Result<Option<Story>> {
        let stories = self.stories.read().await;
        Ok(stories.get(key).cloned())
    }

    async fn get_stories_by_partition(
        &self,
        partition: &PartitionKey,
        limit: usize,
    ) -> Result<Vec<Story>> {
        let stories = self.stories.read().await;
        let mut matching: Vec<Story> = stories
            .values()
            .filter(|s| &s.key.partition == partition)
            .cloned()
            .collect();

        sort_stories_newest_first(&mut matching);
        matching.truncate(limit);
        Ok(matching)
    }

    async fn create_story(&self, story: &NewStory) -> Result<Story> {
        let id = self.next_story_id.fetch_add(1, Ordering::SeqCst);
        let story = story.clone().into_story(id);

        let mut stories = self.stories.write().await;
        stories.insert(story.key.clone(), story.clone());
        Ok(story)
    }

    async fn update_story(&self, story: &Story) -> Result<()> {
        let mut stories = self.stories.write().await;
        if !stories.contains_key(&story.key) {
            return Err(RepositoryError::NotFound {
                entity_type: "Story",
                id: story.key.to_string(),
            });
        }
        stories.insert(story.key.clone(), story.clone());
        Ok(())
    }

    async fn increment_vote(
        &self,
        key: &StoryKey,
        direction: VoteDirection,
    ) -> Result<Option<Story>> {
        let mut stories = self.stories.write().await;
        Ok(stories.get_mut(key).map(|story| {
            *story = story.clone().with_vote(direction);
            story.clone()
        }))
    }
}

#[async_trait]
impl CommentRepository for InMemoryRepository {
    async fn get_comments_by_story(&self, story: &StoryKey, limit: usize) -> Result<Vec<Comment>> {
        let comments = self.comments.read().await;
        let matching: Vec<Comment> = comments
            .values()
            .filter(|c| &c.story == story)
            .cloned()
            .collect();

        Ok(shape_comments(matching, limit))
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<Comment> {
        let id = self.next_comment_id.fetch_add(1, Ordering::SeqCst);
        let comment = comment.clone().into_comment(id);

        let mut comments = self.comments.write().await;
        comments.insert(id, comment.clone());
        Ok(comment)
    }
}
