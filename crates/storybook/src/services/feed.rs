//! Read-side operations: feeds, single stories and their comments.

use std::sync::Arc;

use storybook_core::storage::{CommentRepository, StoryRepository};
use storybook_core::story::{
    partition_key, shape_comments, shape_feed, story_key, CommentView, FeedOptions, Story,
    StoryError, StoryKey, StoryView,
};

/// Query service for the feed, story and comment pages.
#[derive(Clone)]
pub struct FeedService {
    stories: Arc<dyn StoryRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl FeedService {
    pub fn new(stories: Arc<dyn StoryRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { stories, comments }
    }

    /// Lists the most recent stories of a storybook.
    ///
    /// Only the newest `options.limit` stories are fetched; with
    /// `options.shuffle` that window is returned in random order.
    pub async fn list_stories(
        &self,
        partition_name: Option<&str>,
        options: FeedOptions,
    ) -> Result<Vec<StoryView>, StoryError> {
        let partition = partition_key(partition_name);
        let stories = self
            .stories
            .get_stories_by_partition(&partition, options.limit)
            .await?;

        tracing::debug!(
            partition = %partition,
            count = stories.len(),
            shuffle = options.shuffle,
            "Loaded feed"
        );

        let stories = shape_feed(stories, options, &mut rand::rng());
        Ok(stories.iter().map(StoryView::from).collect())
    }

    /// Loads a single story for display.
    pub async fn get_story(
        &self,
        story_id: &str,
        partition_name: Option<&str>,
    ) -> Result<StoryView, StoryError> {
        let key = story_key(story_id, partition_name)?;
        let story = self.load_story(&key).await?;
        Ok(StoryView::from(&story))
    }

    /// Lists the most recent comments on a story, newest first.
    pub async fn list_comments(
        &self,
        story_id: &str,
        partition_name: Option<&str>,
        limit: usize,
    ) -> Result<Vec<CommentView>, StoryError> {
        let key = story_key(story_id, partition_name)?;
        let comments = self.comments.get_comments_by_story(&key, limit).await?;

        Ok(shape_comments(comments, limit)
            .iter()
            .map(CommentView::from)
            .collect())
    }

    async fn load_story(&self, key: &StoryKey) -> Result<Story, StoryError> {
        self.stories
            .get_story(key)
            .await?
            .ok_or_else(|| StoryError::NotFound {
                entity_type: "Story",
                id: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{Duration, TimeZone, Utc};
    use storybook_core::identity::Identity;
    use storybook_core::story::NewStory;

    use super::*;
    use crate::services::testing::services;
    use crate::services::VoteMode;

    #[tokio::test]
    async fn test_list_stories_empty_partition() {
        let (feed, _) = services(VoteMode::Atomic);

        let stories = feed
            .list_stories(Some("nothing-here"), FeedOptions::default())
            .await
            .unwrap();

        assert!(stories.is_empty());
    }

    #[tokio::test]
    async fn test_list_stories_respects_limit_and_order() {
        let (feed, mutations) = services(VoteMode::Atomic);
        for i in 0..12 {
            mutations
                .post_story(None, None, &format!("story {i}"))
                .await
                .unwrap();
        }

        let stories = feed
            .list_stories(None, FeedOptions::default())
            .await
            .unwrap();

        assert_eq!(stories.len(), 10);
        let ids: Vec<i64> = stories.iter().map(|s| s.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(ids, sorted);
        assert_eq!(stories[0].content, "story 11");
    }

    #[tokio::test]
    async fn test_shuffled_feed_keeps_the_same_window() {
        let (feed, mutations) = services(VoteMode::Atomic);
        for i in 0..15 {
            mutations
                .post_story(Some("tales"), None, &format!("story {i}"))
                .await
                .unwrap();
        }

        let ordered: HashSet<i64> = feed
            .list_stories(Some("tales"), FeedOptions::default())
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        let shuffled: HashSet<i64> = feed
            .list_stories(Some("tales"), FeedOptions::default().shuffled())
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();

        assert_eq!(ordered, shuffled);
    }

    #[tokio::test]
    async fn test_partitions_are_isolated() {
        let (feed, mutations) = services(VoteMode::Atomic);
        mutations
            .post_story(Some("tales"), None, "a tale")
            .await
            .unwrap();
        mutations
            .post_story(None, None, "a default story")
            .await
            .unwrap();

        let tales = feed
            .list_stories(Some("tales"), FeedOptions::default())
            .await
            .unwrap();
        let default = feed
            .list_stories(Some(""), FeedOptions::default())
            .await
            .unwrap();

        assert_eq!(tales.len(), 1);
        assert_eq!(tales[0].content, "a tale");
        assert_eq!(default.len(), 1);
        assert_eq!(default[0].content, "a default story");
    }

    #[tokio::test]
    async fn test_get_story_round_trip() {
        let (feed, mutations) = services(VoteMode::Atomic);
        let posted = mutations
            .post_story(Some("tales"), Identity::new("alice"), "Once upon a time")
            .await
            .unwrap();

        let view = feed
            .get_story(&posted.id().to_string(), Some("tales"))
            .await
            .unwrap();

        assert_eq!(view.content, "Once upon a time");
        assert_eq!(view.author.as_deref(), Some("alice"));
        assert_eq!((view.up_vote, view.down_vote), (0, 0));
        assert_eq!(view.storybook_name.as_deref(), Some("tales"));
    }

    #[tokio::test]
    async fn test_get_story_from_another_partition_is_not_found() {
        let (feed, mutations) = services(VoteMode::Atomic);
        let posted = mutations
            .post_story(Some("tales"), None, "hidden")
            .await
            .unwrap();

        let result = feed.get_story(&posted.id().to_string(), None).await;

        assert!(matches!(result, Err(StoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_story_invalid_identifier() {
        let (feed, _) = services(VoteMode::Atomic);

        let result = feed.get_story("abc", None).await;

        assert_eq!(
            result,
            Err(StoryError::InvalidIdentifier("abc".to_string()))
        );
    }

    #[tokio::test]
    async fn test_list_comments_newest_first_with_limit() {
        let (feed, mutations) = services(VoteMode::Atomic);
        let story = mutations.post_story(None, None, "story").await.unwrap();
        let story_id = story.id().to_string();
        for i in 0..4 {
            mutations
                .post_comment(&story_id, None, None, &format!("comment {i}"))
                .await
                .unwrap();
        }

        let comments = feed.list_comments(&story_id, None, 3).await.unwrap();

        let contents: Vec<&str> = comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["comment 3", "comment 2", "comment 1"]);
    }

    #[tokio::test]
    async fn test_list_stories_uses_creation_date_not_insertion_order() {
        let repo = std::sync::Arc::new(crate::storage::InMemoryRepository::new());
        let feed = FeedService::new(repo.clone(), repo.clone());
        let base = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();

        repo.create_story(
            &NewStory::new(partition_key(None), "newer").with_date(base + Duration::hours(1)),
        )
        .await
        .unwrap();
        repo.create_story(&NewStory::new(partition_key(None), "older").with_date(base))
            .await
            .unwrap();

        let stories = feed
            .list_stories(None, FeedOptions::default())
            .await
            .unwrap();

        let contents: Vec<&str> = stories.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(contents, vec!["newer", "older"]);
    }
}
