//! Write-side operations: posting stories and comments, voting.

use std::{fmt, str::FromStr, sync::Arc};

use storybook_core::identity::Identity;
use storybook_core::storage::{CommentRepository, StoryRepository};
use storybook_core::story::{
    partition_key, story_key, validate_content, Comment, NewComment, NewStory, Story, StoryError,
    StoryKey, VoteDirection,
};

/// How `apply_vote` updates the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VoteMode {
    /// The store increments the counter in a single step.
    #[default]
    Atomic,
    /// Read the story, bump the counter in memory, write the whole story back.
    /// Concurrent votes on the same story can overwrite each other.
    ReadModifyWrite,
}

impl FromStr for VoteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "atomic" => Ok(Self::Atomic),
            "read-modify-write" | "read_modify_write" | "rmw" => Ok(Self::ReadModifyWrite),
            other => Err(format!(
                "unknown vote mode {other:?}, expected 'atomic' or 'read-modify-write'"
            )),
        }
    }
}

impl fmt::Display for VoteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atomic => write!(f, "atomic"),
            Self::ReadModifyWrite => write!(f, "read-modify-write"),
        }
    }
}

/// Command service for the `/sign`, `/comment` and `/vote` routes.
#[derive(Clone)]
pub struct MutationService {
    stories: Arc<dyn StoryRepository>,
    comments: Arc<dyn CommentRepository>,
    vote_mode: VoteMode,
}

impl MutationService {
    pub fn new(
        stories: Arc<dyn StoryRepository>,
        comments: Arc<dyn CommentRepository>,
        vote_mode: VoteMode,
    ) -> Self {
        Self {
            stories,
            comments,
            vote_mode,
        }
    }

    /// Posts a new story into a storybook.
    ///
    /// Content is stored verbatim; escaping is left to the templates.
    pub async fn post_story(
        &self,
        partition_name: Option<&str>,
        author: Option<Identity>,
        content: &str,
    ) -> Result<Story, StoryError> {
        validate_content(content)?;

        let new_story = NewStory::new(partition_key(partition_name), content).with_author(author);
        let story = self
            .stories
            .create_story(&new_story)
            .await
            .map_err(StoryError::WriteFailure)?;

        tracing::info!(
            story_id = story.id(),
            partition = %story.key.partition,
            author = story.author.as_ref().map(Identity::nickname),
            "Story posted"
        );

        Ok(story)
    }

    /// Posts a comment on an existing story.
    pub async fn post_comment(
        &self,
        story_id: &str,
        partition_name: Option<&str>,
        author: Option<Identity>,
        content: &str,
    ) -> Result<Comment, StoryError> {
        let key = story_key(story_id, partition_name)?;
        validate_content(content)?;
        self.load_story(&key).await?;

        let new_comment = NewComment::new(key, content).with_author(author);
        let comment = self
            .comments
            .create_comment(&new_comment)
            .await
            .map_err(StoryError::WriteFailure)?;

        tracing::info!(
            comment_id = comment.id,
            story = %comment.story,
            "Comment posted"
        );

        Ok(comment)
    }

    /// Adds one vote to a story and returns the updated story.
    pub async fn apply_vote(
        &self,
        story_id: &str,
        partition_name: Option<&str>,
        direction: VoteDirection,
    ) -> Result<Story, StoryError> {
        let key = story_key(story_id, partition_name)?;

        let story = match self.vote_mode {
            VoteMode::Atomic => self
                .stories
                .increment_vote(&key, direction)
                .await
                .map_err(StoryError::WriteFailure)?
                .ok_or_else(|| not_found(&key))?,
            VoteMode::ReadModifyWrite => {
                let story = self.load_story(&key).await?.with_vote(direction);
                self.stories
                    .update_story(&story)
                    .await
                    .map_err(StoryError::WriteFailure)?;
                story
            }
        };

        tracing::info!(
            story = %story.key,
            direction = %direction,
            up_vote = story.up_vote,
            down_vote = story.down_vote,
            mode = %self.vote_mode,
            "Vote applied"
        );

        Ok(story)
    }

    async fn load_story(&self, key: &StoryKey) -> Result<Story, StoryError> {
        self.stories
            .get_story(key)
            .await?
            .ok_or_else(|| not_found(key))
    }
}

fn not_found(key: &StoryKey) -> StoryError {
    StoryError::NotFound {
        entity_type: "Story",
        id: key.to_string(),
    }
}
