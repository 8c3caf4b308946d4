mod error;
mod feed;
mod keys;
mod types;
mod validation;
mod views;

pub use error::StoryError;
pub use feed::{
    shape_comments, shape_feed, sort_comments_newest_first, sort_stories_newest_first,
    FeedOptions, DEFAULT_COMMENT_PAGE_SIZE, DEFAULT_FEED_SIZE,
};
pub use keys::{parse_story_id, partition_key, story_key};
pub use types::{
    Comment, NewComment, NewStory, PartitionKey, Story, StoryKey, VoteDirection,
    DEFAULT_STORYBOOK,
};
pub use validation::validate_content;
pub use views::{feed_url, nicetime, story_url, vote_url, CommentView, StoryView};
