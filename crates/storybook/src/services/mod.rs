//! Feed queries and mutations over the repository traits.
//!
//! Handlers only talk to these services; the services only talk to the
//! `StoryRepository` / `CommentRepository` trait objects they were built with.

mod feed;
mod mutation;

pub use feed::FeedService;
pub use mutation::{MutationService, VoteMode};

#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for service and router tests.

    use std::sync::Arc;

    use storybook_core::storage::{CommentRepository, StoryRepository};

    use crate::storage::InMemoryRepository;

    use super::{FeedService, MutationService, VoteMode};

    pub fn services(mode: VoteMode) -> (FeedService, MutationService) {
        let repo = Arc::new(InMemoryRepository::new());
        let stories: Arc<dyn StoryRepository> = repo.clone();
        let comments: Arc<dyn CommentRepository> = repo;

        (
            FeedService::new(stories.clone(), comments.clone()),
            MutationService::new(stories, comments, mode),
        )
    }
}
