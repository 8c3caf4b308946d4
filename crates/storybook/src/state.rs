//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers reach storage only through the feed and
//! mutation services, which hold repository trait objects.

use std::sync::Arc;

use axum::extract::FromRef;

use storybook_auth::AuthState;
use storybook_core::storage::{CommentRepository, StoryRepository};

use crate::config::Config;
use crate::services::{FeedService, MutationService};

/// Shared application state.
///
/// Cloned for each request handler; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Read-side queries.
    pub feed: FeedService,
    /// Story, comment and vote writes.
    pub mutations: MutationService,
    /// Identity provider state, shared with the `/auth` routes.
    pub auth: AuthState,
    /// Immutable configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates an AppState around the given repositories.
    pub fn build(
        stories: Arc<dyn StoryRepository>,
        comments: Arc<dyn CommentRepository>,
        auth: AuthState,
        config: Config,
    ) -> Self {
        Self {
            feed: FeedService::new(stories.clone(), comments.clone()),
            mutations: MutationService::new(stories, comments, config.vote_mode),
            auth,
            config: Arc::new(config),
        }
    }

    /// Creates an AppState backed by a fresh in-memory store.
    #[cfg(any(test, feature = "inmemory"))]
    pub fn in_memory(auth: AuthState, config: Config) -> Self {
        let repo = Arc::new(crate::storage::InMemoryRepository::new());
        Self::build(repo.clone(), repo, auth, config)
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(AuthState::default(), Config::default())
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(config: Config, auth: AuthState) -> Result<Self, anyhow::Error> {
            tracing::info!(backend = "inmemory", "Initializing storage");
            Ok(Self::in_memory(auth, config))
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: Config, auth: AuthState) -> Result<Self, anyhow::Error> {
            tracing::info!(backend = "sqlite", path = %config.sqlite_path, "Initializing storage");
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            Ok(Self::build(repo.clone(), repo, auth, config))
        }
    }
}
