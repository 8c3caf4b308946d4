use std::{env, time::Duration};

use storybook_core::story::{DEFAULT_COMMENT_PAGE_SIZE, DEFAULT_FEED_SIZE};

use crate::services::VoteMode;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Stories per feed page (default: 10)
    pub num_stories: usize,
    /// Comments shown under a story (default: 10)
    pub num_comments: usize,
    /// Vote update strategy (default: atomic)
    pub vote_mode: VoteMode,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Path to SQLite database file (default: "storybook.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `NUM_STORIES` - Stories per feed page (default: 10)
    /// - `NUM_COMMENTS` - Comments per story page (default: 10)
    /// - `VOTE_MODE` - `atomic` or `read-modify-write` (default: atomic)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    /// - `SQLITE_PATH` - SQLite database path (default: "storybook.db")
    pub fn from_env() -> Self {
        Self {
            num_stories: env::var("NUM_STORIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FEED_SIZE),
            num_comments: env::var("NUM_COMMENTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_COMMENT_PAGE_SIZE),
            vote_mode: env::var("VOTE_MODE")
                .ok()
                .map(|v| parse_vote_mode(&v))
                .unwrap_or_default(),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "storybook.db".to_string()),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn parse_vote_mode(value: &str) -> VoteMode {
    value.parse().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring VOTE_MODE, using the default");
        VoteMode::default()
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_stories: DEFAULT_FEED_SIZE,
            num_comments: DEFAULT_COMMENT_PAGE_SIZE,
            vote_mode: VoteMode::default(),
            request_timeout_seconds: 10,
            sqlite_path: "storybook.db".to_string(),
        }
    }
}
