//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `storybook_core::storage`. The backend is selected at compile
//! time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local storage, lost on restart
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with the in-memory store (default):
//! ```bash
//! cargo build -p storybook
//! ```
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p storybook --no-default-features --features sqlite
//! ```

#[cfg(all(feature = "inmemory", feature = "sqlite"))]
compile_error!(
    "Features 'inmemory' and 'sqlite' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'sqlite' feature. \
    Example: cargo build -p storybook --no-default-features --features sqlite"
);

// Tests always get the in-memory backend, whatever the feature set.
#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
