//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository traits
//! that stores all data in HashMaps wrapped in `Arc<RwLock<_>>`. It is the
//! default backend and the one used by tests; data is lost on restart.
//!
//! # Example
//!
//! ```rust,ignore
//! use storybook::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
