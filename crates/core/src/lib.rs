//! Functional core of the storybook board.
//!
//! Pure domain logic only: key derivation, entity types, feed shaping,
//! validation, and the repository and identity traits implemented by the
//! outer crates.

pub mod identity;
pub mod serde;
pub mod storage;
pub mod story;
