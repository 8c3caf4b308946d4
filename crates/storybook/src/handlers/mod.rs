pub mod comment;
pub mod error;
pub mod feed;
pub mod health;
pub mod sign;
pub mod story;
pub mod templates;
pub mod vote;

pub use error::AppError;
