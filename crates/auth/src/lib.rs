//! Identity collaborator for storybook.
//!
//! This crate provides:
//! - A development identity provider that keeps the author nickname in a cookie
//! - The `/auth/login` and `/auth/logout` routes of that provider
//! - An Axum extractor for the optional current identity

mod config;
mod error;
mod extractors;
mod handlers;
mod provider;
mod state;
mod templates;

pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::OptionalIdentity;
pub use handlers::auth_routes;
pub use provider::CookieIdentityProvider;
pub use state::AuthState;
