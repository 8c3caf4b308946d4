//! Application state for auth.

use std::sync::Arc;

use storybook_core::identity::IdentityProvider;

use crate::config::AuthConfig;
use crate::provider::CookieIdentityProvider;

/// Shared state for auth handlers and extractors.
#[derive(Clone)]
pub struct AuthState {
    pub config: Arc<AuthConfig>,
    pub provider: Arc<dyn IdentityProvider>,
}

impl AuthState {
    /// Creates auth state backed by the development cookie provider.
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config: Arc::new(config),
            provider: Arc::new(CookieIdentityProvider),
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new(AuthConfig::default())
    }
}
