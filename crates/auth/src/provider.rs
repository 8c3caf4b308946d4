//! Development identity provider.
//!
//! Visitors pick a nickname on the login page; the nickname is kept in a
//! cookie and trusted as-is. There are no passwords and no sessions, so this
//! provider is only suitable for local development and tests.

use storybook_core::identity::{Identity, IdentityProvider};

use crate::config::{LOGIN_PATH, LOGOUT_PATH};
use crate::error::AuthError;

/// Longest nickname accepted by the login form.
pub const MAX_NICKNAME_LEN: usize = 64;

/// Identity provider backed by the nickname cookie.
#[derive(Debug, Clone, Default)]
pub struct CookieIdentityProvider;

impl IdentityProvider for CookieIdentityProvider {
    fn login_url(&self, return_to: &str) -> String {
        format!("{LOGIN_PATH}?return_to={}", urlencoding::encode(return_to))
    }

    fn logout_url(&self, return_to: &str) -> String {
        format!("{LOGOUT_PATH}?return_to={}", urlencoding::encode(return_to))
    }
}

/// Validates a nickname submitted on the login page.
pub fn parse_nickname(raw: &str) -> Result<Identity, AuthError> {
    if raw.trim().chars().count() > MAX_NICKNAME_LEN {
        return Err(AuthError::InvalidNickname(raw.to_string()));
    }
    Identity::new(raw).ok_or_else(|| AuthError::InvalidNickname(raw.to_string()))
}

/// Encodes an identity as a cookie value.
pub fn to_cookie_value(identity: &Identity) -> String {
    urlencoding::encode(identity.nickname()).into_owned()
}

/// Decodes a cookie value back into an identity.
///
/// Malformed or blank values yield `None`: the visitor is treated as anonymous.
pub fn from_cookie_value(value: &str) -> Option<Identity> {
    let decoded = urlencoding::decode(value).ok()?;
    if decoded.trim().chars().count() > MAX_NICKNAME_LEN {
        return None;
    }
    Identity::new(decoded.into_owned())
}
