use std::time::Duration;

use crate::error::AuthError;

/// Path of the login route.
pub const LOGIN_PATH: &str = "/auth/login";

/// Path of the logout route.
pub const LOGOUT_PATH: &str = "/auth/logout";

/// Identity provider configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Name of the cookie carrying the author nickname.
    pub cookie_name: String,
    /// How long a login lasts.
    pub identity_ttl: Duration,
    /// Whether to set the secure flag on the cookie.
    pub cookie_secure: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: "storybook_identity".to_string(),
            identity_ttl: Duration::from_secs(7 * 24 * 60 * 60),
            cookie_secure: false,
        }
    }
}

impl AuthConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `AUTH_COOKIE_NAME`: Identity cookie name (default: `storybook_identity`)
    /// - `IDENTITY_TTL_DAYS`: Login lifetime in days (default: 7)
    /// - `COOKIE_SECURE`: Whether to set secure flag on cookies (default: false)
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Config` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, AuthError> {
        let defaults = Self::default();

        let cookie_name = match std::env::var("AUTH_COOKIE_NAME") {
            Ok(name) => validate_cookie_name(name)?,
            Err(_) => defaults.cookie_name,
        };

        let identity_ttl = match std::env::var("IDENTITY_TTL_DAYS") {
            Ok(days) => parse_identity_ttl(&days)?,
            Err(_) => defaults.identity_ttl,
        };

        let cookie_secure = std::env::var("COOKIE_SECURE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(defaults.cookie_secure);

        Ok(Self {
            cookie_name,
            identity_ttl,
            cookie_secure,
        })
    }
}

fn parse_identity_ttl(days: &str) -> Result<Duration, AuthError> {
    let days = days
        .trim()
        .parse::<u64>()
        .map_err(|e| AuthError::Config(format!("IDENTITY_TTL_DAYS: {e}")))?;

    days.checked_mul(24 * 60 * 60)
        .map(Duration::from_secs)
        .ok_or_else(|| AuthError::Config(format!("IDENTITY_TTL_DAYS is too large: {days}")))
}

fn validate_cookie_name(name: String) -> Result<String, AuthError> {
    let invalid = name.is_empty()
        || name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || "()<>@,;:\\\"/[]?={}".contains(c));

    if invalid {
        return Err(AuthError::Config(format!(
            "AUTH_COOKIE_NAME is not a valid cookie name: {name:?}"
        )));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AuthConfig::default();

        assert_eq!(config.cookie_name, "storybook_identity");
        assert_eq!(config.identity_ttl, Duration::from_secs(604_800));
        assert!(!config.cookie_secure);
    }

    #[test]
    fn test_parse_identity_ttl() {
        assert_eq!(parse_identity_ttl("1").unwrap(), Duration::from_secs(86_400));
        assert_eq!(parse_identity_ttl(" 30 ").unwrap(), Duration::from_secs(2_592_000));
        assert!(matches!(parse_identity_ttl("soon"), Err(AuthError::Config(_))));
        assert!(matches!(parse_identity_ttl("-1"), Err(AuthError::Config(_))));
        assert!(matches!(
            parse_identity_ttl(&u64::MAX.to_string()),
            Err(AuthError::Config(_))
        ));
    }

    #[test]
    fn test_cookie_name_validation() {
        assert!(validate_cookie_name("author".to_string()).is_ok());
        assert!(validate_cookie_name(String::new()).is_err());
        assert!(validate_cookie_name("a b".to_string()).is_err());
        assert!(validate_cookie_name("a=b".to_string()).is_err());
    }
}
