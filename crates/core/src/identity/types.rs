/// An authenticated author, identified by nickname.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    /// Creates an identity, returning `None` for blank nicknames.
    pub fn new(nickname: impl Into<String>) -> Option<Self> {
        let nickname = nickname.into();
        let trimmed = nickname.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn nickname(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Login or logout link rendered on every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginLink {
    pub url: String,
    pub link_text: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_trims_nickname() {
        let identity = Identity::new("  alice ").unwrap();
        assert_eq!(identity.nickname(), "alice");
    }

    #[test]
    fn test_blank_identity_is_rejected() {
        assert!(Identity::new("").is_none());
        assert!(Identity::new("   ").is_none());
    }
}
