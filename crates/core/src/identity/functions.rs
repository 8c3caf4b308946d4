use super::{Identity, IdentityProvider, LoginLink};

/// Builds the login/logout link for the current request.
///
/// Signed-in visitors get a logout link, everybody else a login link. Both
/// return to `request_uri` when the flow completes.
pub fn login_link(
    provider: &dyn IdentityProvider,
    current: Option<&Identity>,
    request_uri: &str,
) -> LoginLink {
    match current {
        Some(_) => LoginLink {
            url: provider.logout_url(request_uri),
            link_text: "Logout",
        },
        None => LoginLink {
            url: provider.login_url(request_uri),
            link_text: "Login",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider;

    impl IdentityProvider for FixedProvider {
        fn login_url(&self, return_to: &str) -> String {
            format!("/in?r={return_to}")
        }

        fn logout_url(&self, return_to: &str) -> String {
            format!("/out?r={return_to}")
        }
    }

    #[test]
    fn test_anonymous_visitor_gets_login_link() {
        let link = login_link(&FixedProvider, None, "/random");
        assert_eq!(link.url, "/in?r=/random");
        assert_eq!(link.link_text, "Login");
    }

    #[test]
    fn test_signed_in_visitor_gets_logout_link() {
        let identity = Identity::new("alice").unwrap();
        let link = login_link(&FixedProvider, Some(&identity), "/");
        assert_eq!(link.url, "/out?r=/");
        assert_eq!(link.link_text, "Logout");
    }
}
