/// Abstraction over the identity provider that authenticates authors.
///
/// The provider owns the login flow; the board only needs to know where to
/// send the browser.
pub trait IdentityProvider: Send + Sync {
    /// URL that starts a login and comes back to `return_to`.
    fn login_url(&self, return_to: &str) -> String;

    /// URL that ends the session and comes back to `return_to`.
    fn logout_url(&self, return_to: &str) -> String;
}
