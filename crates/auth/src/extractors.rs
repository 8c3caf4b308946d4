//! Axum extractors for authentication.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use storybook_core::identity::Identity;

use crate::provider::from_cookie_value;
use crate::AuthState;

/// Extractor for the optional current identity. Never rejects: visitors
/// without a valid identity cookie are anonymous.
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);

        let identity = jar
            .get(&auth_state.config.cookie_name)
            .and_then(|cookie| from_cookie_value(cookie.value()));

        Ok(OptionalIdentity(identity))
    }
}
