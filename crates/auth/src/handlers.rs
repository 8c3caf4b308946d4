//! HTTP handlers for auth routes.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use storybook_core::identity::validate_return_to;

use crate::config::{LOGIN_PATH, LOGOUT_PATH};
use crate::error::AuthError;
use crate::provider::{parse_nickname, to_cookie_value};
use crate::templates;
use crate::AuthState;

/// Query parameters for the login route.
#[derive(Deserialize, Default)]
pub struct LoginQuery {
    /// Nickname chosen on the login page. Absent on the first visit.
    pub nickname: Option<String>,
    /// URL to redirect to after login.
    pub return_to: Option<String>,
}

/// Query parameters for the logout route.
#[derive(Deserialize, Default)]
pub struct LogoutQuery {
    pub return_to: Option<String>,
}

/// Creates the auth router.
///
/// Routes:
/// - `GET /auth/login` - Render the nickname form, or sign in when `nickname` is given
/// - `GET /auth/logout` - Forget the current identity
pub fn auth_routes() -> Router<AuthState> {
    Router::new()
        .route(LOGIN_PATH, get(login))
        .route(LOGOUT_PATH, get(logout))
}

/// Only same-site relative targets are honoured; anything else goes home.
fn safe_return_to(return_to: Option<&str>) -> String {
    return_to
        .and_then(validate_return_to)
        .unwrap_or("/")
        .to_string()
}

fn cookie_max_age(ttl: std::time::Duration) -> Result<time::Duration, AuthError> {
    i64::try_from(ttl.as_secs())
        .map(time::Duration::seconds)
        .map_err(|_| AuthError::Config(format!("identity lifetime is too large: {ttl:?}")))
}

async fn login(
    State(state): State<AuthState>,
    Query(query): Query<LoginQuery>,
    jar: CookieJar,
) -> Result<Response, AuthError> {
    let return_to = safe_return_to(query.return_to.as_deref());

    let Some(nickname) = query.nickname else {
        return Ok(Html(templates::login_page(LOGIN_PATH, &return_to)).into_response());
    };

    let identity = parse_nickname(&nickname)?;

    let cookie = Cookie::build((state.config.cookie_name.clone(), to_cookie_value(&identity)))
        .path("/")
        .http_only(true)
        .secure(state.config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(cookie_max_age(state.config.identity_ttl)?)
        .build();

    tracing::info!(nickname = %identity, "Signed in");

    Ok((jar.add(cookie), Redirect::to(&return_to)).into_response())
}

async fn logout(
    State(state): State<AuthState>,
    Query(query): Query<LogoutQuery>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    let return_to = safe_return_to(query.return_to.as_deref());

    let jar = jar.remove(Cookie::build(state.config.cookie_name.clone()).path("/"));

    (jar, Redirect::to(&return_to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        auth_routes().with_state(AuthState::default())
    }

    #[test]
    fn test_cookie_max_age() {
        let max_age = cookie_max_age(std::time::Duration::from_secs(604_800)).unwrap();
        assert_eq!(max_age, time::Duration::days(7));

        let result = cookie_max_age(std::time::Duration::from_secs(u64::MAX));
        assert!(matches!(result, Err(AuthError::Config(_))));
    }

    #[tokio::test]
    async fn test_login_without_nickname_renders_form() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/auth/login?return_to=%2Fnew")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("name=\"nickname\""));
        assert!(html.contains("value=\"/new\""));
    }

    #[tokio::test]
    async fn test_login_sets_cookie_and_redirects() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/auth/login?nickname=alice&return_to=%2Frandom")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/random");

        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("storybook_identity=alice"));
    }

    #[tokio::test]
    async fn test_login_ignores_offsite_return_target() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/auth/login?nickname=alice&return_to=https%3A%2F%2Fevil.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_login_rejects_blank_nickname() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/auth/login?nickname=%20%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_logout_clears_cookie() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/auth/logout?return_to=%2F")
                    .header(header::COOKIE, "storybook_identity=alice")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("storybook_identity="));
        assert!(cookie.contains("Max-Age=0"));
    }
}
