use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use storybook_auth::auth_routes;

use crate::{
    handlers::{
        comment::comment,
        feed::{index, new_story, random},
        health::livez,
        sign::sign,
        story::show_story,
        vote::vote,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let auth = auth_routes().with_state(state.auth.clone());
    let timeout = state.config.request_timeout();

    Router::new()
        .route("/", get(index))
        .route("/random", get(random))
        .route("/new", get(new_story))
        .route("/story", get(show_story))
        .route("/sign", post(sign))
        .route("/comment", post(comment))
        .route("/vote", get(vote))
        .route("/livez", get(livez))
        .merge(auth)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state)
}
