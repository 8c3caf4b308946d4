//! Feed pages: `/`, `/random` and `/new`.

use axum::{
    extract::{OriginalUri, Query, State},
    http::Uri,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use storybook_auth::OptionalIdentity;
use storybook_core::identity::Identity;
use storybook_core::serde::deserialize_optional_string;
use storybook_core::story::FeedOptions;

use crate::{
    handlers::{
        templates::{HtmlTemplate, InputTemplate, LoginContext, MainTemplate, NavLinks},
        AppError,
    },
    state::AppState,
};

/// Query parameters shared by the feed pages.
#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub storybook_name: Option<String>,
}

/// The three ways of presenting a feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeedVariant {
    Recent,
    Random,
    WithInput,
}

/// GET / - most recent stories first.
pub async fn index(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<FeedQuery>,
) -> Result<Response, AppError> {
    render_feed(&state, identity, &uri, query, FeedVariant::Recent).await
}

/// GET /random - the most recent window in random order.
pub async fn random(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<FeedQuery>,
) -> Result<Response, AppError> {
    render_feed(&state, identity, &uri, query, FeedVariant::Random).await
}

/// GET /new - the feed with the submission form.
pub async fn new_story(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<FeedQuery>,
) -> Result<Response, AppError> {
    render_feed(&state, identity, &uri, query, FeedVariant::WithInput).await
}

async fn render_feed(
    state: &AppState,
    identity: Option<Identity>,
    uri: &Uri,
    query: FeedQuery,
    variant: FeedVariant,
) -> Result<Response, AppError> {
    let mut options = FeedOptions::default().with_limit(state.config.num_stories);
    if variant == FeedVariant::Random {
        options = options.shuffled();
    }

    let storybook_name = query.storybook_name;
    let stories = state
        .feed
        .list_stories(storybook_name.as_deref(), options)
        .await?;

    let LoginContext {
        login,
        login_linktext,
    } = LoginContext::new(state, identity.as_ref(), uri);
    let nav = NavLinks::new(storybook_name.as_deref());
    let storybook_name = storybook_name.unwrap_or_default();

    let response = match variant {
        FeedVariant::Recent | FeedVariant::Random => HtmlTemplate(MainTemplate {
            stories,
            storybook_name,
            nav,
            login,
            login_linktext,
        })
        .into_response(),
        FeedVariant::WithInput => HtmlTemplate(InputTemplate {
            stories,
            storybook_name,
            nav,
            login,
            login_linktext,
        })
        .into_response(),
    };

    Ok(response)
}
