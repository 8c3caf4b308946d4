//! The story page: one story and its most recent comments.

use axum::{
    extract::{OriginalUri, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use storybook_auth::OptionalIdentity;
use storybook_core::serde::deserialize_optional_string;

use crate::{
    handlers::{
        templates::{CommentTemplate, HtmlTemplate, LoginContext, NavLinks},
        AppError,
    },
    state::AppState,
};

/// Query parameters for the story page.
#[derive(Debug, Deserialize)]
pub struct StoryQuery {
    #[serde(default)]
    pub story_id: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub storybook_name: Option<String>,
}

/// GET /story
pub async fn show_story(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<StoryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let partition_name = query.storybook_name.as_deref();

    let story = state
        .feed
        .get_story(&query.story_id, partition_name)
        .await?;
    let comments = state
        .feed
        .list_comments(&query.story_id, partition_name, state.config.num_comments)
        .await?;

    let LoginContext {
        login,
        login_linktext,
    } = LoginContext::new(&state, identity.as_ref(), &uri);

    Ok(HtmlTemplate(CommentTemplate {
        story,
        comments,
        nav: NavLinks::new(partition_name),
        storybook_name: query.storybook_name.clone().unwrap_or_default(),
        login,
        login_linktext,
    }))
}
