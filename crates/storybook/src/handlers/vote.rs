//! GET /vote - up and down votes.

use axum::{
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;

use storybook_core::serde::{deserialize_optional_string, deserialize_vote_direction};
use storybook_core::story::{feed_url, VoteDirection};

use crate::{handlers::AppError, state::AppState};

/// Query parameters of a vote link.
#[derive(Debug, Deserialize)]
pub struct VoteQuery {
    #[serde(default)]
    pub story_id: String,
    #[serde(default = "default_direction", deserialize_with = "deserialize_vote_direction")]
    pub upvote: VoteDirection,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub storybook_name: Option<String>,
}

fn default_direction() -> VoteDirection {
    VoteDirection::Down
}

/// Applies the vote, then returns to the feed of the story's storybook.
pub async fn vote(
    State(state): State<AppState>,
    Query(query): Query<VoteQuery>,
) -> Result<Redirect, AppError> {
    let partition_name = query.storybook_name.as_deref();

    state
        .mutations
        .apply_vote(&query.story_id, partition_name, query.upvote)
        .await?;

    Ok(Redirect::to(&feed_url(partition_name)))
}
