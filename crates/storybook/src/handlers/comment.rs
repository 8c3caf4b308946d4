//! POST /comment - comment submission.

use axum::{extract::State, response::Redirect, Form};
use serde::Deserialize;

use storybook_auth::OptionalIdentity;
use storybook_core::serde::deserialize_optional_string;
use storybook_core::story::story_url;

use crate::{handlers::AppError, state::AppState};

/// Form fields of the comment form.
#[derive(Debug, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub story_id: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub storybook_name: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// Adds a comment and sends the author back to the story page.
pub async fn comment(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    Form(form): Form<CommentForm>,
) -> Result<Redirect, AppError> {
    let comment = state
        .mutations
        .post_comment(
            &form.story_id,
            form.storybook_name.as_deref(),
            identity,
            &form.content,
        )
        .await?;

    Ok(Redirect::to(&story_url(&comment.story)))
}
