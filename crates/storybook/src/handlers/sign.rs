//! POST /sign - story submission.

use axum::{extract::State, response::Redirect, Form};
use serde::Deserialize;

use storybook_auth::OptionalIdentity;
use storybook_core::serde::deserialize_optional_string;
use storybook_core::story::feed_url;

use crate::{handlers::AppError, state::AppState};

/// Form fields of the story submission form.
#[derive(Debug, Deserialize)]
pub struct SignForm {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub storybook_name: Option<String>,
    #[serde(default)]
    pub content: String,
}

/// Creates a story and sends the author back to the feed it was posted to.
pub async fn sign(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    Form(form): Form<SignForm>,
) -> Result<Redirect, AppError> {
    let partition_name = form.storybook_name.as_deref();

    state
        .mutations
        .post_story(partition_name, identity, &form.content)
        .await?;

    Ok(Redirect::to(&feed_url(partition_name)))
}
