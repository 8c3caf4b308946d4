//! Askama page templates.

use askama::Template;
use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use storybook_core::identity::{login_link, Identity};
use storybook_core::story::{feed_url, CommentView, StoryView};

use crate::state::AppState;

/// Template wrapper that converts Askama templates into HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {err}"),
                )
                    .into_response()
            }
        }
    }
}

/// The login or logout link shown in every page header.
pub struct LoginContext {
    pub login: String,
    pub login_linktext: &'static str,
}

impl LoginContext {
    /// Builds the link for the visitor, returning to the URI they requested.
    pub fn new(state: &AppState, identity: Option<&Identity>, uri: &Uri) -> Self {
        let request_uri = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        let link = login_link(state.auth.provider.as_ref(), identity, request_uri);

        Self {
            login: link.url,
            login_linktext: link.link_text,
        }
    }
}

/// Navigation links that stay within the current storybook.
pub struct NavLinks {
    pub home: String,
    pub random: String,
    pub new: String,
}

impl NavLinks {
    pub fn new(storybook_name: Option<&str>) -> Self {
        let home = feed_url(storybook_name);
        let query = home.trim_start_matches('/').to_string();

        Self {
            random: format!("/random{query}"),
            new: format!("/new{query}"),
            home,
        }
    }
}

/// The feed: newest stories with their vote links.
#[derive(Template)]
#[template(path = "main.html")]
pub struct MainTemplate {
    pub stories: Vec<StoryView>,
    pub storybook_name: String,
    pub nav: NavLinks,
    pub login: String,
    pub login_linktext: &'static str,
}

/// The feed with the story submission form.
#[derive(Template)]
#[template(path = "input.html")]
pub struct InputTemplate {
    pub stories: Vec<StoryView>,
    pub storybook_name: String,
    pub nav: NavLinks,
    pub login: String,
    pub login_linktext: &'static str,
}

/// A single story with its comments and the comment form.
#[derive(Template)]
#[template(path = "comment.html")]
pub struct CommentTemplate {
    pub story: StoryView,
    pub comments: Vec<CommentView>,
    pub storybook_name: String,
    pub nav: NavLinks,
    pub login: String,
    pub login_linktext: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_default_storybook() {
        let nav = NavLinks::new(None);
        assert_eq!(nav.home, "/");
        assert_eq!(nav.random, "/random");
        assert_eq!(nav.new, "/new");
    }

    #[test]
    fn test_nav_links_keep_storybook_name() {
        let nav = NavLinks::new(Some("my tales"));
        assert_eq!(nav.home, "/?storybook_name=my+tales");
        assert_eq!(nav.random, "/random?storybook_name=my+tales");
        assert_eq!(nav.new, "/new?storybook_name=my+tales");
    }
}
