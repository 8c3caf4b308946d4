use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storybook_core::storage::{
    repository_error_to_status_code, story_error_to_status_code, RepositoryError,
};
use storybook_core::story::StoryError;

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(story_error) = self.0.downcast_ref::<StoryError>() {
            story_error_to_status_code(story_error)
        } else if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(repo_error)
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = ?self.0, "Request failed");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "Request rejected");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_errors_map_to_statuses() {
        let cases = [
            (StoryError::InvalidIdentifier("x".to_string()), 404),
            (
                StoryError::NotFound {
                    entity_type: "Story",
                    id: "default_storybook/1".to_string(),
                },
                404,
            ),
            (StoryError::EmptyContent, 400),
            (
                StoryError::WriteFailure(RepositoryError::WriteFailed("disk".to_string())),
                500,
            ),
        ];

        for (error, expected) in cases {
            let app_error = AppError::from(error);
            assert_eq!(app_error.status_code().as_u16(), expected);
        }
    }

    #[test]
    fn test_unknown_errors_are_internal() {
        let app_error = AppError(anyhow::anyhow!("boom"));
        assert_eq!(app_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
