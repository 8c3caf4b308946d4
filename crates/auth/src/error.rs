use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors of the identity provider.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Submitted nickname is blank or too long.
    #[error("invalid nickname: {0:?}")]
    InvalidNickname(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::InvalidNickname(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AuthError::Config(_) => {
                tracing::error!("Config error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
