use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username is not present in session")]
    NotLoggedIn,
    #[error("Failed login attempt for user {0:?}")]
    InvalidCredentials(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::NotLoggedIn => "Login required",
            Self::InvalidCredentials(username) => {
                tracing::info!(username = %username, "{}", self);

                "Incorrect username or password"
            }
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
