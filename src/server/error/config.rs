use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration problems, all fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
    #[error("FLEET_USERS entry {0:?} is not in user:bcrypt_hash form")]
    MalformedUser(String),
    #[error("FLEET_USERS lists user {0:?} more than once")]
    DuplicateUser(String),
    #[error("FLEET_USERS does not configure any user")]
    NoUsers,
}

impl ConfigError {
    pub fn invalid(var: &str, reason: impl ToString) -> Self {
        Self::InvalidEnvValue {
            var: var.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
