//! Error types for the fleet scheduler server.
//!
//! Domain errors live in submodules and are aggregated into [`Error`]. Every error implements
//! `IntoResponse` so handlers can return `Result<impl IntoResponse, Error>` directly.

pub mod auth;
pub mod config;
pub mod fleet;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, fleet::FleetError},
};

/// Main error type for the fleet scheduler server.
///
/// Uses `thiserror`'s `#[from]` attribute so the `?` operator converts library and domain
/// errors automatically. The `IntoResponse` implementation maps each error to an HTTP status.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (not logged in, bad credentials).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Fleet domain error (validation failures, missing records).
    #[error(transparent)]
    FleetError(#[from] FleetError),
    /// Parse error (failed to parse a stored value).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Password hashing or verification error.
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
    /// I/O error (binding the listener, serving connections, reading stdin).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures
/// - 401 Unauthorized - Missing login or wrong credentials
/// - 404 Not Found - Missing device type, project, deployment or allocation
/// - 409 Conflict - Unique or foreign key constraint violations
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::FleetError(err) => err.into_response(),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!(detail = %detail, "Unique constraint violation");

                    conflict("A record with the same unique value already exists")
                }
                Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    tracing::debug!(detail = %detail, "Foreign key constraint violation");

                    conflict("The record references a missing record or is still referenced")
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

fn conflict(message: &str) -> Response {
    (
        StatusCode::CONFLICT,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
