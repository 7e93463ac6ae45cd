use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("Device type ID {0} not found")]
    DeviceTypeNotFound(i32),
    #[error("Project ID {0} not found")]
    ProjectNotFound(i32),
    #[error("Deployment ID {0} not found")]
    DeploymentNotFound(i32),
    #[error("Weekly allocation ID {0} not found")]
    AllocationNotFound(i32),
    #[error("{0}")]
    Validation(String),
}

impl FleetError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl IntoResponse for FleetError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::NOT_FOUND,
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
