use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        deployment::{CreateDeploymentDto, DeploymentDto, UpdateDeploymentDto},
    },
    server::{error::Error, model::app::AppState, service::deployment::DeploymentService},
};

pub static DEPLOYMENT_TAG: &str = "deployment";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DeploymentListParams {
    /// Only list deployments of this project
    pub project_id: Option<i32>,
}

/// List deployments ordered by start date
#[utoipa::path(
    get,
    path = "/api/deployments",
    tag = DEPLOYMENT_TAG,
    params(DeploymentListParams),
    responses(
        (status = 200, description = "Deployments with project and device type names", body = Vec<DeploymentDto>),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_deployments(
    State(state): State<AppState>,
    Query(params): Query<DeploymentListParams>,
) -> Result<impl IntoResponse, Error> {
    let deployments = DeploymentService::new(&state.db)
        .list(params.project_id)
        .await?;

    Ok((StatusCode::OK, Json(deployments)))
}

/// Create a deployment and one weekly allocation per week it spans
///
/// Each allocation starts at the deployment's default device count.
#[utoipa::path(
    post,
    path = "/api/deployments",
    tag = DEPLOYMENT_TAG,
    request_body = CreateDeploymentDto,
    responses(
        (status = 201, description = "Deployment created", body = DeploymentDto),
        (status = 400, description = "Blank venue, inverted dates or negative count", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Project or device type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_deployment(
    State(state): State<AppState>,
    Json(deployment): Json<CreateDeploymentDto>,
) -> Result<impl IntoResponse, Error> {
    let created = DeploymentService::new(&state.db).create(deployment).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/deployments/{id}",
    tag = DEPLOYMENT_TAG,
    params(("id" = i32, Path, description = "Deployment ID")),
    responses(
        (status = 200, description = "Deployment", body = DeploymentDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Deployment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_deployment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let deployment = DeploymentService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(deployment)))
}

/// Update the given fields of a deployment
///
/// Allocations are kept as they are, regenerate them after changing dates.
#[utoipa::path(
    patch,
    path = "/api/deployments/{id}",
    tag = DEPLOYMENT_TAG,
    params(("id" = i32, Path, description = "Deployment ID")),
    request_body = UpdateDeploymentDto,
    responses(
        (status = 200, description = "Deployment updated", body = DeploymentDto),
        (status = 400, description = "Blank venue, inverted dates or negative count", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Deployment or device type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_deployment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<UpdateDeploymentDto>,
) -> Result<impl IntoResponse, Error> {
    let updated = DeploymentService::new(&state.db).update(id, patch).await?;

    Ok((StatusCode::OK, Json(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/deployments/{id}",
    tag = DEPLOYMENT_TAG,
    params(("id" = i32, Path, description = "Deployment ID")),
    responses(
        (status = 204, description = "Deployment and its allocations deleted"),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Deployment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_deployment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    DeploymentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
