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
        project::{CreateProjectDto, ProjectDto, UpdateProjectDto},
    },
    server::{
        controller::util::query::parse_statuses,
        error::Error,
        model::app::AppState,
        service::project::{ProjectFilter, ProjectService},
    },
};

pub static PROJECT_TAG: &str = "project";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ProjectListParams {
    /// Comma separated statuses (`confirmed,must_win` or symbols such as `◎,★`)
    pub status: Option<String>,
    /// Matched against name, English name, client, notes and deployment venues or locations
    pub search: Option<String>,
}

/// List projects ordered by name
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    params(ProjectListParams),
    responses(
        (status = 200, description = "Matching projects", body = Vec<ProjectDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> Result<impl IntoResponse, Error> {
    let filter = ProjectFilter {
        statuses: parse_statuses(params.status.as_deref())?,
        search: params.search,
    };

    let projects = ProjectService::new(&state.db).list(filter).await?;

    Ok((StatusCode::OK, Json(projects)))
}

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Project created", body = ProjectDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(project): Json<CreateProjectDto>,
) -> Result<impl IntoResponse, Error> {
    let created = ProjectService::new(&state.db).create(project).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project", body = ProjectDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let project = ProjectService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(project)))
}

/// Update the given fields of a project
#[utoipa::path(
    patch,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Project updated", body = ProjectDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<UpdateProjectDto>,
) -> Result<impl IntoResponse, Error> {
    let updated = ProjectService::new(&state.db).update(id, patch).await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// Delete a project along with its deployments and their allocations
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ProjectService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
