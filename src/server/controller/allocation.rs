use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        allocation::{
            AllocationCountDto, BulkAllocationUpdateDto, RegenerateAllocationsDto,
            UpdateAllocationDto, WeeklyAllocationDto,
        },
        api::ErrorDto,
    },
    server::{error::Error, model::app::AppState, service::allocation::AllocationService},
};

pub static ALLOCATION_TAG: &str = "allocation";

/// List the weekly allocations of a deployment ordered by week
#[utoipa::path(
    get,
    path = "/api/deployments/{id}/allocations",
    tag = ALLOCATION_TAG,
    params(("id" = i32, Path, description = "Deployment ID")),
    responses(
        (status = 200, description = "Weekly allocations", body = Vec<WeeklyAllocationDto>),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Deployment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_allocations(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let allocations = AllocationService::new(&state.db).list(id).await?;

    Ok((StatusCode::OK, Json(allocations)))
}

/// Save several allocation counts of a deployment at once
///
/// Either every count is saved or none is.
#[utoipa::path(
    put,
    path = "/api/deployments/{id}/allocations",
    tag = ALLOCATION_TAG,
    params(("id" = i32, Path, description = "Deployment ID")),
    request_body = Vec<AllocationCountDto>,
    responses(
        (status = 200, description = "Allocations after saving", body = Vec<WeeklyAllocationDto>),
        (status = 400, description = "Negative device count", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Deployment or allocation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_allocations(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(counts): Json<Vec<AllocationCountDto>>,
) -> Result<impl IntoResponse, Error> {
    let allocations = AllocationService::new(&state.db)
        .save_batch(id, counts)
        .await?;

    Ok((StatusCode::OK, Json(allocations)))
}

/// Set the device count of every week from a given Monday onwards
#[utoipa::path(
    post,
    path = "/api/deployments/{id}/allocations/bulk",
    tag = ALLOCATION_TAG,
    params(("id" = i32, Path, description = "Deployment ID")),
    request_body = BulkAllocationUpdateDto,
    responses(
        (status = 200, description = "Allocations after the update", body = Vec<WeeklyAllocationDto>),
        (status = 400, description = "Negative device count", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Deployment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_update_allocations(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(bulk): Json<BulkAllocationUpdateDto>,
) -> Result<impl IntoResponse, Error> {
    let allocations = AllocationService::new(&state.db)
        .bulk_update(id, bulk)
        .await?;

    Ok((StatusCode::OK, Json(allocations)))
}

/// Replace a deployment's allocations with one per week of its current dates
///
/// Send `{}` to use the deployment's default device count.
#[utoipa::path(
    post,
    path = "/api/deployments/{id}/allocations/regenerate",
    tag = ALLOCATION_TAG,
    params(("id" = i32, Path, description = "Deployment ID")),
    request_body = RegenerateAllocationsDto,
    responses(
        (status = 200, description = "Regenerated allocations", body = Vec<WeeklyAllocationDto>),
        (status = 400, description = "Negative device count", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Deployment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn regenerate_allocations(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(regenerate): Json<RegenerateAllocationsDto>,
) -> Result<impl IntoResponse, Error> {
    let allocations = AllocationService::new(&state.db)
        .regenerate(id, regenerate)
        .await?;

    Ok((StatusCode::OK, Json(allocations)))
}

#[utoipa::path(
    put,
    path = "/api/allocations/{id}",
    tag = ALLOCATION_TAG,
    params(("id" = i32, Path, description = "Weekly allocation ID")),
    request_body = UpdateAllocationDto,
    responses(
        (status = 200, description = "Allocation updated", body = WeeklyAllocationDto),
        (status = 400, description = "Negative device count", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Allocation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_allocation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(update): Json<UpdateAllocationDto>,
) -> Result<impl IntoResponse, Error> {
    let allocation = AllocationService::new(&state.db)
        .update(id, update.device_count)
        .await?;

    Ok((StatusCode::OK, Json(allocation)))
}
