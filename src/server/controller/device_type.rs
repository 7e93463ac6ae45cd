use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        device_type::{CreateDeviceTypeDto, DeviceTypeDto, UpdateDeviceTypeDto},
    },
    server::{error::Error, model::app::AppState, service::device_type::DeviceTypeService},
};

pub static DEVICE_TYPE_TAG: &str = "device-type";

/// List device types ordered by name
#[utoipa::path(
    get,
    path = "/api/device-types",
    tag = DEVICE_TYPE_TAG,
    responses(
        (status = 200, description = "All device types", body = Vec<DeviceTypeDto>),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_device_types(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let device_types = DeviceTypeService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(device_types)))
}

#[utoipa::path(
    post,
    path = "/api/device-types",
    tag = DEVICE_TYPE_TAG,
    request_body = CreateDeviceTypeDto,
    responses(
        (status = 201, description = "Device type created", body = DeviceTypeDto),
        (status = 400, description = "Blank name or invalid fleet counts", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_device_type(
    State(state): State<AppState>,
    Json(device_type): Json<CreateDeviceTypeDto>,
) -> Result<impl IntoResponse, Error> {
    let created = DeviceTypeService::new(&state.db).create(device_type).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/device-types/{id}",
    tag = DEVICE_TYPE_TAG,
    params(("id" = i32, Path, description = "Device type ID")),
    responses(
        (status = 200, description = "Device type", body = DeviceTypeDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Device type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_device_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let device_type = DeviceTypeService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(device_type)))
}

#[utoipa::path(
    put,
    path = "/api/device-types/{id}",
    tag = DEVICE_TYPE_TAG,
    params(("id" = i32, Path, description = "Device type ID")),
    request_body = UpdateDeviceTypeDto,
    responses(
        (status = 200, description = "Device type updated", body = DeviceTypeDto),
        (status = 400, description = "Blank name or invalid fleet counts", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Device type not found", body = ErrorDto),
        (status = 409, description = "Name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_device_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(device_type): Json<UpdateDeviceTypeDto>,
) -> Result<impl IntoResponse, Error> {
    let updated = DeviceTypeService::new(&state.db)
        .update(id, device_type)
        .await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// Delete a device type
///
/// Rejected with 409 while deployments still reference it.
#[utoipa::path(
    delete,
    path = "/api/device-types/{id}",
    tag = DEVICE_TYPE_TAG,
    params(("id" = i32, Path, description = "Device type ID")),
    responses(
        (status = 204, description = "Device type deleted"),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Device type not found", body = ErrorDto),
        (status = 409, description = "Device type is used by deployments", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_device_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    DeviceTypeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
