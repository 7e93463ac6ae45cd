use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        deployment::DeploymentDto,
        fleet::{DashboardDto, DeviceTypeSummaryDto, FleetUsageDto, ForecastWeekDto},
        timeline::{TimelineDto, TimelinePeriod},
    },
    server::{
        controller::util::query::parse_statuses,
        error::Error,
        model::app::AppState,
        service::{
            deployment::DeploymentService,
            fleet::FleetService,
            timeline::{TimelineQuery, TimelineService},
        },
        util::time::today,
    },
};

pub static FLEET_TAG: &str = "fleet";

#[derive(Debug, Deserialize, IntoParams)]
pub struct UsageParams {
    /// First week to include, weeks are matched by their Monday
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub device_type_id: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ForecastParams {
    pub device_type_id: i32,
    /// Weeks ahead, 4 to 52, defaults to 12
    pub weeks: Option<u32>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TimelineParams {
    /// `3m`, `6m` (default), `12m` or `custom`
    #[param(inline)]
    pub period: Option<TimelinePeriod>,
    /// Start of a custom range, defaults to today
    pub start: Option<NaiveDate>,
    /// End of a custom range, defaults to 180 days after start
    pub end: Option<NaiveDate>,
    pub device_type_id: Option<i32>,
    /// Comma separated project statuses
    pub status: Option<String>,
    /// Matched against project name and venue
    pub search: Option<String>,
}

/// Weekly usage per device type
///
/// Only weeks with allocations are returned.
#[utoipa::path(
    get,
    path = "/api/fleet/usage",
    tag = FLEET_TAG,
    params(UsageParams),
    responses(
        (status = 200, description = "Usage ordered by week and device type", body = Vec<FleetUsageDto>),
        (status = 400, description = "End before start", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_usage(
    State(state): State<AppState>,
    Query(params): Query<UsageParams>,
) -> Result<impl IntoResponse, Error> {
    let usage = FleetService::new(&state.db)
        .usage(params.start, params.end, params.device_type_id)
        .await?;

    Ok((StatusCode::OK, Json(usage)))
}

/// In use and available devices of every device type this week
#[utoipa::path(
    get,
    path = "/api/fleet/current-week",
    tag = FLEET_TAG,
    responses(
        (status = 200, description = "Current week status", body = Vec<DeviceTypeSummaryDto>),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_week(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let summary = FleetService::new(&state.db).current_week(today()).await?;

    Ok((StatusCode::OK, Json(summary)))
}

#[utoipa::path(
    get,
    path = "/api/fleet/forecast",
    tag = FLEET_TAG,
    params(ForecastParams),
    responses(
        (status = 200, description = "Weekly forecast for the device type", body = Vec<ForecastWeekDto>),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Device type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_forecast(
    State(state): State<AppState>,
    Query(params): Query<ForecastParams>,
) -> Result<impl IntoResponse, Error> {
    let forecast = FleetService::new(&state.db)
        .forecast(params.device_type_id, params.weeks, today())
        .await?;

    Ok((StatusCode::OK, Json(forecast)))
}

/// Deployments running today
#[utoipa::path(
    get,
    path = "/api/fleet/active",
    tag = FLEET_TAG,
    responses(
        (status = 200, description = "Active deployments", body = Vec<DeploymentDto>),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_deployments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let deployments = DeploymentService::new(&state.db).active(today()).await?;

    Ok((StatusCode::OK, Json(deployments)))
}

/// Current week status, shortage and low stock alerts, and usage for the next weeks
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = FLEET_TAG,
    responses(
        (status = 200, description = "Dashboard data", body = DashboardDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let dashboard = FleetService::new(&state.db).dashboard(today()).await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

/// Deployments aggregated per project and device type, with weekly capacity series
#[utoipa::path(
    get,
    path = "/api/timeline",
    tag = FLEET_TAG,
    params(TimelineParams),
    responses(
        (status = 200, description = "Timeline rows and capacity", body = TimelineDto),
        (status = 400, description = "Unknown status or end before start", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_timeline(
    State(state): State<AppState>,
    Query(params): Query<TimelineParams>,
) -> Result<impl IntoResponse, Error> {
    let query = TimelineQuery {
        period: params.period.unwrap_or_default(),
        start: params.start,
        end: params.end,
        device_type_id: params.device_type_id,
        statuses: parse_statuses(params.status.as_deref())?,
        search: params.search,
    };

    let timeline = TimelineService::new(&state.db)
        .timeline(query, today())
        .await?;

    Ok((StatusCode::OK, Json(timeline)))
}
