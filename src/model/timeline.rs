use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{deployment::DeploymentDto, project::ProjectStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum TimelinePeriod {
    #[serde(rename = "3m")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "12m")]
    TwelveMonths,
    #[serde(rename = "custom")]
    Custom,
}

impl TimelinePeriod {
    /// Length of the period counted from today, `None` for custom ranges
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::ThreeMonths => Some(90),
            Self::SixMonths => Some(180),
            Self::TwelveMonths => Some(365),
            Self::Custom => None,
        }
    }
}

/// Deployments of one project and device type merged into a single bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TimelineRowDto {
    pub project_id: i32,
    pub project_name: String,
    pub device_type_id: i32,
    pub device_type_name: String,
    pub status: ProjectStatus,
    pub client: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_count: i32,
    pub deployments: Vec<DeploymentDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CapacityPointDto {
    pub week_start: NaiveDate,
    pub in_use: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CapacitySeriesDto {
    pub device_type_id: i32,
    pub device_type_name: String,
    /// `total_fleet - under_repair`
    pub capacity: i64,
    pub points: Vec<CapacityPointDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TimelineDto {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub rows: Vec<TimelineRowDto>,
    pub capacity: Vec<CapacitySeriesDto>,
}
