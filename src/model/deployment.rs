use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::project::ProjectStatus;

/// A deployment joined with its project and device type names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeploymentDto {
    pub id: i32,
    pub project_id: i32,
    pub project_name: String,
    pub project_status: ProjectStatus,
    pub client: String,
    pub venue: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub device_type_id: i32,
    pub device_type_name: String,
    pub default_device_count: i32,
    pub app_type: String,
    pub notes: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateDeploymentDto {
    pub project_id: i32,
    pub venue: String,
    #[serde(default)]
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub device_type_id: i32,
    pub default_device_count: i32,
    /// `App`, `Kikubi`, `WebApp` or empty
    #[serde(default)]
    pub app_type: String,
    #[serde(default)]
    pub notes: String,
}

/// Partial update, absent fields are left unchanged.
///
/// Weekly allocations are not touched; regenerate them explicitly after changing dates.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateDeploymentDto {
    pub venue: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub device_type_id: Option<i32>,
    pub default_device_count: Option<i32>,
    pub app_type: Option<String>,
    pub notes: Option<String>,
}
