use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct WeeklyAllocationDto {
    pub id: i32,
    pub deployment_id: i32,
    /// Monday of the allocated week
    pub week_start: NaiveDate,
    pub device_count: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateAllocationDto {
    pub device_count: i32,
}

/// One row of a batch allocation save
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AllocationCountDto {
    pub id: i32,
    pub device_count: i32,
}

/// Sets the device count of every week starting on or after `from`
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BulkAllocationUpdateDto {
    pub device_count: i32,
    pub from: NaiveDate,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegenerateAllocationsDto {
    /// Count for every regenerated week, defaults to the deployment's default device count
    pub device_count: Option<i32>,
}
