use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Devices of one type in use during one week.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FleetUsageDto {
    pub week_start: NaiveDate,
    pub device_type_id: i32,
    pub device_type_name: String,
    pub total_fleet: i32,
    pub under_repair: i32,
    pub total_in_use: i64,
    /// `total_fleet - under_repair - total_in_use`, negative on shortage
    pub available: i64,
}

impl FleetUsageDto {
    /// Devices that can be deployed at all, ignoring allocations
    pub fn capacity(&self) -> i64 {
        i64::from(self.total_fleet) - i64::from(self.under_repair)
    }

    pub fn level(&self) -> UsageLevel {
        UsageLevel::classify(self.available, self.total_fleet)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UsageLevel {
    /// More devices allocated than available
    Shortage,
    /// Less than a tenth of the fleet left
    Low,
    Ok,
}

impl UsageLevel {
    pub fn classify(available: i64, total_fleet: i32) -> Self {
        if available < 0 {
            Self::Shortage
        } else if available * 10 < i64::from(total_fleet) {
            Self::Low
        } else {
            Self::Ok
        }
    }
}

/// Current-week status of one device type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeviceTypeSummaryDto {
    pub device_type_id: i32,
    pub name: String,
    pub total_fleet: i32,
    pub under_repair: i32,
    pub in_use: i64,
    pub available: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShortageAlertDto {
    pub week_start: NaiveDate,
    pub device_type_id: i32,
    pub device_type_name: String,
    pub needed: i64,
    pub capacity: i64,
    pub deficit: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LowStockWarningDto {
    pub week_start: NaiveDate,
    pub device_type_id: i32,
    pub device_type_name: String,
    pub remaining: i64,
    pub in_use: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DashboardDto {
    /// Monday of the current week
    pub week_start: NaiveDate,
    pub current_week: Vec<DeviceTypeSummaryDto>,
    pub shortages: Vec<ShortageAlertDto>,
    pub warnings: Vec<LowStockWarningDto>,
    pub upcoming: Vec<FleetUsageDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ForecastWeekDto {
    pub week_start: NaiveDate,
    pub total_in_use: i64,
    pub total_fleet: i32,
    pub under_repair: i32,
    pub available: i64,
    pub level: UsageLevel,
}
