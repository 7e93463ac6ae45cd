use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeviceTypeDto {
    pub id: i32,
    pub name: String,
    pub total_fleet: i32,
    pub under_repair: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateDeviceTypeDto {
    pub name: String,
    pub total_fleet: i32,
    #[serde(default)]
    pub under_repair: i32,
}

/// Replaces all editable fields of a device type
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateDeviceTypeDto {
    pub name: String,
    pub total_fleet: i32,
    pub under_repair: i32,
}
