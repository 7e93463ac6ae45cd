//! Database model type aliases.

/// Type alias for a device type record.
///
/// `name` is unique. `under_repair` devices cannot be allocated.
pub type DeviceTypeModel = entity::device_type::Model;

/// Type alias for a project record.
///
/// Every column except `name` is nullable, read `None` as the column default.
pub type ProjectModel = entity::project::Model;

/// Type alias for a deployment record, dates are `YYYY-MM-DD` text.
pub type DeploymentModel = entity::deployment::Model;

/// Type alias for a weekly allocation record, `week_start` is the Monday of the week.
pub type WeeklyAllocationModel = entity::weekly_allocation::Model;

use crate::model::project::ProjectStatus;

impl ProjectStatus {
    /// Reads a stored `projects.status` value.
    ///
    /// Names and dashboard symbols are both accepted. Unset or unknown text reads as the
    /// default status so a single odd row never blocks listing projects.
    pub fn from_column(value: Option<&str>) -> Self {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Self::default();
        };

        value.parse::<Self>().unwrap_or_else(|_| {
            tracing::warn!(status = %value, "Unknown stored project status, reading as default");
            Self::default()
        })
    }
}
