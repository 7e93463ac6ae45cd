pub use super::deployment::Entity as Deployment;
pub use super::device_type::Entity as DeviceType;
pub use super::project::Entity as Project;
pub use super::weekly_allocation::Entity as WeeklyAllocation;
