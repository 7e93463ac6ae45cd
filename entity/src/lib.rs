//! SeaORM entity definitions for the fleet scheduler schema.

pub mod prelude;

pub mod deployment;
pub mod device_type;
pub mod project;
pub mod weekly_allocation;
