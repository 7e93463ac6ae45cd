//! Data transfer objects shared by the HTTP API and its consumers.

pub mod allocation;
pub mod api;
pub mod auth;
pub mod deployment;
pub mod device_type;
pub mod fleet;
pub mod project;
pub mod timeline;
