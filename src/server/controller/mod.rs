//! HTTP controller endpoints for the fleet scheduler API.
//!
//! Handlers extract path, query and JSON input, call into the service layer and map the
//! results to status codes. Every handler is annotated with `#[utoipa::path]` so the router
//! can collect it into the OpenAPI document.

pub mod allocation;
pub mod auth;
pub mod deployment;
pub mod device_type;
pub mod fleet;
pub mod project;
pub mod util;
