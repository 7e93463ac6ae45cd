//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, and the returned responses are
//! checked for their status codes and JSON bodies.

mod allocation;
mod auth;
mod deployment;
mod device_type;
mod fleet;
mod project;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use fleet_test_utils::prelude::*;

use crate::util::{json_body, TestContextExt};
