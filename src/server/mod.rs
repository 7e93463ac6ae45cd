//! Server application core modules.
//!
//! This module contains the fleet scheduler backend: configuration, HTTP routing and
//! controllers, the service layer computing usage, alerts and timelines, and the sea-orm
//! repositories over device types, projects, deployments and weekly allocations.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
