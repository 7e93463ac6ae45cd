//! Device fleet deployment planning backend.
//!
//! [`model`] holds the JSON DTOs exchanged over the API, [`server`] everything that runs
//! behind it.

pub mod model;
pub mod server;
