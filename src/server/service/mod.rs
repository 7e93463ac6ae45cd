//! Business logic between controllers and repositories.
//!
//! Services validate input, run multi-step writes in transactions and convert database models
//! into DTOs. Read paths run through [`retry::RetryContext`] to ride out dropped connections.

pub mod allocation;
pub mod auth;
pub mod deployment;
pub mod device_type;
pub mod fleet;
pub mod project;
pub mod retry;
pub mod timeline;
pub mod validate;

#[cfg(test)]
mod tests;
