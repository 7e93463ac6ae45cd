//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same methods run against a
//! pooled connection or inside a transaction.

pub mod allocation;
pub mod deployment;
pub mod device_type;
pub mod project;
pub mod usage;

#[cfg(test)]
mod tests;
