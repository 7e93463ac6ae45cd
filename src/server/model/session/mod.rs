//! Session data models.
//!
//! Type-safe wrappers for data stored in the tower-sessions session.

pub mod user;
