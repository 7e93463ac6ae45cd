//! Server-side models: application state, session data and database model aliases.

pub mod app;
pub mod db;
pub mod session;
