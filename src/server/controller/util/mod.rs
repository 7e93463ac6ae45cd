//! Helpers shared by controllers: the login guard and query string parsing.

pub mod query;
pub mod session;
