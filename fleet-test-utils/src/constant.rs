//! Credentials used by tests that log in to the dashboard.
//!
//! These are not real credentials.

pub static TEST_USERNAME: &str = "planner";

pub static TEST_PASSWORD: &str = "correct horse battery staple";

/// Lowest cost bcrypt accepts, keeps password hashing fast in tests
pub const TEST_HASH_COST: u32 = 4;
