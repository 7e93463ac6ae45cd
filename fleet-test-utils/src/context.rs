//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes an
//! in-memory SQLite database, a session backed by a memory store, and the dashboard login
//! credentials configured for the test.

use std::{collections::HashMap, sync::Arc};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new().with_fleet_tables().build().await?;
///
/// let device_type = test.fleet().insert_device_type("iPad", 100, 0).await?;
/// let app_state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for testing login flows without an HTTP round trip
    pub session: Session,
    /// Username to bcrypt hash map of dashboard users
    pub users: HashMap<String, String>,
}

impl TestContext {
    /// Convert the database and user credentials into any type that can be constructed from them
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, HashMap<String, String>)>,
    {
        T::from((self.db.clone(), self.users.clone()))
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            users: HashMap::new(),
        })
    }

    /// Execute CREATE TABLE statements in order.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
