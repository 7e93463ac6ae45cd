//! Declarative test builder.
//!
//! Configuration methods are chained together and queued, then executed in order by the
//! final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{constant::TEST_HASH_COST, error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_fleet_tables: bool,

    // Database fixtures to insert
    device_types: Vec<(String, i32, i32)>, // (name, total_fleet, under_repair)
    projects: Vec<String>,

    // Dashboard logins
    users: Vec<(String, String)>, // (username, plain text password)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_fleet_tables: false,
            device_types: Vec::new(),
            projects: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Create the device_types, projects, deployments and weekly_allocations tables.
    pub fn with_fleet_tables(mut self) -> Self {
        self.include_fleet_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables, parents before children.
    ///
    /// ```no_run
    /// use fleet_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), fleet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(DeviceType)
    ///     .with_table(Project)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a device type during `build()`.
    pub fn with_device_type(
        mut self,
        name: impl Into<String>,
        total_fleet: i32,
        under_repair: i32,
    ) -> Self {
        self.device_types
            .push((name.into(), total_fleet, under_repair));
        self
    }

    /// Insert a project with default fields during `build()`.
    pub fn with_project(mut self, name: impl Into<String>) -> Self {
        self.projects.push(name.into());
        self
    }

    /// Register a dashboard login, the password is hashed during `build()`.
    pub fn with_login(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.push((username.into(), password.into()));
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (fleet tables if specified, then custom tables)
    /// 2. Inserts database fixtures (device types, projects)
    /// 3. Hashes the configured dashboard logins
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_fleet_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::DeviceType),
                schema.create_table_from_entity(entity::prelude::Project),
                schema.create_table_from_entity(entity::prelude::Deployment),
                schema.create_table_from_entity(entity::prelude::WeeklyAllocation),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (name, total_fleet, under_repair) in self.device_types {
            setup
                .fleet()
                .insert_device_type(&name, total_fleet, under_repair)
                .await?;
        }

        for name in self.projects {
            setup.fleet().insert_project(&name).await?;
        }

        // 3. Hash dashboard logins
        for (username, password) in self.users {
            let hash = bcrypt::hash(password, TEST_HASH_COST)?;
            setup.users.insert(username, hash);
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
