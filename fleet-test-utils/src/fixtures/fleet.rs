use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn fleet<'a>(&'a self) -> FleetFixtures<'a> {
        FleetFixtures { setup: self }
    }
}

pub struct FleetFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FleetFixtures<'a> {
    pub async fn insert_device_type(
        &self,
        name: &str,
        total_fleet: i32,
        under_repair: i32,
    ) -> Result<entity::device_type::Model, TestError> {
        Ok(
            entity::prelude::DeviceType::insert(entity::device_type::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                total_fleet: ActiveValue::Set(total_fleet),
                under_repair: ActiveValue::Set(under_repair),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_project(&self, name: &str) -> Result<entity::project::Model, TestError> {
        self.insert_project_with(name, "available", "")
            .await
    }

    pub async fn insert_project_with(
        &self,
        name: &str,
        status: &str,
        client: &str,
    ) -> Result<entity::project::Model, TestError> {
        Ok(
            entity::prelude::Project::insert(entity::project::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                name_en: ActiveValue::Set(Some(String::new())),
                client: ActiveValue::Set(Some(client.to_string())),
                status: ActiveValue::Set(Some(status.to_string())),
                entity: ActiveValue::Set(Some("AGJ".to_string())),
                notes: ActiveValue::Set(Some(String::new())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a deployment without weekly allocations.
    ///
    /// Dates are `YYYY-MM-DD` strings.
    pub async fn insert_deployment(
        &self,
        project_id: i32,
        device_type_id: i32,
        venue: &str,
        start_date: &str,
        end_date: &str,
        default_device_count: i32,
    ) -> Result<entity::deployment::Model, TestError> {
        Ok(
            entity::prelude::Deployment::insert(entity::deployment::ActiveModel {
                project_id: ActiveValue::Set(project_id),
                venue: ActiveValue::Set(venue.to_string()),
                location: ActiveValue::Set(Some(String::new())),
                start_date: ActiveValue::Set(start_date.to_string()),
                end_date: ActiveValue::Set(end_date.to_string()),
                device_type_id: ActiveValue::Set(device_type_id),
                default_device_count: ActiveValue::Set(default_device_count),
                app_type: ActiveValue::Set(Some(String::new())),
                notes: ActiveValue::Set(Some(String::new())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_allocation(
        &self,
        deployment_id: i32,
        week_start: &str,
        device_count: i32,
    ) -> Result<entity::weekly_allocation::Model, TestError> {
        Ok(
            entity::prelude::WeeklyAllocation::insert(entity::weekly_allocation::ActiveModel {
                deployment_id: ActiveValue::Set(deployment_id),
                week_start: ActiveValue::Set(week_start.to_string()),
                device_count: ActiveValue::Set(device_count),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
