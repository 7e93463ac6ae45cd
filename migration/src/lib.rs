pub use sea_orm_migration::prelude::*;

mod m20251020_000001_device_types;
mod m20251020_000002_projects;
mod m20251020_000003_deployments;
mod m20251020_000004_weekly_allocations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_device_types::Migration),
            Box::new(m20251020_000002_projects::Migration),
            Box::new(m20251020_000003_deployments::Migration),
            Box::new(m20251020_000004_weekly_allocations::Migration),
        ]
    }
}
