use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000003_deployments::Deployments;

static IDX_WEEKLY_ALLOCATIONS_DEPLOYMENT_ID: &str = "idx-weekly_allocations-deployment_id";
static IDX_WEEKLY_ALLOCATIONS_WEEK_START: &str = "idx-weekly_allocations-week_start";
static FK_WEEKLY_ALLOCATIONS_DEPLOYMENT_ID: &str = "fk-weekly_allocations-deployment_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique constraint on (deployment_id, week_start)
        manager
            .create_table(
                Table::create()
                    .table(WeeklyAllocations::Table)
                    .if_not_exists()
                    .col(pk_auto(WeeklyAllocations::Id))
                    .col(integer(WeeklyAllocations::DeploymentId))
                    .col(text(WeeklyAllocations::WeekStart))
                    .col(integer(WeeklyAllocations::DeviceCount).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_WEEKLY_ALLOCATIONS_DEPLOYMENT_ID)
                            .from(WeeklyAllocations::Table, WeeklyAllocations::DeploymentId)
                            .to(Deployments::Table, Deployments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_WEEKLY_ALLOCATIONS_DEPLOYMENT_ID)
                    .table(WeeklyAllocations::Table)
                    .col(WeeklyAllocations::DeploymentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_WEEKLY_ALLOCATIONS_WEEK_START)
                    .table(WeeklyAllocations::Table)
                    .col(WeeklyAllocations::WeekStart)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WEEKLY_ALLOCATIONS_WEEK_START)
                    .table(WeeklyAllocations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WEEKLY_ALLOCATIONS_DEPLOYMENT_ID)
                    .table(WeeklyAllocations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WeeklyAllocations::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WeeklyAllocations {
    Table,
    Id,
    DeploymentId,
    WeekStart,
    DeviceCount,
}
