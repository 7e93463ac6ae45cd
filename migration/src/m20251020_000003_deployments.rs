use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000001_device_types::DeviceTypes, m20251020_000002_projects::Projects,
};

static IDX_DEPLOYMENTS_PROJECT_ID: &str = "idx-deployments-project_id";
static IDX_DEPLOYMENTS_DEVICE_TYPE_ID: &str = "idx-deployments-device_type_id";
static FK_DEPLOYMENTS_PROJECT_ID: &str = "fk-deployments-project_id";
static FK_DEPLOYMENTS_DEVICE_TYPE_ID: &str = "fk-deployments-device_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Deployments::Table)
                    .if_not_exists()
                    .col(pk_auto(Deployments::Id))
                    .col(integer(Deployments::ProjectId))
                    .col(text(Deployments::Venue))
                    .col(text_null(Deployments::Location).default(""))
                    .col(text(Deployments::StartDate))
                    .col(text(Deployments::EndDate))
                    .col(integer(Deployments::DeviceTypeId))
                    .col(integer(Deployments::DefaultDeviceCount).default(0))
                    .col(text_null(Deployments::AppType).default(""))
                    .col(text_null(Deployments::Notes).default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DEPLOYMENTS_PROJECT_ID)
                            .from(Deployments::Table, Deployments::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    // No cascade: a device type cannot be deleted while deployments use it
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DEPLOYMENTS_DEVICE_TYPE_ID)
                            .from(Deployments::Table, Deployments::DeviceTypeId)
                            .to(DeviceTypes::Table, DeviceTypes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_DEPLOYMENTS_PROJECT_ID)
                    .table(Deployments::Table)
                    .col(Deployments::ProjectId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_DEPLOYMENTS_DEVICE_TYPE_ID)
                    .table(Deployments::Table)
                    .col(Deployments::DeviceTypeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DEPLOYMENTS_DEVICE_TYPE_ID)
                    .table(Deployments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DEPLOYMENTS_PROJECT_ID)
                    .table(Deployments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Deployments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Deployments {
    Table,
    Id,
    ProjectId,
    Venue,
    Location,
    StartDate,
    EndDate,
    DeviceTypeId,
    DefaultDeviceCount,
    AppType,
    Notes,
}
