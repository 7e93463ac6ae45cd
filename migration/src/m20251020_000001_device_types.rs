use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeviceTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(DeviceTypes::Id))
                    .col(text_uniq(DeviceTypes::Name))
                    .col(integer(DeviceTypes::TotalFleet).default(0))
                    .col(integer(DeviceTypes::UnderRepair).default(0))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeviceTypes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DeviceTypes {
    Table,
    Id,
    Name,
    TotalFleet,
    UnderRepair,
}
