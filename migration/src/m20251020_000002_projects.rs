use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_auto(Projects::Id))
                    .col(text(Projects::Name))
                    .col(text_null(Projects::NameEn).default(""))
                    .col(text_null(Projects::Client).default(""))
                    .col(text_null(Projects::Status).default("available"))
                    .col(text_null(Projects::Entity).default("AGJ"))
                    .col(text_null(Projects::Notes).default(""))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Projects {
    Table,
    Id,
    Name,
    NameEn,
    Client,
    Status,
    Entity,
    Notes,
}
