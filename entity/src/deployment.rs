use sea_orm::entity::prelude::*;

/// A placement of one device type at a venue for a date range.
///
/// `start_date` and `end_date` are ISO-8601 (`YYYY-MM-DD`) text.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "deployments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project_id: i32,
    #[sea_orm(column_type = "Text")]
    pub venue: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub start_date: String,
    #[sea_orm(column_type = "Text")]
    pub end_date: String,
    pub device_type_id: i32,
    pub default_device_count: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub app_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id",
        on_delete = "Cascade"
    )]
    Project,
    #[sea_orm(
        belongs_to = "super::device_type::Entity",
        from = "Column::DeviceTypeId",
        to = "super::device_type::Column::Id"
    )]
    DeviceType,
    #[sea_orm(has_many = "super::weekly_allocation::Entity")]
    WeeklyAllocation,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::device_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeviceType.def()
    }
}

impl Related<super::weekly_allocation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeeklyAllocation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
