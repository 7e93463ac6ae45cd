use sea_orm::{
    sea_query::JoinType, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, RelationTrait,
};

/// Devices of one type allocated during one week.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct FleetUsageRow {
    pub week_start: String,
    pub device_type_id: i32,
    pub device_type_name: String,
    pub total_fleet: i32,
    pub under_repair: i32,
    pub total_in_use: i64,
}

pub struct UsageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UsageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Sums allocations per week and device type for weeks starting within `start..=end`
    ///
    /// Weeks without any allocation for a device type produce no row. Ordered by week, then
    /// device type name.
    pub async fn usage_by_week(
        &self,
        start: &str,
        end: &str,
        device_type_id: Option<i32>,
    ) -> Result<Vec<FleetUsageRow>, DbErr> {
        entity::prelude::WeeklyAllocation::find()
            .select_only()
            .column(entity::weekly_allocation::Column::WeekStart)
            .column_as(entity::device_type::Column::Id, "device_type_id")
            .column_as(entity::device_type::Column::Name, "device_type_name")
            .column(entity::device_type::Column::TotalFleet)
            .column(entity::device_type::Column::UnderRepair)
            .column_as(
                entity::weekly_allocation::Column::DeviceCount.sum(),
                "total_in_use",
            )
            .join(
                JoinType::InnerJoin,
                entity::weekly_allocation::Relation::Deployment.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::deployment::Relation::DeviceType.def(),
            )
            .filter(entity::weekly_allocation::Column::WeekStart.gte(start))
            .filter(entity::weekly_allocation::Column::WeekStart.lte(end))
            .apply_if(device_type_id, |query, id| {
                query.filter(entity::device_type::Column::Id.eq(id))
            })
            .group_by(entity::weekly_allocation::Column::WeekStart)
            .group_by(entity::device_type::Column::Id)
            .group_by(entity::device_type::Column::Name)
            .group_by(entity::device_type::Column::TotalFleet)
            .group_by(entity::device_type::Column::UnderRepair)
            .order_by_asc(entity::weekly_allocation::Column::WeekStart)
            .order_by_asc(entity::device_type::Column::Name)
            .into_model::<FleetUsageRow>()
            .all(self.db)
            .await
    }
}
