use chrono::NaiveDate;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::util::time::to_db_date;

pub struct AllocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AllocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one allocation per week, each with `device_count` devices
    pub async fn create_many(
        &self,
        deployment_id: i32,
        weeks: &[NaiveDate],
        device_count: i32,
    ) -> Result<(), DbErr> {
        if weeks.is_empty() {
            return Ok(());
        }

        let allocations = weeks
            .iter()
            .map(|week_start| entity::weekly_allocation::ActiveModel {
                deployment_id: ActiveValue::Set(deployment_id),
                week_start: ActiveValue::Set(to_db_date(*week_start)),
                device_count: ActiveValue::Set(device_count),
                ..Default::default()
            })
            .collect::<Vec<_>>();

        entity::prelude::WeeklyAllocation::insert_many(allocations)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::weekly_allocation::Model>, DbErr> {
        entity::prelude::WeeklyAllocation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Allocations of a deployment ordered by week
    pub async fn get_by_deployment_id(
        &self,
        deployment_id: i32,
    ) -> Result<Vec<entity::weekly_allocation::Model>, DbErr> {
        entity::prelude::WeeklyAllocation::find()
            .filter(entity::weekly_allocation::Column::DeploymentId.eq(deployment_id))
            .order_by_asc(entity::weekly_allocation::Column::WeekStart)
            .order_by_asc(entity::weekly_allocation::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the device count of one allocation, `None` if it does not exist
    pub async fn update_count(
        &self,
        id: i32,
        device_count: i32,
    ) -> Result<Option<entity::weekly_allocation::Model>, DbErr> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut allocation: entity::weekly_allocation::ActiveModel = existing.into();
        allocation.device_count = ActiveValue::Set(device_count);

        Ok(Some(allocation.update(self.db).await?))
    }

    /// Sets the device count of every week of a deployment starting on or after `from`
    ///
    /// Returns the number of allocations updated.
    pub async fn update_count_from(
        &self,
        deployment_id: i32,
        from: NaiveDate,
        device_count: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::WeeklyAllocation::update_many()
            .col_expr(
                entity::weekly_allocation::Column::DeviceCount,
                Expr::value(device_count),
            )
            .filter(entity::weekly_allocation::Column::DeploymentId.eq(deployment_id))
            .filter(entity::weekly_allocation::Column::WeekStart.gte(to_db_date(from)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_deployment_id(&self, deployment_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::WeeklyAllocation::delete_many()
            .filter(entity::weekly_allocation::Column::DeploymentId.eq(deployment_id))
            .exec(self.db)
            .await
    }
}
