use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::allocation::{
        AllocationCountDto, BulkAllocationUpdateDto, RegenerateAllocationsDto,
        WeeklyAllocationDto,
    },
    server::{
        data::{allocation::AllocationRepository, deployment::DeploymentRepository},
        error::{fleet::FleetError, Error},
        model::db::{DeploymentModel, WeeklyAllocationModel},
        service::validate,
        util::time::{from_db_date, week_mondays},
    },
};

impl TryFrom<WeeklyAllocationModel> for WeeklyAllocationDto {
    type Error = Error;

    fn try_from(model: WeeklyAllocationModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            deployment_id: model.deployment_id,
            week_start: from_db_date(&model.week_start)?,
            device_count: model.device_count,
        })
    }
}

pub struct AllocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AllocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Allocations of a deployment ordered by week
    pub async fn list(&self, deployment_id: i32) -> Result<Vec<WeeklyAllocationDto>, Error> {
        require_deployment(self.db, deployment_id).await?;

        list_allocations(self.db, deployment_id).await
    }

    pub async fn update(&self, id: i32, device_count: i32) -> Result<WeeklyAllocationDto, Error> {
        validate::non_negative("device_count", device_count)?;

        let updated = AllocationRepository::new(self.db)
            .update_count(id, device_count)
            .await?
            .ok_or(FleetError::AllocationNotFound(id))?;

        updated.try_into()
    }

    /// Saves several allocation counts of one deployment in a single transaction
    ///
    /// Nothing is written if any id is unknown or belongs to another deployment.
    pub async fn save_batch(
        &self,
        deployment_id: i32,
        counts: Vec<AllocationCountDto>,
    ) -> Result<Vec<WeeklyAllocationDto>, Error> {
        for row in &counts {
            validate::non_negative("device_count", row.device_count)?;
        }

        let txn = self.db.begin().await?;
        require_deployment(&txn, deployment_id).await?;

        let repo = AllocationRepository::new(&txn);
        for row in &counts {
            match repo.get_by_id(row.id).await? {
                Some(allocation) if allocation.deployment_id == deployment_id => {
                    repo.update_count(row.id, row.device_count).await?;
                }
                _ => return Err(FleetError::AllocationNotFound(row.id).into()),
            }
        }

        txn.commit().await?;

        tracing::debug!(deployment_id, rows = counts.len(), "Saved allocation batch");

        list_allocations(self.db, deployment_id).await
    }

    /// Sets the device count of every week starting on or after `from`
    pub async fn bulk_update(
        &self,
        deployment_id: i32,
        bulk: BulkAllocationUpdateDto,
    ) -> Result<Vec<WeeklyAllocationDto>, Error> {
        validate::non_negative("device_count", bulk.device_count)?;
        require_deployment(self.db, deployment_id).await?;

        let updated = AllocationRepository::new(self.db)
            .update_count_from(deployment_id, bulk.from, bulk.device_count)
            .await?;

        tracing::debug!(deployment_id, updated, from = %bulk.from, "Bulk updated allocations");

        list_allocations(self.db, deployment_id).await
    }

    /// Replaces all allocations with one per week of the deployment's current dates
    pub async fn regenerate(
        &self,
        deployment_id: i32,
        regenerate: RegenerateAllocationsDto,
    ) -> Result<Vec<WeeklyAllocationDto>, Error> {
        let txn = self.db.begin().await?;
        let deployment = require_deployment(&txn, deployment_id).await?;

        let device_count = regenerate
            .device_count
            .unwrap_or(deployment.default_device_count);
        validate::non_negative("device_count", device_count)?;

        let weeks = week_mondays(
            from_db_date(&deployment.start_date)?,
            from_db_date(&deployment.end_date)?,
        );

        let repo = AllocationRepository::new(&txn);
        repo.delete_by_deployment_id(deployment_id).await?;
        repo.create_many(deployment_id, &weeks, device_count)
            .await?;

        txn.commit().await?;

        tracing::info!(deployment_id, weeks = weeks.len(), "Regenerated allocations");

        list_allocations(self.db, deployment_id).await
    }
}

async fn require_deployment<C: ConnectionTrait>(
    db: &C,
    deployment_id: i32,
) -> Result<DeploymentModel, Error> {
    Ok(DeploymentRepository::new(db)
        .get_by_id(deployment_id)
        .await?
        .ok_or(FleetError::DeploymentNotFound(deployment_id))?)
}

async fn list_allocations(
    db: &DatabaseConnection,
    deployment_id: i32,
) -> Result<Vec<WeeklyAllocationDto>, Error> {
    AllocationRepository::new(db)
        .get_by_deployment_id(deployment_id)
        .await?
        .into_iter()
        .map(WeeklyAllocationDto::try_from)
        .collect()
}
