use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        deployment::{CreateDeploymentDto, DeploymentDto, UpdateDeploymentDto},
        project::ProjectStatus,
    },
    server::{
        data::{
            allocation::AllocationRepository,
            deployment::{DeploymentDetail, DeploymentRepository},
            device_type::DeviceTypeRepository,
            project::ProjectRepository,
        },
        error::{fleet::FleetError, Error},
        service::{retry::RetryContext, validate},
        util::time::{from_db_date, to_db_date, week_mondays},
    },
};

impl TryFrom<DeploymentDetail> for DeploymentDto {
    type Error = Error;

    fn try_from(detail: DeploymentDetail) -> Result<Self, Self::Error> {
        Ok(Self {
            id: detail.id,
            project_id: detail.project_id,
            project_name: detail.project_name,
            project_status: ProjectStatus::from_column(detail.project_status.as_deref()),
            client: detail.project_client.unwrap_or_default(),
            venue: detail.venue,
            location: detail.location.unwrap_or_default(),
            start_date: from_db_date(&detail.start_date)?,
            end_date: from_db_date(&detail.end_date)?,
            device_type_id: detail.device_type_id,
            device_type_name: detail.device_type_name,
            default_device_count: detail.default_device_count,
            app_type: detail.app_type.unwrap_or_default(),
            notes: detail.notes.unwrap_or_default(),
        })
    }
}

pub(crate) fn to_dtos(details: Vec<DeploymentDetail>) -> Result<Vec<DeploymentDto>, Error> {
    details.into_iter().map(DeploymentDto::try_from).collect()
}

pub struct DeploymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeploymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deployments ordered by start date, optionally limited to one project
    pub async fn list(&self, project_id: Option<i32>) -> Result<Vec<DeploymentDto>, Error> {
        let db = self.db;
        let details = RetryContext::new()
            .execute_with_retry("deployment list", move || async move {
                DeploymentRepository::new(db)
                    .get_details(project_id)
                    .await
                    .map_err(Error::from)
            })
            .await?;

        to_dtos(details)
    }

    pub async fn get(&self, id: i32) -> Result<DeploymentDto, Error> {
        let db = self.db;
        let detail = RetryContext::new()
            .execute_with_retry("deployment lookup", move || async move {
                DeploymentRepository::new(db)
                    .get_detail_by_id(id)
                    .await
                    .map_err(Error::from)
            })
            .await?
            .ok_or(FleetError::DeploymentNotFound(id))?;

        detail.try_into()
    }

    /// Deployments running on `today`
    pub async fn active(&self, today: NaiveDate) -> Result<Vec<DeploymentDto>, Error> {
        let day = to_db_date(today);
        let details = DeploymentRepository::new(self.db)
            .get_details_overlapping(&day, &day)
            .await?;

        to_dtos(details)
    }

    /// Creates a deployment and one allocation per week it covers
    ///
    /// Each allocation starts at the deployment's default device count. The deployment and its
    /// allocations are written in one transaction.
    pub async fn create(&self, mut deployment: CreateDeploymentDto) -> Result<DeploymentDto, Error> {
        deployment.venue = validate::required_text("venue", &deployment.venue)?;
        validate::date_range(deployment.start_date, deployment.end_date)?;
        validate::non_negative("default_device_count", deployment.default_device_count)?;

        let weeks = week_mondays(deployment.start_date, deployment.end_date);
        let device_count = deployment.default_device_count;

        let txn = self.db.begin().await?;

        if ProjectRepository::new(&txn)
            .get_by_id(deployment.project_id)
            .await?
            .is_none()
        {
            return Err(FleetError::ProjectNotFound(deployment.project_id).into());
        }
        if DeviceTypeRepository::new(&txn)
            .get_by_id(deployment.device_type_id)
            .await?
            .is_none()
        {
            return Err(FleetError::DeviceTypeNotFound(deployment.device_type_id).into());
        }

        let created = DeploymentRepository::new(&txn).create(deployment).await?;
        AllocationRepository::new(&txn)
            .create_many(created.id, &weeks, device_count)
            .await?;

        txn.commit().await?;

        tracing::info!(
            id = created.id,
            project_id = created.project_id,
            weeks = weeks.len(),
            "Created deployment"
        );

        self.get(created.id).await
    }

    /// Applies a partial update
    ///
    /// Existing weekly allocations are kept as they are, regenerate them to follow new dates.
    pub async fn update(&self, id: i32, mut patch: UpdateDeploymentDto) -> Result<DeploymentDto, Error> {
        let repo = DeploymentRepository::new(self.db);
        let existing = repo
            .get_by_id(id)
            .await?
            .ok_or(FleetError::DeploymentNotFound(id))?;

        if let Some(venue) = patch.venue.as_deref() {
            patch.venue = Some(validate::required_text("venue", venue)?);
        }
        if let Some(count) = patch.default_device_count {
            validate::non_negative("default_device_count", count)?;
        }

        let start = match patch.start_date {
            Some(start) => start,
            None => from_db_date(&existing.start_date)?,
        };
        let end = match patch.end_date {
            Some(end) => end,
            None => from_db_date(&existing.end_date)?,
        };
        validate::date_range(start, end)?;

        if let Some(device_type_id) = patch.device_type_id {
            if DeviceTypeRepository::new(self.db)
                .get_by_id(device_type_id)
                .await?
                .is_none()
            {
                return Err(FleetError::DeviceTypeNotFound(device_type_id).into());
            }
        }

        repo.update(id, patch)
            .await?
            .ok_or(FleetError::DeploymentNotFound(id))?;

        self.get(id).await
    }

    /// Deletes a deployment together with its weekly allocations
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = DeploymentRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(FleetError::DeploymentNotFound(id).into());
        }

        tracing::info!(id, "Deleted deployment");

        Ok(())
    }
}
