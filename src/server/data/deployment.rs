use sea_orm::{
    sea_query::JoinType, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, FromQueryResult, Iterable, QueryFilter, QueryOrder, QuerySelect,
    QueryTrait, RelationTrait, Select,
};

use crate::{
    model::deployment::{CreateDeploymentDto, UpdateDeploymentDto},
    server::util::time::to_db_date,
};

/// A deployment row joined with its project and device type.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct DeploymentDetail {
    pub id: i32,
    pub project_id: i32,
    pub venue: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub device_type_id: i32,
    pub default_device_count: i32,
    pub app_type: Option<String>,
    pub notes: Option<String>,
    pub project_name: String,
    pub project_status: Option<String>,
    pub project_client: Option<String>,
    pub device_type_name: String,
}

pub struct DeploymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeploymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a deployment without allocations
    ///
    /// Fails with a foreign key violation if the project or device type does not exist.
    pub async fn create(
        &self,
        deployment: CreateDeploymentDto,
    ) -> Result<entity::deployment::Model, DbErr> {
        let deployment = entity::deployment::ActiveModel {
            project_id: ActiveValue::Set(deployment.project_id),
            venue: ActiveValue::Set(deployment.venue),
            location: ActiveValue::Set(Some(deployment.location)),
            start_date: ActiveValue::Set(to_db_date(deployment.start_date)),
            end_date: ActiveValue::Set(to_db_date(deployment.end_date)),
            device_type_id: ActiveValue::Set(deployment.device_type_id),
            default_device_count: ActiveValue::Set(deployment.default_device_count),
            app_type: ActiveValue::Set(Some(deployment.app_type)),
            notes: ActiveValue::Set(Some(deployment.notes)),
            ..Default::default()
        };

        deployment.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::deployment::Model>, DbErr> {
        entity::prelude::Deployment::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_detail_by_id(&self, id: i32) -> Result<Option<DeploymentDetail>, DbErr> {
        Self::select_details()
            .filter(entity::deployment::Column::Id.eq(id))
            .into_model::<DeploymentDetail>()
            .one(self.db)
            .await
    }

    /// Deployments ordered by start date, optionally limited to one project
    pub async fn get_details(
        &self,
        project_id: Option<i32>,
    ) -> Result<Vec<DeploymentDetail>, DbErr> {
        Self::select_details()
            .apply_if(project_id, |query, project_id| {
                query.filter(entity::deployment::Column::ProjectId.eq(project_id))
            })
            .into_model::<DeploymentDetail>()
            .all(self.db)
            .await
    }

    /// Deployments whose date range overlaps `start..=end`, both `YYYY-MM-DD`
    pub async fn get_details_overlapping(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<DeploymentDetail>, DbErr> {
        Self::select_details()
            .filter(entity::deployment::Column::StartDate.lte(end))
            .filter(entity::deployment::Column::EndDate.gte(start))
            .into_model::<DeploymentDetail>()
            .all(self.db)
            .await
    }

    /// `(project_id, venue, location)` for every deployment, used by project search
    pub async fn get_venues(&self) -> Result<Vec<(i32, String, Option<String>)>, DbErr> {
        entity::prelude::Deployment::find()
            .select_only()
            .column(entity::deployment::Column::ProjectId)
            .column(entity::deployment::Column::Venue)
            .column(entity::deployment::Column::Location)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Applies the fields present in `patch`, `None` if the deployment does not exist
    pub async fn update(
        &self,
        id: i32,
        patch: UpdateDeploymentDto,
    ) -> Result<Option<entity::deployment::Model>, DbErr> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut deployment: entity::deployment::ActiveModel = existing.clone().into();
        if let Some(venue) = patch.venue {
            deployment.venue = ActiveValue::Set(venue);
        }
        if let Some(location) = patch.location {
            deployment.location = ActiveValue::Set(Some(location));
        }
        if let Some(start_date) = patch.start_date {
            deployment.start_date = ActiveValue::Set(to_db_date(start_date));
        }
        if let Some(end_date) = patch.end_date {
            deployment.end_date = ActiveValue::Set(to_db_date(end_date));
        }
        if let Some(device_type_id) = patch.device_type_id {
            deployment.device_type_id = ActiveValue::Set(device_type_id);
        }
        if let Some(count) = patch.default_device_count {
            deployment.default_device_count = ActiveValue::Set(count);
        }
        if let Some(app_type) = patch.app_type {
            deployment.app_type = ActiveValue::Set(Some(app_type));
        }
        if let Some(notes) = patch.notes {
            deployment.notes = ActiveValue::Set(Some(notes));
        }

        if !deployment.is_changed() {
            return Ok(Some(existing));
        }

        Ok(Some(deployment.update(self.db).await?))
    }

    /// Deletes a deployment, cascading to its weekly allocations
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Deployment::delete_by_id(id)
            .exec(self.db)
            .await
    }

    fn select_details() -> Select<entity::prelude::Deployment> {
        entity::prelude::Deployment::find()
            .select_only()
            .columns(entity::deployment::Column::iter())
            .column_as(entity::project::Column::Name, "project_name")
            .column_as(entity::project::Column::Status, "project_status")
            .column_as(entity::project::Column::Client, "project_client")
            .column_as(entity::device_type::Column::Name, "device_type_name")
            .join(
                JoinType::InnerJoin,
                entity::deployment::Relation::Project.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::deployment::Relation::DeviceType.def(),
            )
            .order_by_asc(entity::deployment::Column::StartDate)
            .order_by_asc(entity::deployment::Column::Id)
    }
}
