use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::model::project::{CreateProjectDto, UpdateProjectDto};

pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        project: CreateProjectDto,
    ) -> Result<entity::project::Model, DbErr> {
        let project = entity::project::ActiveModel {
            name: ActiveValue::Set(project.name),
            name_en: ActiveValue::Set(Some(project.name_en)),
            client: ActiveValue::Set(Some(project.client)),
            status: ActiveValue::Set(Some(project.status.as_str().to_string())),
            entity: ActiveValue::Set(Some(project.entity)),
            notes: ActiveValue::Set(Some(project.notes)),
            ..Default::default()
        };

        project.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::project::Model>, DbErr> {
        entity::prelude::Project::find_by_id(id).one(self.db).await
    }

    /// All projects ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::project::Model>, DbErr> {
        entity::prelude::Project::find()
            .order_by_asc(entity::project::Column::Name)
            .all(self.db)
            .await
    }

    /// Applies the fields present in `patch`, `None` if the project does not exist
    pub async fn update(
        &self,
        id: i32,
        patch: UpdateProjectDto,
    ) -> Result<Option<entity::project::Model>, DbErr> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut project: entity::project::ActiveModel = existing.clone().into();
        if let Some(name) = patch.name {
            project.name = ActiveValue::Set(name);
        }
        if let Some(name_en) = patch.name_en {
            project.name_en = ActiveValue::Set(Some(name_en));
        }
        if let Some(client) = patch.client {
            project.client = ActiveValue::Set(Some(client));
        }
        if let Some(status) = patch.status {
            project.status = ActiveValue::Set(Some(status.as_str().to_string()));
        }
        if let Some(entity) = patch.entity {
            project.entity = ActiveValue::Set(Some(entity));
        }
        if let Some(notes) = patch.notes {
            project.notes = ActiveValue::Set(Some(notes));
        }

        if !project.is_changed() {
            return Ok(Some(existing));
        }

        Ok(Some(project.update(self.db).await?))
    }

    /// Deletes a project, cascading to its deployments and their weekly allocations
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Project::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
