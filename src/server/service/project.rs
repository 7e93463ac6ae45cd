use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::project::{CreateProjectDto, ProjectDto, ProjectStatus, UpdateProjectDto},
    server::{
        data::{deployment::DeploymentRepository, project::ProjectRepository},
        error::{fleet::FleetError, Error},
        model::db::ProjectModel,
        service::{retry::RetryContext, validate},
    },
};

impl From<ProjectModel> for ProjectDto {
    fn from(model: ProjectModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            name_en: model.name_en.unwrap_or_default(),
            client: model.client.unwrap_or_default(),
            status: ProjectStatus::from_column(model.status.as_deref()),
            entity: model
                .entity
                .unwrap_or_else(|| CreateProjectDto::DEFAULT_ENTITY.to_string()),
            notes: model.notes.unwrap_or_default(),
        }
    }
}

/// Narrows the project list, an empty filter matches every project
#[derive(Clone, Debug, Default)]
pub struct ProjectFilter {
    /// Accepted statuses, empty accepts all
    pub statuses: Vec<ProjectStatus>,
    /// Case-insensitive text matched against project fields and deployment venues
    pub search: Option<String>,
}

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Projects ordered by name, narrowed by `filter`
    pub async fn list(&self, filter: ProjectFilter) -> Result<Vec<ProjectDto>, Error> {
        let db = self.db;
        let projects: Vec<ProjectDto> = RetryContext::new()
            .execute_with_retry("project list", move || async move {
                ProjectRepository::new(db)
                    .get_all()
                    .await
                    .map_err(Error::from)
            })
            .await?
            .into_iter()
            .map(ProjectDto::from)
            .filter(|p| filter.statuses.is_empty() || filter.statuses.contains(&p.status))
            .collect();

        let needle = match filter.search.as_deref().map(str::trim) {
            Some(search) if !search.is_empty() => search.to_lowercase(),
            _ => return Ok(projects),
        };

        let venues = DeploymentRepository::new(self.db).get_venues().await?;
        let mut venue_text: HashMap<i32, Vec<String>> = HashMap::new();
        for (project_id, venue, location) in venues {
            let entry = venue_text.entry(project_id).or_default();
            entry.push(venue.to_lowercase());
            if let Some(location) = location {
                entry.push(location.to_lowercase());
            }
        }

        Ok(projects
            .into_iter()
            .filter(|p| {
                [&p.name, &p.name_en, &p.client, &p.notes]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
                    || venue_text
                        .get(&p.id)
                        .is_some_and(|texts| texts.iter().any(|t| t.contains(&needle)))
            })
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<ProjectDto, Error> {
        let db = self.db;
        let project = RetryContext::new()
            .execute_with_retry("project lookup", move || async move {
                ProjectRepository::new(db)
                    .get_by_id(id)
                    .await
                    .map_err(Error::from)
            })
            .await?
            .ok_or(FleetError::ProjectNotFound(id))?;

        Ok(project.into())
    }

    pub async fn create(&self, mut project: CreateProjectDto) -> Result<ProjectDto, Error> {
        project.name = validate::required_text("name", &project.name)?;

        let created = ProjectRepository::new(self.db).create(project).await?;

        tracing::info!(id = created.id, name = %created.name, "Created project");

        Ok(created.into())
    }

    /// Applies a partial update, an empty patch returns the project unchanged
    pub async fn update(&self, id: i32, mut patch: UpdateProjectDto) -> Result<ProjectDto, Error> {
        if let Some(name) = patch.name.as_deref() {
            patch.name = Some(validate::required_text("name", name)?);
        }

        let updated = ProjectRepository::new(self.db)
            .update(id, patch)
            .await?
            .ok_or(FleetError::ProjectNotFound(id))?;

        Ok(updated.into())
    }

    /// Deletes a project together with its deployments and their allocations
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = ProjectRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(FleetError::ProjectNotFound(id).into());
        }

        tracing::info!(id, "Deleted project");

        Ok(())
    }
}
