use fleet_scheduler::{
    model::project::{CreateProjectDto, ProjectDto, ProjectStatus, UpdateProjectDto},
    server::controller::project::{
        create_project, delete_project, get_project, list_projects, update_project,
        ProjectListParams,
    },
};
use sea_orm::ConnectionTrait;

use super::*;

#[tokio::test]
/// Expect 201 with default status and entity for a project created by name only
async fn creates_project_with_defaults() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;

    let result = create_project(State(test.state()), Json(CreateProjectDto::new("Expo"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: ProjectDto = json_body(resp).await;
    assert_eq!(created.status, ProjectStatus::Available);
    assert_eq!(created.entity, CreateProjectDto::DEFAULT_ENTITY);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a blank project name
async fn rejects_blank_name() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;

    let result = create_project(State(test.state()), Json(CreateProjectDto::new("  "))).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

#[tokio::test]
/// Expect the status query to accept names and symbols
async fn filters_by_status_list() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    test.fleet()
        .insert_project_with("Expo", "confirmed", "")
        .await?;
    test.fleet()
        .insert_project_with("Fair", "must_win", "")
        .await?;
    test.fleet().insert_project("Summit").await?;

    let result = list_projects(
        State(test.state()),
        Query(ProjectListParams {
            status: Some("confirmed,★".to_string()),
            search: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let projects: Vec<ProjectDto> = json_body(result.unwrap().into_response()).await;
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Expo", "Fair"]);

    Ok(())
}

#[tokio::test]
/// Expect rows stored with status symbols or unknown text to still list
async fn lists_projects_with_legacy_status_text() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    test.db
        .execute_unprepared(
            "INSERT INTO projects (name, status) VALUES ('Legacy', '◎'), ('Odd', 'someday')",
        )
        .await?;
    test.fleet().insert_project("Fresh").await?;

    let result = list_projects(
        State(test.state()),
        Query(ProjectListParams {
            status: None,
            search: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let projects: Vec<ProjectDto> = json_body(result.unwrap().into_response()).await;
    let statuses: Vec<(&str, ProjectStatus)> =
        projects.iter().map(|p| (p.name.as_str(), p.status)).collect();
    assert_eq!(
        statuses,
        vec![
            ("Fresh", ProjectStatus::Available),
            ("Legacy", ProjectStatus::Confirmed),
            ("Odd", ProjectStatus::Available),
        ]
    );

    let confirmed = list_projects(
        State(test.state()),
        Query(ProjectListParams {
            status: Some("confirmed".to_string()),
            search: None,
        }),
    )
    .await;

    let projects: Vec<ProjectDto> = json_body(confirmed.unwrap().into_response()).await;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Legacy");

    Ok(())
}

#[tokio::test]
/// Expect 400 for an unknown status
async fn rejects_unknown_status() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;

    let result = list_projects(
        State(test.state()),
        Query(ProjectListParams {
            status: Some("someday".to_string()),
            search: None,
        }),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

#[tokio::test]
/// Expect 200 with only the given fields changed
async fn patches_project() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let project = test
        .fleet()
        .insert_project_with("Expo", "available", "ACME")
        .await?;

    let result = update_project(
        State(test.state()),
        Path(project.id),
        Json(UpdateProjectDto {
            status: Some(ProjectStatus::Confirmed),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: ProjectDto = json_body(resp).await;
    assert_eq!(updated.status, ProjectStatus::Confirmed);
    assert_eq!(updated.client, "ACME");

    Ok(())
}

#[tokio::test]
/// Expect 204 on delete, after which the project is gone
async fn deletes_project() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let project = test.fleet().insert_project("Expo").await?;

    let deleted = delete_project(State(test.state()), Path(project.id)).await;
    let fetched = get_project(State(test.state()), Path(project.id)).await;

    assert_eq!(deleted.unwrap().into_response().status(), StatusCode::NO_CONTENT);
    assert_eq!(
        fetched.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
