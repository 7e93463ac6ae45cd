use chrono::NaiveDate;
use fleet_scheduler::{
    model::{
        allocation::WeeklyAllocationDto,
        deployment::{CreateDeploymentDto, DeploymentDto, UpdateDeploymentDto},
        project::ProjectStatus,
    },
    server::controller::{
        allocation::list_allocations,
        deployment::{
            create_deployment, delete_deployment, get_deployment, list_deployments,
            update_deployment, DeploymentListParams,
        },
    },
};
use sea_orm::{ConnectionTrait, EntityTrait};

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_deployment(project_id: i32, device_type_id: i32) -> CreateDeploymentDto {
    CreateDeploymentDto {
        project_id,
        venue: "Tokyo Big Sight".to_string(),
        location: "East Hall".to_string(),
        // Wednesday to the Tuesday two weeks later
        start_date: date(2025, 3, 12),
        end_date: date(2025, 3, 25),
        device_type_id,
        default_device_count: 8,
        app_type: "App".to_string(),
        notes: String::new(),
    }
}

#[tokio::test]
/// Expect 201 with names joined in and one allocation per overlapping week
async fn creates_deployment_with_allocations() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let device_type = test.fleet().insert_device_type("iPad", 50, 0).await?;
    let project = test.fleet().insert_project("Expo").await?;

    let result = create_deployment(
        State(test.state()),
        Json(new_deployment(project.id, device_type.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: DeploymentDto = json_body(resp).await;
    assert_eq!(created.project_name, "Expo");
    assert_eq!(created.device_type_name, "iPad");

    let allocations: Vec<WeeklyAllocationDto> = json_body(
        list_allocations(State(test.state()), Path(created.id))
            .await
            .unwrap()
            .into_response(),
    )
    .await;
    let weeks: Vec<(NaiveDate, i32)> = allocations
        .iter()
        .map(|a| (a.week_start, a.device_count))
        .collect();
    assert_eq!(
        weeks,
        vec![
            (date(2025, 3, 10), 8),
            (date(2025, 3, 17), 8),
            (date(2025, 3, 24), 8),
        ]
    );

    Ok(())
}

#[tokio::test]
/// Expect 404 when the project does not exist
async fn not_found_for_missing_project() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let device_type = test.fleet().insert_device_type("iPad", 50, 0).await?;

    let result = create_deployment(State(test.state()), Json(new_deployment(7, device_type.id))).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

#[tokio::test]
/// Expect 400 when the end date precedes the start date
async fn rejects_inverted_dates() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let device_type = test.fleet().insert_device_type("iPad", 50, 0).await?;
    let project = test.fleet().insert_project("Expo").await?;
    let mut deployment = new_deployment(project.id, device_type.id);
    deployment.end_date = date(2025, 3, 1);

    let result = create_deployment(State(test.state()), Json(deployment)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

#[tokio::test]
/// Expect the project filter to narrow the list
async fn lists_deployments_of_project() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let device_type = test.fleet().insert_device_type("iPad", 50, 0).await?;
    let expo = test.fleet().insert_project("Expo").await?;
    let fair = test.fleet().insert_project("Fair").await?;
    test.fleet()
        .insert_deployment(expo.id, device_type.id, "Hall A", "2025-03-10", "2025-03-12", 1)
        .await?;
    test.fleet()
        .insert_deployment(fair.id, device_type.id, "Dome", "2025-03-10", "2025-03-12", 1)
        .await?;

    let result = list_deployments(
        State(test.state()),
        Query(DeploymentListParams {
            project_id: Some(fair.id),
        }),
    )
    .await;

    let deployments: Vec<DeploymentDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(deployments.len(), 1);
    assert_eq!(deployments[0].venue, "Dome");

    Ok(())
}

#[tokio::test]
/// Expect 200 with the patched venue, and 404 when patching a missing deployment
async fn patches_deployment() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let device_type = test.fleet().insert_device_type("iPad", 50, 0).await?;
    let project = test.fleet().insert_project("Expo").await?;
    let deployment = test
        .fleet()
        .insert_deployment(project.id, device_type.id, "Hall A", "2025-03-10", "2025-03-12", 1)
        .await?;
    let patch = UpdateDeploymentDto {
        venue: Some("Hall B".to_string()),
        ..Default::default()
    };

    let updated = update_deployment(State(test.state()), Path(deployment.id), Json(patch.clone())).await;
    let missing = update_deployment(State(test.state()), Path(deployment.id + 1), Json(patch)).await;

    let resp = updated.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: DeploymentDto = json_body(resp).await;
    assert_eq!(updated.venue, "Hall B");
    assert_eq!(
        missing.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

#[tokio::test]
/// Expect 204 on delete, after which the deployment is gone
async fn deletes_deployment() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let device_type = test.fleet().insert_device_type("iPad", 50, 0).await?;
    let project = test.fleet().insert_project("Expo").await?;
    let deployment = test
        .fleet()
        .insert_deployment(project.id, device_type.id, "Hall A", "2025-03-10", "2025-03-12", 1)
        .await?;

    let deleted = delete_deployment(State(test.state()), Path(deployment.id)).await;
    let fetched = get_deployment(State(test.state()), Path(deployment.id)).await;

    assert_eq!(deleted.unwrap().into_response().status(), StatusCode::NO_CONTENT);
    assert_eq!(
        fetched.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

#[tokio::test]
/// Expect deployments of a project stored with a status symbol to carry the matching status
async fn lists_deployments_of_legacy_status_project() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let device_type = test.fleet().insert_device_type("iPad", 100, 0).await?;
    test.db
        .execute_unprepared("INSERT INTO projects (name, status) VALUES ('Legacy', '★')")
        .await?;
    let project = entity::prelude::Project::find().one(&test.db).await?.unwrap();
    test.fleet()
        .insert_deployment(project.id, device_type.id, "Hall A", "2025-04-01", "2025-04-10", 5)
        .await?;

    let result = list_deployments(
        State(test.state()),
        Query(DeploymentListParams { project_id: None }),
    )
    .await;

    assert!(result.is_ok());
    let deployments: Vec<DeploymentDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(deployments.len(), 1);
    assert_eq!(deployments[0].project_status, ProjectStatus::MustWin);

    Ok(())
}
