use chrono::NaiveDate;
use fleet_scheduler::{
    model::allocation::{
        AllocationCountDto, BulkAllocationUpdateDto, RegenerateAllocationsDto,
        UpdateAllocationDto, WeeklyAllocationDto,
    },
    server::controller::allocation::{
        bulk_update_allocations, list_allocations, regenerate_allocations, save_allocations,
        update_allocation,
    },
};

use super::*;

/// Deployment over three weeks with allocations of 5, 6 and 7 devices
async fn setup(test: &TestContext) -> Result<(i32, Vec<i32>), TestError> {
    let device_type = test.fleet().insert_device_type("iPad", 50, 0).await?;
    let project = test.fleet().insert_project("Expo").await?;
    let deployment = test
        .fleet()
        .insert_deployment(project.id, device_type.id, "Hall", "2025-03-10", "2025-03-30", 4)
        .await?;

    let mut ids = Vec::new();
    for (week, count) in [("2025-03-10", 5), ("2025-03-17", 6), ("2025-03-24", 7)] {
        ids.push(test.fleet().insert_allocation(deployment.id, week, count).await?.id);
    }

    Ok((deployment.id, ids))
}

fn counts(allocations: &[WeeklyAllocationDto]) -> Vec<i32> {
    allocations.iter().map(|a| a.device_count).collect()
}

#[tokio::test]
/// Expect 404 when listing allocations of a missing deployment
async fn not_found_for_missing_deployment() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;

    let result = list_allocations(State(test.state()), Path(1)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

#[tokio::test]
/// Expect 200 and every count of the batch saved
async fn saves_batch() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let (deployment_id, ids) = setup(&test).await?;

    let result = save_allocations(
        State(test.state()),
        Path(deployment_id),
        Json(vec![
            AllocationCountDto {
                id: ids[0],
                device_count: 1,
            },
            AllocationCountDto {
                id: ids[2],
                device_count: 3,
            },
        ]),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let allocations: Vec<WeeklyAllocationDto> = json_body(resp).await;
    assert_eq!(counts(&allocations), vec![1, 6, 3]);

    Ok(())
}

#[tokio::test]
/// Expect 200 with weeks from the given Monday set to the new count
async fn bulk_updates_from_week() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let (deployment_id, _) = setup(&test).await?;

    let result = bulk_update_allocations(
        State(test.state()),
        Path(deployment_id),
        Json(BulkAllocationUpdateDto {
            device_count: 0,
            from: NaiveDate::from_ymd_opt(2025, 3, 17).unwrap(),
        }),
    )
    .await;

    let allocations: Vec<WeeklyAllocationDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(counts(&allocations), vec![5, 0, 0]);

    Ok(())
}

#[tokio::test]
/// Expect regeneration to reset every week to the default device count
async fn regenerates_with_default_count() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let (deployment_id, _) = setup(&test).await?;

    let result = regenerate_allocations(
        State(test.state()),
        Path(deployment_id),
        Json(RegenerateAllocationsDto::default()),
    )
    .await;

    let allocations: Vec<WeeklyAllocationDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(counts(&allocations), vec![4, 4, 4]);

    Ok(())
}

#[tokio::test]
/// Expect 200 for a single count update, 400 for a negative count and 404 for a missing ID
async fn updates_single_allocation() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let (_, ids) = setup(&test).await?;

    let updated = update_allocation(
        State(test.state()),
        Path(ids[1]),
        Json(UpdateAllocationDto { device_count: 9 }),
    )
    .await;
    let negative = update_allocation(
        State(test.state()),
        Path(ids[1]),
        Json(UpdateAllocationDto { device_count: -1 }),
    )
    .await;
    let missing = update_allocation(
        State(test.state()),
        Path(999),
        Json(UpdateAllocationDto { device_count: 1 }),
    )
    .await;

    let allocation: WeeklyAllocationDto = json_body(updated.unwrap().into_response()).await;
    assert_eq!(allocation.device_count, 9);
    assert_eq!(
        negative.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        missing.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
