use chrono::NaiveDate;
use fleet_scheduler::{
    model::{
        fleet::{DashboardDto, DeviceTypeSummaryDto, FleetUsageDto},
        timeline::TimelineDto,
    },
    server::controller::fleet::{
        get_current_week, get_dashboard, get_forecast, get_timeline, get_usage, ForecastParams,
        TimelineParams, UsageParams,
    },
};

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
/// Expect 200 with weekly usage for a fixed range
async fn returns_usage() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let device_type = test.fleet().insert_device_type("iPad", 20, 2).await?;
    let project = test.fleet().insert_project("Expo").await?;
    let deployment = test
        .fleet()
        .insert_deployment(project.id, device_type.id, "Hall", "2025-03-10", "2025-03-16", 12)
        .await?;
    test.fleet()
        .insert_allocation(deployment.id, "2025-03-10", 12)
        .await?;

    let result = get_usage(
        State(test.state()),
        Query(UsageParams {
            start: date(2025, 3, 1),
            end: date(2025, 3, 31),
            device_type_id: None,
        }),
    )
    .await;

    let usage: Vec<FleetUsageDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(usage.len(), 1);
    assert_eq!(usage[0].total_in_use, 12);
    assert_eq!(usage[0].available, 6);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a usage range ending before it starts
async fn rejects_inverted_usage_range() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;

    let result = get_usage(
        State(test.state()),
        Query(UsageParams {
            start: date(2025, 3, 31),
            end: date(2025, 3, 1),
            device_type_id: None,
        }),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

#[tokio::test]
/// Expect every device type in the current week, fully available without allocations
async fn returns_current_week() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .with_device_type("iPad", 20, 2)
        .build()
        .await?;

    let result = get_current_week(State(test.state())).await;

    let summary: Vec<DeviceTypeSummaryDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].in_use, 0);
    assert_eq!(summary[0].available, 18);

    Ok(())
}

#[tokio::test]
/// Expect 404 when forecasting a missing device type
async fn forecast_not_found() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;

    let result = get_forecast(
        State(test.state()),
        Query(ForecastParams {
            device_type_id: 1,
            weeks: None,
        }),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

#[tokio::test]
/// Expect an empty dashboard without shortages on a fresh database
async fn returns_empty_dashboard() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;

    let result = get_dashboard(State(test.state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let dashboard: DashboardDto = json_body(resp).await;
    assert!(dashboard.current_week.is_empty());
    assert!(dashboard.shortages.is_empty());
    assert!(dashboard.warnings.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect a custom timeline to return the requested range and reject unknown statuses
async fn returns_custom_timeline() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let custom = TimelineParams {
        period: Some(fleet_scheduler::model::timeline::TimelinePeriod::Custom),
        start: Some(date(2025, 1, 1)),
        end: Some(date(2025, 1, 31)),
        ..Default::default()
    };
    let bad_status = TimelineParams {
        status: Some("later".to_string()),
        ..Default::default()
    };

    let ok = get_timeline(State(test.state()), Query(custom)).await;
    let bad = get_timeline(State(test.state()), Query(bad_status)).await;

    let timeline: TimelineDto = json_body(ok.unwrap().into_response()).await;
    assert_eq!(timeline.start, date(2025, 1, 1));
    assert_eq!(timeline.end, date(2025, 1, 31));
    assert!(timeline.rows.is_empty());
    assert_eq!(
        bad.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}
