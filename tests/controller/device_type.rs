use fleet_scheduler::{
    model::device_type::{CreateDeviceTypeDto, DeviceTypeDto, UpdateDeviceTypeDto},
    server::controller::device_type::{
        create_device_type, delete_device_type, get_device_type, list_device_types,
        update_device_type,
    },
};

use super::*;

fn new_device_type(name: &str, total_fleet: i32, under_repair: i32) -> Json<CreateDeviceTypeDto> {
    Json(CreateDeviceTypeDto {
        name: name.to_string(),
        total_fleet,
        under_repair,
    })
}

#[tokio::test]
/// Expect 201 with the created device type
async fn creates_device_type() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;

    let result = create_device_type(State(test.state()), new_device_type(" iPad ", 100, 5)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: DeviceTypeDto = json_body(resp).await;
    assert_eq!(created.name, "iPad");
    assert_eq!(created.under_repair, 5);

    Ok(())
}

#[tokio::test]
/// Expect 400 when more devices are under repair than exist
async fn rejects_invalid_fleet_counts() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;

    let result = create_device_type(State(test.state()), new_device_type("iPad", 5, 6)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

#[tokio::test]
/// Expect 409 when the name is already in use
async fn conflicts_on_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .with_device_type("iPad", 10, 0)
        .build()
        .await?;

    let result = create_device_type(State(test.state()), new_device_type("iPad", 20, 0)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::CONFLICT
    );

    Ok(())
}

#[tokio::test]
/// Expect 200 listing device types by name and 404 for a missing ID
async fn lists_and_gets_device_types() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .with_device_type("iPad", 10, 0)
        .with_device_type("Android", 5, 0)
        .build()
        .await?;

    let list = list_device_types(State(test.state())).await.unwrap().into_response();
    let missing = get_device_type(State(test.state()), Path(99)).await;

    assert_eq!(list.status(), StatusCode::OK);
    let device_types: Vec<DeviceTypeDto> = json_body(list).await;
    let names: Vec<&str> = device_types.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Android", "iPad"]);

    assert!(missing.is_err());
    assert_eq!(
        missing.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

#[tokio::test]
/// Expect 200 with the new values after an update
async fn updates_device_type() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let device_type = test.fleet().insert_device_type("iPad", 10, 0).await?;

    let result = update_device_type(
        State(test.state()),
        Path(device_type.id),
        Json(UpdateDeviceTypeDto {
            name: "iPad Pro".to_string(),
            total_fleet: 12,
            under_repair: 2,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: DeviceTypeDto = json_body(resp).await;
    assert_eq!(updated.name, "iPad Pro");
    assert_eq!(updated.total_fleet, 12);

    Ok(())
}

#[tokio::test]
/// Expect 204 for an unused device type and 404 once it is gone
async fn deletes_device_type() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let device_type = test.fleet().insert_device_type("iPad", 10, 0).await?;

    let first = delete_device_type(State(test.state()), Path(device_type.id)).await;
    let second = delete_device_type(State(test.state()), Path(device_type.id)).await;

    assert_eq!(first.unwrap().into_response().status(), StatusCode::NO_CONTENT);
    assert_eq!(
        second.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

#[tokio::test]
/// Expect 409 when deleting a device type used by a deployment
async fn conflicts_when_device_type_in_use() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let device_type = test.fleet().insert_device_type("iPad", 10, 0).await?;
    let project = test.fleet().insert_project("Expo").await?;
    test.fleet()
        .insert_deployment(project.id, device_type.id, "Hall", "2025-03-10", "2025-03-12", 1)
        .await?;

    let result = delete_device_type(State(test.state()), Path(device_type.id)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::CONFLICT
    );

    Ok(())
}
