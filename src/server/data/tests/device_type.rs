use sea_orm::EntityTrait;

use super::*;
use crate::server::data::device_type::DeviceTypeRepository;

/// Expect success when creating a device type
#[tokio::test]
async fn creates_device_type() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::DeviceType)?;
    let repo = DeviceTypeRepository::new(&test.db);

    let created = repo.create("iPad".to_string(), 120, 4).await?;

    assert_eq!(created.name, "iPad");
    assert_eq!(created.total_fleet, 120);
    assert_eq!(created.under_repair, 4);

    Ok(())
}

/// Expect a unique constraint violation when the name is already taken
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::DeviceType)?;
    let repo = DeviceTypeRepository::new(&test.db);

    repo.create("iPad".to_string(), 120, 0).await?;
    let result = repo.create("iPad".to_string(), 10, 0).await;

    assert!(result.is_err());
    assert!(is_unique_violation(&result.unwrap_err()));

    let count = entity::prelude::DeviceType::find().all(&test.db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}

/// Expect device types to be listed by name
#[tokio::test]
async fn lists_device_types_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .with_device_type("Tablet", 10, 0)
        .with_device_type("iPad", 10, 0)
        .with_device_type("Android", 10, 0)
        .build()
        .await?;
    let repo = DeviceTypeRepository::new(&test.db);

    let names: Vec<String> = repo.get_all().await?.into_iter().map(|d| d.name).collect();

    assert_eq!(names, vec!["Android", "Tablet", "iPad"]);

    Ok(())
}

/// Expect None when updating a device type that does not exist
#[tokio::test]
async fn update_missing_device_type_returns_none() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::DeviceType)?;
    let repo = DeviceTypeRepository::new(&test.db);

    let result = repo.update(42, "iPad".to_string(), 1, 0).await?;

    assert!(result.is_none());

    Ok(())
}

/// Expect fields to be replaced on update
#[tokio::test]
async fn updates_device_type() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::DeviceType)?;
    let device_type = test.fleet().insert_device_type("iPad", 100, 0).await?;
    let repo = DeviceTypeRepository::new(&test.db);

    let updated = repo
        .update(device_type.id, "iPad mini".to_string(), 80, 3)
        .await?
        .unwrap();

    assert_eq!(updated.name, "iPad mini");
    assert_eq!(updated.total_fleet, 80);
    assert_eq!(updated.under_repair, 3);

    Ok(())
}

/// Expect deletion to be blocked while a deployment references the device type
#[tokio::test]
async fn delete_blocked_by_deployment() -> Result<(), TestError> {
    let test = test_setup_with_fleet_tables!()?;
    let device_type = test.fleet().insert_device_type("iPad", 100, 0).await?;
    let project = test.fleet().insert_project("Expo").await?;
    test.fleet()
        .insert_deployment(project.id, device_type.id, "Hall A", "2025-03-03", "2025-03-09", 5)
        .await?;
    let repo = DeviceTypeRepository::new(&test.db);

    let result = repo.delete(device_type.id).await;

    assert!(result.is_err());
    assert!(is_foreign_key_violation(&result.unwrap_err()));
    assert!(repo.get_by_id(device_type.id).await?.is_some());

    Ok(())
}

/// Expect no rows affected when deleting a device type that does not exist
#[tokio::test]
async fn delete_missing_device_type() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::DeviceType)?;
    let repo = DeviceTypeRepository::new(&test.db);

    let result = repo.delete(1).await?;

    assert_eq!(result.rows_affected, 0);

    Ok(())
}
