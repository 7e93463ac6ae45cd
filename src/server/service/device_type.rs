use sea_orm::DatabaseConnection;

use crate::{
    model::device_type::{CreateDeviceTypeDto, DeviceTypeDto, UpdateDeviceTypeDto},
    server::{
        data::device_type::DeviceTypeRepository,
        error::{fleet::FleetError, Error},
        model::db::DeviceTypeModel,
        service::{retry::RetryContext, validate},
    },
};

impl From<DeviceTypeModel> for DeviceTypeDto {
    fn from(model: DeviceTypeModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            total_fleet: model.total_fleet,
            under_repair: model.under_repair,
        }
    }
}

pub struct DeviceTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeviceTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<DeviceTypeDto>, Error> {
        let db = self.db;
        let device_types = RetryContext::new()
            .execute_with_retry("device type list", move || async move {
                DeviceTypeRepository::new(db)
                    .get_all()
                    .await
                    .map_err(Error::from)
            })
            .await?;

        Ok(device_types.into_iter().map(DeviceTypeDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<DeviceTypeDto, Error> {
        let db = self.db;
        let device_type = RetryContext::new()
            .execute_with_retry("device type lookup", move || async move {
                DeviceTypeRepository::new(db)
                    .get_by_id(id)
                    .await
                    .map_err(Error::from)
            })
            .await?
            .ok_or(FleetError::DeviceTypeNotFound(id))?;

        Ok(device_type.into())
    }

    pub async fn create(&self, device_type: CreateDeviceTypeDto) -> Result<DeviceTypeDto, Error> {
        let name = validate::required_text("name", &device_type.name)?;
        validate::fleet_counts(device_type.total_fleet, device_type.under_repair)?;

        let created = DeviceTypeRepository::new(self.db)
            .create(name, device_type.total_fleet, device_type.under_repair)
            .await?;

        tracing::info!(id = created.id, name = %created.name, "Created device type");

        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: i32,
        device_type: UpdateDeviceTypeDto,
    ) -> Result<DeviceTypeDto, Error> {
        let name = validate::required_text("name", &device_type.name)?;
        validate::fleet_counts(device_type.total_fleet, device_type.under_repair)?;

        let updated = DeviceTypeRepository::new(self.db)
            .update(id, name, device_type.total_fleet, device_type.under_repair)
            .await?
            .ok_or(FleetError::DeviceTypeNotFound(id))?;

        Ok(updated.into())
    }

    /// Deletes a device type, rejected with a conflict while deployments still use it
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = DeviceTypeRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(FleetError::DeviceTypeNotFound(id).into());
        }

        tracing::info!(id, "Deleted device type");

        Ok(())
    }
}
