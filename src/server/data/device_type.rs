use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

pub struct DeviceTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeviceTypeRepository<'a, C> {
    /// Creates a new instance of [`DeviceTypeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a device type, fails with a unique constraint violation if the name is taken
    pub async fn create(
        &self,
        name: String,
        total_fleet: i32,
        under_repair: i32,
    ) -> Result<entity::device_type::Model, DbErr> {
        let device_type = entity::device_type::ActiveModel {
            name: ActiveValue::Set(name),
            total_fleet: ActiveValue::Set(total_fleet),
            under_repair: ActiveValue::Set(under_repair),
            ..Default::default()
        };

        device_type.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::device_type::Model>, DbErr> {
        entity::prelude::DeviceType::find_by_id(id).one(self.db).await
    }

    /// All device types ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::device_type::Model>, DbErr> {
        entity::prelude::DeviceType::find()
            .order_by_asc(entity::device_type::Column::Name)
            .all(self.db)
            .await
    }

    /// Replaces the editable fields of a device type, `None` if it does not exist
    pub async fn update(
        &self,
        id: i32,
        name: String,
        total_fleet: i32,
        under_repair: i32,
    ) -> Result<Option<entity::device_type::Model>, DbErr> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut device_type: entity::device_type::ActiveModel = existing.into();
        device_type.name = ActiveValue::Set(name);
        device_type.total_fleet = ActiveValue::Set(total_fleet);
        device_type.under_repair = ActiveValue::Set(under_repair);

        Ok(Some(device_type.update(self.db).await?))
    }

    /// Deletes a device type
    ///
    /// Fails with a foreign key violation while deployments reference it. Returns OK when the
    /// device type does not exist, check [`DeleteResult::rows_affected`] to confirm deletion.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DeviceType::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
