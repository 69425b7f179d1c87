use entity::sea_orm_active_enums::{PartStatus, PartType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::part::UpdatePartDto, server::model::db::PartModel};

pub struct PartRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PartRepository<'a, C> {
    /// Creates a new instance of [`PartRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        aircraft_id: &str,
        name: String,
        part_type: PartType,
        supplier: String,
        status: PartStatus,
    ) -> Result<PartModel, DbErr> {
        let part = entity::part::ActiveModel {
            aircraft_id: ActiveValue::Set(aircraft_id.to_string()),
            name: ActiveValue::Set(name),
            part_type: ActiveValue::Set(part_type),
            supplier: ActiveValue::Set(supplier),
            status: ActiveValue::Set(status),
            ..Default::default()
        };

        part.insert(self.db).await
    }

    pub async fn get(&self, part_id: i32) -> Result<Option<PartModel>, DbErr> {
        entity::prelude::Part::find_by_id(part_id).one(self.db).await
    }

    /// Get the parts of an aircraft ordered by ID
    pub async fn get_by_aircraft(&self, aircraft_id: &str) -> Result<Vec<PartModel>, DbErr> {
        entity::prelude::Part::find()
            .filter(entity::part::Column::AircraftId.eq(aircraft_id))
            .order_by_asc(entity::part::Column::Id)
            .all(self.db)
            .await
    }

    /// Apply a partial update to a part already loaded by the caller
    pub async fn update(&self, part: PartModel, changes: UpdatePartDto) -> Result<PartModel, DbErr> {
        if changes.name.is_none()
            && changes.part_type.is_none()
            && changes.supplier.is_none()
            && changes.status.is_none()
        {
            return Ok(part);
        }

        let mut part_am = part.into_active_model();
        if let Some(name) = changes.name {
            part_am.name = ActiveValue::Set(name);
        }
        if let Some(part_type) = changes.part_type {
            part_am.part_type = ActiveValue::Set(part_type);
        }
        if let Some(supplier) = changes.supplier {
            part_am.supplier = ActiveValue::Set(supplier);
        }
        if let Some(status) = changes.status {
            part_am.status = ActiveValue::Set(status);
        }

        part_am.update(self.db).await
    }

    pub async fn delete(&self, part_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Part::delete_by_id(part_id)
            .exec(self.db)
            .await
    }
}
