use std::collections::HashMap;

use chrono::NaiveDate;
use entity::sea_orm_active_enums::AircraftStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{model::db::AircraftModel, util::time};

/// Values for inserting an aircraft
pub struct NewAircraft {
    pub id: String,
    pub model: String,
    pub aircraft_type: String,
    pub capacity: i32,
    pub range: i32,
    pub client_name: Option<String>,
    pub delivery_deadline: Option<NaiveDate>,
    pub status: AircraftStatus,
    pub created_by: Option<i32>,
}

/// Partial update of an aircraft's details, `None` leaves a column unchanged
#[derive(Default)]
pub struct AircraftChanges {
    pub model: Option<String>,
    pub aircraft_type: Option<String>,
    pub capacity: Option<i32>,
    pub range: Option<i32>,
    pub client_name: Option<Option<String>>,
    pub delivery_deadline: Option<Option<NaiveDate>>,
    pub status: Option<AircraftStatus>,
}

impl AircraftChanges {
    pub fn is_empty(&self) -> bool {
        self.model.is_none()
            && self.aircraft_type.is_none()
            && self.capacity.is_none()
            && self.range.is_none()
            && self.client_name.is_none()
            && self.delivery_deadline.is_none()
            && self.status.is_none()
    }
}

pub struct AircraftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AircraftRepository<'a, C> {
    /// Creates a new instance of [`AircraftRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, aircraft: NewAircraft) -> Result<AircraftModel, DbErr> {
        let aircraft = entity::aircraft::ActiveModel {
            id: ActiveValue::Set(aircraft.id),
            model: ActiveValue::Set(aircraft.model),
            aircraft_type: ActiveValue::Set(aircraft.aircraft_type),
            capacity: ActiveValue::Set(aircraft.capacity),
            range: ActiveValue::Set(aircraft.range),
            client_name: ActiveValue::Set(aircraft.client_name),
            delivery_deadline: ActiveValue::Set(aircraft.delivery_deadline),
            status: ActiveValue::Set(aircraft.status),
            created_by: ActiveValue::Set(aircraft.created_by),
            created_at: ActiveValue::Set(time::now()),
        };

        aircraft.insert(self.db).await
    }

    pub async fn get(&self, aircraft_id: &str) -> Result<Option<AircraftModel>, DbErr> {
        entity::prelude::Aircraft::find_by_id(aircraft_id.to_string())
            .one(self.db)
            .await
    }

    /// Get all aircraft ordered by ID
    pub async fn get_all(&self) -> Result<Vec<AircraftModel>, DbErr> {
        entity::prelude::Aircraft::find()
            .order_by_asc(entity::aircraft::Column::Id)
            .all(self.db)
            .await
    }

    /// Apply a partial update
    ///
    /// Returns `Ok(None)` if the aircraft does not exist.
    pub async fn update(
        &self,
        aircraft_id: &str,
        changes: AircraftChanges,
    ) -> Result<Option<AircraftModel>, DbErr> {
        let Some(aircraft) = self.get(aircraft_id).await? else {
            return Ok(None);
        };

        if changes.is_empty() {
            return Ok(Some(aircraft));
        }

        let mut aircraft_am = aircraft.into_active_model();
        if let Some(model) = changes.model {
            aircraft_am.model = ActiveValue::Set(model);
        }
        if let Some(aircraft_type) = changes.aircraft_type {
            aircraft_am.aircraft_type = ActiveValue::Set(aircraft_type);
        }
        if let Some(capacity) = changes.capacity {
            aircraft_am.capacity = ActiveValue::Set(capacity);
        }
        if let Some(range) = changes.range {
            aircraft_am.range = ActiveValue::Set(range);
        }
        if let Some(client_name) = changes.client_name {
            aircraft_am.client_name = ActiveValue::Set(client_name);
        }
        if let Some(delivery_deadline) = changes.delivery_deadline {
            aircraft_am.delivery_deadline = ActiveValue::Set(delivery_deadline);
        }
        if let Some(status) = changes.status {
            aircraft_am.status = ActiveValue::Set(status);
        }

        Ok(Some(aircraft_am.update(self.db).await?))
    }

    /// Deletes an aircraft along with its tasks, parts, tests, and engineer assignments
    pub async fn delete(&self, aircraft_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Aircraft::delete_by_id(aircraft_id.to_string())
            .exec(self.db)
            .await
    }

    /// Get the IDs of an aircraft's associated engineers, ascending
    pub async fn get_engineer_ids(&self, aircraft_id: &str) -> Result<Vec<i32>, DbErr> {
        Ok(entity::prelude::AircraftEngineer::find()
            .filter(entity::aircraft_engineer::Column::AircraftId.eq(aircraft_id))
            .order_by_asc(entity::aircraft_engineer::Column::UserId)
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.user_id)
            .collect())
    }

    /// Get the engineer IDs of many aircraft at once
    ///
    /// Aircraft without engineers are absent from the returned map.
    pub async fn get_engineer_ids_for_many(
        &self,
        aircraft_ids: &[String],
    ) -> Result<HashMap<String, Vec<i32>>, DbErr> {
        let mut engineers: HashMap<String, Vec<i32>> = HashMap::new();
        if aircraft_ids.is_empty() {
            return Ok(engineers);
        }

        let links = entity::prelude::AircraftEngineer::find()
            .filter(entity::aircraft_engineer::Column::AircraftId.is_in(aircraft_ids.iter().cloned()))
            .order_by_asc(entity::aircraft_engineer::Column::UserId)
            .all(self.db)
            .await?;

        for link in links {
            engineers.entry(link.aircraft_id).or_default().push(link.user_id);
        }

        Ok(engineers)
    }

    /// Replace the associated engineers of an aircraft
    pub async fn set_engineers(&self, aircraft_id: &str, user_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::AircraftEngineer::delete_many()
            .filter(entity::aircraft_engineer::Column::AircraftId.eq(aircraft_id))
            .exec(self.db)
            .await?;

        if user_ids.is_empty() {
            return Ok(());
        }

        let links = user_ids
            .iter()
            .map(|user_id| entity::aircraft_engineer::ActiveModel {
                aircraft_id: ActiveValue::Set(aircraft_id.to_string()),
                user_id: ActiveValue::Set(*user_id),
            });

        entity::prelude::AircraftEngineer::insert_many(links)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}
