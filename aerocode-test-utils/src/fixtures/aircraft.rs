use chrono::Utc;
use entity::sea_orm_active_enums::AircraftStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_AIRCRAFT_MODEL, error::TestError, model::AircraftModel, TestContext};

impl TestContext {
    pub fn aircraft<'a>(&'a mut self) -> AircraftFixtures<'a> {
        AircraftFixtures { context: self }
    }
}

pub struct AircraftFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> AircraftFixtures<'a> {
    /// Insert an aircraft in pre-production and assign the given engineers to it.
    ///
    /// # Arguments
    /// - `id` - Aircraft identifier, e.g. `A-100`
    /// - `engineer_ids` - IDs of existing users to link as associated engineers
    pub async fn insert_aircraft(
        &mut self,
        id: &str,
        engineer_ids: &[i32],
    ) -> Result<AircraftModel, TestError> {
        let aircraft = entity::prelude::Aircraft::insert(entity::aircraft::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            model: ActiveValue::Set(TEST_AIRCRAFT_MODEL.to_string()),
            aircraft_type: ActiveValue::Set("Comercial".to_string()),
            capacity: ActiveValue::Set(146),
            range: ActiveValue::Set(4800),
            client_name: ActiveValue::Set(None),
            delivery_deadline: ActiveValue::Set(None),
            status: ActiveValue::Set(AircraftStatus::PreProduction),
            created_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .exec_with_returning(&self.context.db)
        .await?;

        for engineer_id in engineer_ids {
            self.assign_engineer(id, *engineer_id).await?;
        }

        Ok(aircraft)
    }

    pub async fn assign_engineer(&mut self, aircraft_id: &str, user_id: i32) -> Result<(), TestError> {
        entity::prelude::AircraftEngineer::insert(entity::aircraft_engineer::ActiveModel {
            aircraft_id: ActiveValue::Set(aircraft_id.to_string()),
            user_id: ActiveValue::Set(user_id),
        })
        .exec_without_returning(&self.context.db)
        .await?;

        Ok(())
    }
}
