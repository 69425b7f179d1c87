//! Parts supplied for an aircraft.

use sea_orm::DatabaseConnection;

use crate::{
    model::part::{CreatePartDto, PartDto, UpdatePartDto},
    server::{
        data::part::PartRepository,
        error::{resource::ResourceError, Error},
        model::db::{PartModel, UserModel},
        service::{aircraft::AircraftService, optional_text, required_text},
    },
};

pub struct PartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartService<'a> {
    /// Creates a new instance of [`PartService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the parts of an aircraft ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<PartDto>)` - Parts of the aircraft, possibly empty
    /// - `Err(Error::ResourceError)` - Aircraft does not exist
    pub async fn get_by_aircraft(&self, aircraft_id: &str) -> Result<Vec<PartDto>, Error> {
        AircraftService::new(self.db).get_existing(aircraft_id).await?;

        let parts = PartRepository::new(self.db)
            .get_by_aircraft(aircraft_id)
            .await?;

        Ok(parts.into_iter().map(PartDto::from).collect())
    }

    /// Registers a part for an aircraft the actor may edit.
    ///
    /// # Returns
    /// - `Ok(PartDto)` - Created part
    /// - `Err(Error::ResourceError)` - Aircraft does not exist
    /// - `Err(Error::AuthError)` - Actor may not edit the aircraft
    /// - `Err(Error::ValidationError)` - Empty name or supplier
    pub async fn create(&self, actor: &UserModel, dto: CreatePartDto) -> Result<PartDto, Error> {
        let (aircraft, _) = AircraftService::new(self.db)
            .get_editable(actor, &dto.aircraft_id, "add parts to this aircraft")
            .await?;

        let name = required_text(dto.name, "name")?;
        let supplier = required_text(dto.supplier, "supplier")?;

        let part = PartRepository::new(self.db)
            .create(&aircraft.id, name, dto.part_type, supplier, dto.status)
            .await?;

        tracing::info!(
            part_id = %part.id,
            aircraft_id = %part.aircraft_id,
            created_by = %actor.id,
            "Created part"
        );

        Ok(part.into())
    }

    /// Applies a partial update, any status may be set.
    pub async fn update(
        &self,
        actor: &UserModel,
        part_id: i32,
        dto: UpdatePartDto,
    ) -> Result<PartDto, Error> {
        let part = self.get_editable(actor, part_id, "edit parts of this aircraft").await?;

        let changes = UpdatePartDto {
            name: optional_text(dto.name, "name")?,
            part_type: dto.part_type,
            supplier: optional_text(dto.supplier, "supplier")?,
            status: dto.status,
        };
        let previous_status = part.status;

        let part = PartRepository::new(self.db).update(part, changes).await?;

        if previous_status != part.status {
            tracing::info!(
                part_id = %part.id,
                user_id = %actor.id,
                from = ?previous_status,
                to = ?part.status,
                "Part status changed"
            );
        }

        Ok(part.into())
    }

    pub async fn delete(&self, actor: &UserModel, part_id: i32) -> Result<(), Error> {
        self.get_editable(actor, part_id, "delete parts of this aircraft").await?;

        PartRepository::new(self.db).delete(part_id).await?;

        tracing::info!(part_id = %part_id, deleted_by = %actor.id, "Deleted part");

        Ok(())
    }

    async fn get_editable(
        &self,
        actor: &UserModel,
        part_id: i32,
        action: &'static str,
    ) -> Result<PartModel, Error> {
        let Some(part) = PartRepository::new(self.db).get(part_id).await? else {
            return Err(ResourceError::PartNotFound(part_id).into());
        };

        AircraftService::new(self.db)
            .get_editable(actor, &part.aircraft_id, action)
            .await?;

        Ok(part)
    }
}
