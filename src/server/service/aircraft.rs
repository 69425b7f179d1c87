//! Aircraft projects and their engineer assignments.

use entity::sea_orm_active_enums::{AircraftStatus, UserLevel};
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::aircraft::{AircraftDto, CreateAircraftDto, UpdateAircraftDto},
    server::{
        data::{
            aircraft::{AircraftChanges, AircraftRepository, NewAircraft},
            user::UserRepository,
        },
        error::{resource::ResourceError, validation::ValidationError, Error},
        model::db::{AircraftModel, UserModel},
        service::{optional_text, required_text, unique_ids},
        util::permission,
    },
};

/// Attempts at drawing a free random aircraft ID before giving up.
const ID_GENERATION_ATTEMPTS: usize = 50;

pub struct AircraftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftService<'a> {
    /// Creates a new instance of [`AircraftService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all aircraft, each flagged with whether `actor` may edit it.
    pub async fn get_all(&self, actor: &UserModel) -> Result<Vec<AircraftDto>, Error> {
        let aircraft_repo = AircraftRepository::new(self.db);

        let aircraft = aircraft_repo.get_all().await?;
        let ids: Vec<String> = aircraft.iter().map(|a| a.id.clone()).collect();
        let mut engineers = aircraft_repo.get_engineer_ids_for_many(&ids).await?;

        Ok(aircraft
            .into_iter()
            .map(|aircraft| {
                let engineer_ids = engineers.remove(&aircraft.id).unwrap_or_default();
                aircraft_dto(aircraft, engineer_ids, actor)
            })
            .collect())
    }

    /// Retrieves a single aircraft.
    ///
    /// # Returns
    /// - `Ok(AircraftDto)` - Aircraft found
    /// - `Err(Error::ResourceError)` - Aircraft does not exist
    pub async fn get(&self, actor: &UserModel, aircraft_id: &str) -> Result<AircraftDto, Error> {
        let aircraft = self.get_existing(aircraft_id).await?;
        let engineer_ids = AircraftRepository::new(self.db)
            .get_engineer_ids(aircraft_id)
            .await?;

        Ok(aircraft_dto(aircraft, engineer_ids, actor))
    }

    /// Creates an aircraft with its associated engineers.
    ///
    /// The acting user is recorded as creator. Without an ID in the request, a free
    /// `X-NNN` identifier is generated.
    ///
    /// # Returns
    /// - `Ok(AircraftDto)` - Created aircraft
    /// - `Err(Error::AuthError)` - Actor is not an administrator
    /// - `Err(Error::ValidationError)` - Missing fields, negative numbers, taken ID, or
    ///   engineers that do not exist or are not engineers
    pub async fn create(
        &self,
        actor: &UserModel,
        dto: CreateAircraftDto,
    ) -> Result<AircraftDto, Error> {
        permission::require_level(actor, UserLevel::Administrator, "create aircraft")?;

        let model = required_text(dto.model, "model")?;
        let aircraft_type = required_text(dto.aircraft_type, "type")?;
        let capacity = non_negative(dto.capacity, "capacity")?;
        let range = non_negative(dto.range, "range")?;
        let engineer_ids = unique_ids(&dto.associated_engineers);
        self.validate_engineers(&engineer_ids).await?;

        let aircraft_repo = AircraftRepository::new(self.db);
        let id = match dto.id {
            Some(id) => {
                let id = required_text(id, "id")?;
                if aircraft_repo.get(&id).await?.is_some() {
                    return Err(ValidationError::AircraftIdTaken(id).into());
                }
                id
            }
            None => self.generate_id().await?,
        };

        let txn = self.db.begin().await?;
        let aircraft_repo = AircraftRepository::new(&txn);
        let aircraft = aircraft_repo
            .create(NewAircraft {
                id,
                model,
                aircraft_type,
                capacity,
                range,
                client_name: dto.client_name.filter(|name| !name.trim().is_empty()),
                delivery_deadline: dto.delivery_deadline,
                status: dto.status.unwrap_or(AircraftStatus::PreProduction),
                created_by: Some(actor.id),
            })
            .await?;
        aircraft_repo.set_engineers(&aircraft.id, &engineer_ids).await?;
        txn.commit().await?;

        tracing::info!(
            aircraft_id = %aircraft.id,
            created_by = %actor.id,
            "Created aircraft"
        );

        let mut engineer_ids = engineer_ids;
        engineer_ids.sort_unstable();

        Ok(aircraft_dto(aircraft, engineer_ids, actor))
    }

    /// Applies a partial update.
    ///
    /// Details may be edited by anyone who can edit the aircraft; changing the associated
    /// engineers is reserved to administrators.
    ///
    /// # Returns
    /// - `Ok(AircraftDto)` - Updated aircraft
    /// - `Err(Error::AuthError)` - Actor may not edit the aircraft or its engineers
    /// - `Err(Error::ResourceError)` - Aircraft does not exist
    /// - `Err(Error::ValidationError)` - Invalid field values or engineers
    pub async fn update(
        &self,
        actor: &UserModel,
        aircraft_id: &str,
        dto: UpdateAircraftDto,
    ) -> Result<AircraftDto, Error> {
        let (_, current_engineers) = self
            .get_editable(actor, aircraft_id, "edit this aircraft")
            .await?;

        let engineer_ids = match dto.associated_engineers {
            Some(ids) => {
                permission::require(
                    permission::is_admin(actor),
                    actor,
                    "change the engineers of an aircraft",
                )?;
                let ids = unique_ids(&ids);
                self.validate_engineers(&ids).await?;
                Some(ids)
            }
            None => None,
        };

        let changes = AircraftChanges {
            model: optional_text(dto.model, "model")?,
            aircraft_type: optional_text(dto.aircraft_type, "type")?,
            capacity: dto.capacity.map(|v| non_negative(v, "capacity")).transpose()?,
            range: dto.range.map(|v| non_negative(v, "range")).transpose()?,
            client_name: dto
                .client_name
                .map(|name| name.filter(|name| !name.trim().is_empty())),
            delivery_deadline: dto.delivery_deadline,
            status: dto.status,
        };

        let txn = self.db.begin().await?;
        let aircraft_repo = AircraftRepository::new(&txn);
        let aircraft = aircraft_repo
            .update(aircraft_id, changes)
            .await?
            .ok_or_else(|| ResourceError::AircraftNotFound(aircraft_id.to_string()))?;
        if let Some(ids) = &engineer_ids {
            aircraft_repo.set_engineers(aircraft_id, ids).await?;
        }
        txn.commit().await?;

        let mut engineer_ids = engineer_ids.unwrap_or(current_engineers);
        engineer_ids.sort_unstable();

        Ok(aircraft_dto(aircraft, engineer_ids, actor))
    }

    /// Deletes an aircraft together with its tasks, parts, and tests.
    pub async fn delete(&self, actor: &UserModel, aircraft_id: &str) -> Result<(), Error> {
        permission::require_level(actor, UserLevel::Administrator, "delete aircraft")?;

        let txn = self.db.begin().await?;
        let result = AircraftRepository::new(&txn).delete(aircraft_id).await?;
        if result.rows_affected == 0 {
            return Err(ResourceError::AircraftNotFound(aircraft_id.to_string()).into());
        }
        txn.commit().await?;

        tracing::info!(aircraft_id = %aircraft_id, deleted_by = %actor.id, "Deleted aircraft");

        Ok(())
    }

    /// Load an aircraft, failing with 404 when it does not exist.
    pub async fn get_existing(&self, aircraft_id: &str) -> Result<AircraftModel, Error> {
        AircraftRepository::new(self.db)
            .get(aircraft_id)
            .await?
            .ok_or_else(|| ResourceError::AircraftNotFound(aircraft_id.to_string()).into())
    }

    /// Load an aircraft and its engineers, failing unless `actor` may edit it.
    ///
    /// # Returns
    /// - `Ok((AircraftModel, Vec<i32>))` - Aircraft and its engineer IDs
    /// - `Err(Error::ResourceError)` - Aircraft does not exist
    /// - `Err(Error::AuthError)` - Actor may not edit the aircraft
    pub async fn get_editable(
        &self,
        actor: &UserModel,
        aircraft_id: &str,
        action: &'static str,
    ) -> Result<(AircraftModel, Vec<i32>), Error> {
        let aircraft = self.get_existing(aircraft_id).await?;
        let engineer_ids = AircraftRepository::new(self.db)
            .get_engineer_ids(aircraft_id)
            .await?;

        permission::require(
            permission::can_edit_aircraft(actor, &engineer_ids),
            actor,
            action,
        )?;

        Ok((aircraft, engineer_ids))
    }

    /// Check that every ID belongs to an existing engineer.
    async fn validate_engineers(&self, user_ids: &[i32]) -> Result<(), Error> {
        let users = UserRepository::new(self.db).get_many(user_ids).await?;

        for id in user_ids {
            match users.iter().find(|user| user.id == *id) {
                None => return Err(ValidationError::UnknownUser(*id).into()),
                Some(user) if user.level != UserLevel::Engineer => {
                    return Err(ValidationError::NotAnEngineer(*id).into())
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    async fn generate_id(&self) -> Result<String, Error> {
        let aircraft_repo = AircraftRepository::new(self.db);

        for _ in 0..ID_GENERATION_ATTEMPTS {
            let id = random_aircraft_id();
            if aircraft_repo.get(&id).await?.is_none() {
                return Ok(id);
            }
        }

        Err(Error::InternalError(format!(
            "Failed to find a free aircraft ID after {} attempts",
            ID_GENERATION_ATTEMPTS
        )))
    }
}

/// Random project code of the form `X-NNN`.
fn random_aircraft_id() -> String {
    let mut rng = rand::rng();
    let letter = char::from(rng.random_range(b'A'..=b'Z'));
    let number: u16 = rng.random_range(100..1000);

    format!("{}-{}", letter, number)
}

fn non_negative(value: i32, field: &'static str) -> Result<i32, Error> {
    if value < 0 {
        return Err(ValidationError::InvalidValue {
            field,
            reason: "must not be negative".to_string(),
        }
        .into());
    }

    Ok(value)
}

fn aircraft_dto(aircraft: AircraftModel, engineer_ids: Vec<i32>, actor: &UserModel) -> AircraftDto {
    let can_edit = permission::can_edit_aircraft(actor, &engineer_ids);

    AircraftDto {
        id: aircraft.id,
        model: aircraft.model,
        aircraft_type: aircraft.aircraft_type,
        capacity: aircraft.capacity,
        range: aircraft.range,
        client_name: aircraft.client_name,
        delivery_deadline: aircraft.delivery_deadline,
        status: aircraft.status,
        associated_engineers: engineer_ids,
        created_by: aircraft.created_by,
        can_edit,
    }
}
