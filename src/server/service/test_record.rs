//! Test history of an aircraft.

use sea_orm::DatabaseConnection;

use crate::{
    model::test_record::{CreateTestRecordDto, TestRecordDto},
    server::{
        data::test_record::TestRecordRepository,
        error::{resource::ResourceError, Error},
        model::db::UserModel,
        service::aircraft::AircraftService,
        util::time,
    },
};

pub struct TestRecordService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TestRecordService<'a> {
    /// Creates a new instance of [`TestRecordService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the tests of an aircraft ordered by ID, 404 for an unknown aircraft.
    pub async fn get_by_aircraft(&self, aircraft_id: &str) -> Result<Vec<TestRecordDto>, Error> {
        AircraftService::new(self.db).get_existing(aircraft_id).await?;

        let tests = TestRecordRepository::new(self.db)
            .get_by_aircraft(aircraft_id)
            .await?;

        Ok(tests.into_iter().map(TestRecordDto::from).collect())
    }

    /// Records a test performed today.
    ///
    /// Blank notes are stored as absent.
    ///
    /// # Returns
    /// - `Ok(TestRecordDto)` - Recorded test
    /// - `Err(Error::ResourceError)` - Aircraft does not exist
    /// - `Err(Error::AuthError)` - Actor may not edit the aircraft
    pub async fn create(
        &self,
        actor: &UserModel,
        dto: CreateTestRecordDto,
    ) -> Result<TestRecordDto, Error> {
        let (aircraft, _) = AircraftService::new(self.db)
            .get_editable(actor, &dto.aircraft_id, "record tests for this aircraft")
            .await?;

        let notes = dto
            .notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty());

        let test = TestRecordRepository::new(self.db)
            .create(&aircraft.id, dto.test_type, dto.result, time::today(), notes)
            .await?;

        tracing::info!(
            test_id = %test.id,
            aircraft_id = %test.aircraft_id,
            result = ?test.result,
            recorded_by = %actor.id,
            "Recorded test"
        );

        Ok(test.into())
    }

    pub async fn delete(&self, actor: &UserModel, test_id: i32) -> Result<(), Error> {
        let test_repo = TestRecordRepository::new(self.db);
        let Some(test) = test_repo.get(test_id).await? else {
            return Err(ResourceError::TestRecordNotFound(test_id).into());
        };

        AircraftService::new(self.db)
            .get_editable(actor, &test.aircraft_id, "delete tests of this aircraft")
            .await?;

        test_repo.delete(test_id).await?;

        tracing::info!(test_id = %test_id, deleted_by = %actor.id, "Deleted test");

        Ok(())
    }
}
