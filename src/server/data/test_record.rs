use chrono::NaiveDate;
use entity::sea_orm_active_enums::{TestResult, TestType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::TestRecordModel;

pub struct TestRecordRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TestRecordRepository<'a, C> {
    /// Creates a new instance of [`TestRecordRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        aircraft_id: &str,
        test_type: TestType,
        result: TestResult,
        date_performed: NaiveDate,
        notes: Option<String>,
    ) -> Result<TestRecordModel, DbErr> {
        let test_record = entity::test_record::ActiveModel {
            aircraft_id: ActiveValue::Set(aircraft_id.to_string()),
            test_type: ActiveValue::Set(test_type),
            result: ActiveValue::Set(result),
            date_performed: ActiveValue::Set(date_performed),
            notes: ActiveValue::Set(notes),
            ..Default::default()
        };

        test_record.insert(self.db).await
    }

    pub async fn get(&self, test_id: i32) -> Result<Option<TestRecordModel>, DbErr> {
        entity::prelude::TestRecord::find_by_id(test_id)
            .one(self.db)
            .await
    }

    /// Get the test history of an aircraft ordered by ID
    pub async fn get_by_aircraft(&self, aircraft_id: &str) -> Result<Vec<TestRecordModel>, DbErr> {
        entity::prelude::TestRecord::find()
            .filter(entity::test_record::Column::AircraftId.eq(aircraft_id))
            .order_by_asc(entity::test_record::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, test_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TestRecord::delete_by_id(test_id)
            .exec(self.db)
            .await
    }
}
