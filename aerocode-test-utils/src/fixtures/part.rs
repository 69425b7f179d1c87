use chrono::Utc;
use entity::sea_orm_active_enums::{PartStatus, PartType, TestResult, TestType};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::TEST_PART_SUPPLIER,
    error::TestError,
    model::{PartModel, TestRecordModel},
    TestContext,
};

impl TestContext {
    pub fn part<'a>(&'a mut self) -> PartFixtures<'a> {
        PartFixtures { context: self }
    }
}

pub struct PartFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> PartFixtures<'a> {
    pub async fn insert_part(
        &mut self,
        aircraft_id: &str,
        status: PartStatus,
    ) -> Result<PartModel, TestError> {
        Ok(entity::prelude::Part::insert(entity::part::ActiveModel {
            aircraft_id: ActiveValue::Set(aircraft_id.to_string()),
            name: ActiveValue::Set("Landing gear".to_string()),
            part_type: ActiveValue::Set(PartType::Imported),
            supplier: ActiveValue::Set(TEST_PART_SUPPLIER.to_string()),
            status: ActiveValue::Set(status),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }

    /// Insert a test record performed today.
    pub async fn insert_test_record(
        &mut self,
        aircraft_id: &str,
        result: TestResult,
    ) -> Result<TestRecordModel, TestError> {
        Ok(entity::prelude::TestRecord::insert(entity::test_record::ActiveModel {
            aircraft_id: ActiveValue::Set(aircraft_id.to_string()),
            test_type: ActiveValue::Set(TestType::Hydraulic),
            result: ActiveValue::Set(result),
            date_performed: ActiveValue::Set(Utc::now().date_naive()),
            notes: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
