use chrono::NaiveDate;
use entity::sea_orm_active_enums::{TestResult, TestType};
use serde::{Deserialize, Serialize};

/// A test performed on an aircraft, exposed under `/api/tests`
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestRecordDto {
    pub id: i32,
    pub aircraft_id: String,
    #[serde(rename = "type")]
    pub test_type: TestType,
    pub result: TestResult,
    pub date_performed: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestRecordDto {
    pub aircraft_id: String,
    #[serde(rename = "type")]
    pub test_type: TestType,
    pub result: TestResult,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<entity::test_record::Model> for TestRecordDto {
    fn from(test: entity::test_record::Model) -> Self {
        Self {
            id: test.id,
            aircraft_id: test.aircraft_id,
            test_type: test.test_type,
            result: test.result,
            date_performed: test.date_performed,
            notes: test.notes,
        }
    }
}
