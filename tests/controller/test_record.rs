use aerocode::{
    model::test_record::{CreateTestRecordDto, TestRecordDto},
    server::{
        controller::{
            test_record::{create_test, delete_test, get_aircraft_tests},
            util::json::ApiJson,
        },
        model::app::AppState,
    },
};
use aerocode_test_utils::prelude::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use entity::sea_orm_active_enums::{TestResult, TestType, UserLevel};

use crate::controller::{login_as, read_json};

#[tokio::test]
/// Expect a recorded test dated today in the aircraft's history
async fn records_test() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().with_admin_master().build().await?;
    test.aircraft().insert_aircraft("A-100", &[]).await?;
    login_as(&test, 1).await;
    let state: AppState = test.to_app_state();

    let created = create_test(
        State(state.clone()),
        test.session.clone(),
        ApiJson(CreateTestRecordDto {
            aircraft_id: "A-100".to_string(),
            test_type: TestType::Aerodynamic,
            result: TestResult::Failed,
            notes: Some("Buffet at high alpha".to_string()),
        }),
    )
    .await;
    let record: TestRecordDto = read_json(created.unwrap().into_response()).await;
    assert_eq!(record.date_performed, Utc::now().date_naive());

    let listed = get_aircraft_tests(State(state), test.session.clone(), Path("A-100".to_string())).await;
    let history: Vec<TestRecordDto> = read_json(listed.unwrap().into_response()).await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].result, TestResult::Failed);

    Ok(())
}

#[tokio::test]
/// Expect 403 when an unassociated engineer deletes a test
async fn delete_requires_edit_rights() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let engineer = test.user().insert_user("maria", UserLevel::Engineer).await?;
    test.aircraft().insert_aircraft("A-100", &[]).await?;
    let record = test.part().insert_test_record("A-100", TestResult::Approved).await?;
    login_as(&test, engineer.id).await;

    let state: AppState = test.to_app_state();
    let result = delete_test(State(state), test.session.clone(), Path(record.id)).await;

    assert_eq!(result.err().unwrap().into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}
