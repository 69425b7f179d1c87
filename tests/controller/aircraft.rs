use aerocode::{
    model::{
        aircraft::{AircraftDto, CreateAircraftDto, UpdateAircraftDto},
        task::TaskDto,
    },
    server::{
        controller::{
            aircraft::{
                create_aircraft, delete_aircraft, get_aircraft, get_aircraft_report, get_aircrafts,
                update_aircraft,
            },
            task::get_tasks,
            util::json::ApiJson,
        },
        model::app::AppState,
    },
};
use aerocode_test_utils::prelude::*;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::{AircraftStatus, TaskStatus, UserLevel};

use crate::controller::{login_as, read_json, read_text};

fn new_aircraft(id: Option<&str>, engineers: Vec<i32>) -> CreateAircraftDto {
    CreateAircraftDto {
        id: id.map(str::to_string),
        model: "KC-390".to_string(),
        aircraft_type: "Militar".to_string(),
        capacity: 80,
        range: 5820,
        client_name: Some("Força Aérea".to_string()),
        delivery_deadline: NaiveDate::from_ymd_opt(2027, 5, 1),
        status: None,
        associated_engineers: engineers,
    }
}

#[tokio::test]
/// Expect 200 with a generated ID, the admin as creator, and pre-production status
async fn creates_aircraft() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().with_admin_master().build().await?;
    let engineer = test.user().insert_user("maria", UserLevel::Engineer).await?;
    login_as(&test, 1).await;

    let state: AppState = test.to_app_state();
    let result = create_aircraft(
        State(state),
        test.session.clone(),
        ApiJson(new_aircraft(None, vec![engineer.id])),
    )
    .await;

    let aircraft: AircraftDto = read_json(result.unwrap().into_response()).await;
    let (letter, number) = aircraft.id.split_once('-').unwrap();
    assert_eq!(letter.len(), 1);
    assert_eq!(number.len(), 3);
    assert_eq!(aircraft.status, AircraftStatus::PreProduction);
    assert_eq!(aircraft.created_by, Some(1));
    assert_eq!(aircraft.associated_engineers, vec![engineer.id]);
    assert!(aircraft.can_edit);

    Ok(())
}

#[tokio::test]
/// Expect 400 when an associated user is not an engineer, 403 for non-admins
async fn create_aircraft_rejections() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().with_admin_master().build().await?;
    let engineer = test.user().insert_user("maria", UserLevel::Engineer).await?;
    let operator = test.user().insert_user("joao", UserLevel::Operator).await?;
    let state: AppState = test.to_app_state();

    login_as(&test, 1).await;
    let not_engineer = create_aircraft(
        State(state.clone()),
        test.session.clone(),
        ApiJson(new_aircraft(Some("K-390"), vec![operator.id])),
    )
    .await;
    assert_eq!(
        not_engineer.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    test.new_session();
    login_as(&test, engineer.id).await;
    let forbidden = create_aircraft(
        State(state),
        test.session.clone(),
        ApiJson(new_aircraft(Some("K-390"), vec![])),
    )
    .await;
    assert_eq!(
        forbidden.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    Ok(())
}

#[tokio::test]
/// Expect canEdit to follow the engineer assignments of each aircraft
async fn lists_aircraft_with_edit_flag() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let engineer = test.user().insert_user("maria", UserLevel::Engineer).await?;
    test.aircraft().insert_aircraft("A-100", &[engineer.id]).await?;
    test.aircraft().insert_aircraft("B-200", &[]).await?;
    login_as(&test, engineer.id).await;

    let state: AppState = test.to_app_state();
    let result = get_aircrafts(State(state.clone()), test.session.clone()).await;

    let aircraft: Vec<AircraftDto> = read_json(result.unwrap().into_response()).await;
    let flags: Vec<(String, bool)> = aircraft.into_iter().map(|a| (a.id, a.can_edit)).collect();
    assert_eq!(
        flags,
        vec![("A-100".to_string(), true), ("B-200".to_string(), false)]
    );

    let missing = get_aircraft(State(state), test.session.clone(), Path("Z-999".to_string())).await;
    assert_eq!(
        missing.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

#[tokio::test]
/// Expect an associated engineer to clear the client with null but not reassign engineers
async fn associated_engineer_updates_details() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let engineer = test.user().insert_user("maria", UserLevel::Engineer).await?;
    test.aircraft().insert_aircraft("A-100", &[engineer.id]).await?;
    login_as(&test, engineer.id).await;
    let state: AppState = test.to_app_state();

    let patch: UpdateAircraftDto = serde_json::from_str(
        r#"{"clientName": null, "status": "Testes Finais", "capacity": 150}"#,
    )
    .unwrap();
    let result = update_aircraft(
        State(state.clone()),
        test.session.clone(),
        Path("A-100".to_string()),
        ApiJson(patch),
    )
    .await;

    let aircraft: AircraftDto = read_json(result.unwrap().into_response()).await;
    assert_eq!(aircraft.client_name, None);
    assert_eq!(aircraft.status, AircraftStatus::FinalTests);
    assert_eq!(aircraft.capacity, 150);

    let reassign = update_aircraft(
        State(state),
        test.session.clone(),
        Path("A-100".to_string()),
        ApiJson(UpdateAircraftDto {
            associated_engineers: Some(vec![]),
            ..Default::default()
        }),
    )
    .await;
    assert_eq!(
        reassign.err().unwrap().into_response().status(),
        StatusCode::FORBIDDEN
    );

    Ok(())
}

#[tokio::test]
/// Expect deleting an aircraft to remove its tasks as well
async fn delete_cascades_to_tasks() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().with_admin_master().build().await?;
    test.aircraft().insert_aircraft("A-100", &[]).await?;
    test.task().insert_task("A-100", TaskStatus::Pending, &[]).await?;
    login_as(&test, 1).await;
    let state: AppState = test.to_app_state();

    let result = delete_aircraft(
        State(state.clone()),
        test.session.clone(),
        Path("A-100".to_string()),
    )
    .await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let tasks = get_tasks(State(state.clone()), test.session.clone()).await;
    let tasks: Vec<TaskDto> = read_json(tasks.unwrap().into_response()).await;
    assert!(tasks.is_empty());

    let again = delete_aircraft(State(state), test.session.clone(), Path("A-100".to_string())).await;
    assert_eq!(again.err().unwrap().into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect the report as plain text for any logged in user
async fn downloads_report() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let operator = test.user().insert_user("joao", UserLevel::Operator).await?;
    test.aircraft().insert_aircraft("A-100", &[]).await?;
    login_as(&test, operator.id).await;

    let state: AppState = test.to_app_state();
    let result = get_aircraft_report(State(state), test.session.clone(), Path("A-100".to_string())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    let report = read_text(resp).await;
    assert!(report.contains("Project ID:       A-100"));
    assert!(report.contains("TEST HISTORY"));

    Ok(())
}
