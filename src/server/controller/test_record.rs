use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        test_record::{CreateTestRecordDto, TestRecordDto},
    },
    server::{
        controller::util::{get_user::get_user_from_session, json::ApiJson},
        error::Error,
        model::app::AppState,
        service::test_record::TestRecordService,
    },
};

pub static TEST_TAG: &str = "test";

/// List the test history of an aircraft
#[utoipa::path(
    get,
    path = "/api/tests/aircraft/{aircraft_id}",
    tag = TEST_TAG,
    params(("aircraft_id" = String, Path, description = "Aircraft ID")),
    responses(
        (status = 200, description = "Tests of the aircraft", body = Vec<TestRecordDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_aircraft_tests(
    State(state): State<AppState>,
    session: Session,
    Path(aircraft_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let tests = TestRecordService::new(&state.db)
        .get_by_aircraft(&aircraft_id)
        .await?;

    Ok((StatusCode::OK, axum::Json(tests)))
}

/// Record a test performed today
#[utoipa::path(
    post,
    path = "/api/tests",
    tag = TEST_TAG,
    request_body = CreateTestRecordDto,
    responses(
        (status = 200, description = "Recorded test", body = TestRecordDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to edit the aircraft", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_test(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<CreateTestRecordDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let test = TestRecordService::new(&state.db).create(&actor, dto).await?;

    Ok((StatusCode::OK, axum::Json(test)))
}

#[utoipa::path(
    delete,
    path = "/api/tests/{id}",
    tag = TEST_TAG,
    params(("id" = i32, Path, description = "Test ID")),
    responses(
        (status = 200, description = "Test deleted", body = SuccessDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to edit the aircraft", body = ErrorDto),
        (status = 404, description = "Test not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_test(
    State(state): State<AppState>,
    session: Session,
    Path(test_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    TestRecordService::new(&state.db).delete(&actor, test_id).await?;

    Ok((StatusCode::OK, axum::Json(SuccessDto::ok())))
}
