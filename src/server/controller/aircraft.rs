use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{
        aircraft::{AircraftDto, CreateAircraftDto, UpdateAircraftDto},
        api::{ErrorDto, SuccessDto},
    },
    server::{
        controller::util::{get_user::get_user_from_session, json::ApiJson},
        error::Error,
        model::app::AppState,
        service::{aircraft::AircraftService, report::ReportService},
    },
};

pub static AIRCRAFT_TAG: &str = "aircraft";

/// List all aircraft
///
/// Each aircraft carries `canEdit` for the logged in user.
#[utoipa::path(
    get,
    path = "/api/aircrafts",
    tag = AIRCRAFT_TAG,
    responses(
        (status = 200, description = "All aircraft", body = Vec<AircraftDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_aircrafts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let aircraft = AircraftService::new(&state.db).get_all(&actor).await?;

    Ok((StatusCode::OK, axum::Json(aircraft)))
}

/// Get an aircraft by ID
#[utoipa::path(
    get,
    path = "/api/aircrafts/{id}",
    tag = AIRCRAFT_TAG,
    params(("id" = String, Path, description = "Aircraft ID, e.g. A-123")),
    responses(
        (status = 200, description = "Aircraft found", body = AircraftDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_aircraft(
    State(state): State<AppState>,
    session: Session,
    Path(aircraft_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let aircraft = AircraftService::new(&state.db)
        .get(&actor, &aircraft_id)
        .await?;

    Ok((StatusCode::OK, axum::Json(aircraft)))
}

/// Download the production report of an aircraft as plain text
#[utoipa::path(
    get,
    path = "/api/aircrafts/{id}/report",
    tag = AIRCRAFT_TAG,
    params(("id" = String, Path, description = "Aircraft ID")),
    responses(
        (status = 200, description = "Production report", body = String, content_type = "text/plain"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_aircraft_report(
    State(state): State<AppState>,
    session: Session,
    Path(aircraft_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let report = ReportService::new(&state.db).generate(&aircraft_id).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        report,
    ))
}

/// Create an aircraft, administrators only
///
/// The ID is generated when omitted and the status defaults to `Pré-produção`.
#[utoipa::path(
    post,
    path = "/api/aircrafts",
    tag = AIRCRAFT_TAG,
    request_body = CreateAircraftDto,
    responses(
        (status = 200, description = "Created aircraft", body = AircraftDto),
        (status = 400, description = "Invalid fields, ID taken, or unknown engineers", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_aircraft(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<CreateAircraftDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let aircraft = AircraftService::new(&state.db).create(&actor, dto).await?;

    Ok((StatusCode::OK, axum::Json(aircraft)))
}

/// Update an aircraft
///
/// Open to administrators and associated engineers. Only administrators may change the
/// associated engineers. `clientName` and `deliveryDeadline` accept `null` to clear them.
#[utoipa::path(
    put,
    path = "/api/aircrafts/{id}",
    tag = AIRCRAFT_TAG,
    params(("id" = String, Path, description = "Aircraft ID")),
    request_body = UpdateAircraftDto,
    responses(
        (status = 200, description = "Updated aircraft", body = AircraftDto),
        (status = 400, description = "Invalid fields or unknown engineers", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to edit this aircraft", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_aircraft(
    State(state): State<AppState>,
    session: Session,
    Path(aircraft_id): Path<String>,
    ApiJson(dto): ApiJson<UpdateAircraftDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let aircraft = AircraftService::new(&state.db)
        .update(&actor, &aircraft_id, dto)
        .await?;

    Ok((StatusCode::OK, axum::Json(aircraft)))
}

/// Delete an aircraft with its tasks, parts, and tests, administrators only
#[utoipa::path(
    delete,
    path = "/api/aircrafts/{id}",
    tag = AIRCRAFT_TAG,
    params(("id" = String, Path, description = "Aircraft ID")),
    responses(
        (status = 200, description = "Aircraft deleted", body = SuccessDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_aircraft(
    State(state): State<AppState>,
    session: Session,
    Path(aircraft_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    AircraftService::new(&state.db)
        .delete(&actor, &aircraft_id)
        .await?;

    Ok((StatusCode::OK, axum::Json(SuccessDto::ok())))
}
