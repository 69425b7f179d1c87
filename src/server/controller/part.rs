use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        part::{CreatePartDto, PartDto, UpdatePartDto},
    },
    server::{
        controller::util::{get_user::get_user_from_session, json::ApiJson},
        error::Error,
        model::app::AppState,
        service::part::PartService,
    },
};

pub static PART_TAG: &str = "part";

/// List the parts of an aircraft
#[utoipa::path(
    get,
    path = "/api/parts/aircraft/{aircraft_id}",
    tag = PART_TAG,
    params(("aircraft_id" = String, Path, description = "Aircraft ID")),
    responses(
        (status = 200, description = "Parts of the aircraft", body = Vec<PartDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_aircraft_parts(
    State(state): State<AppState>,
    session: Session,
    Path(aircraft_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let parts = PartService::new(&state.db)
        .get_by_aircraft(&aircraft_id)
        .await?;

    Ok((StatusCode::OK, axum::Json(parts)))
}

#[utoipa::path(
    post,
    path = "/api/parts",
    tag = PART_TAG,
    request_body = CreatePartDto,
    responses(
        (status = 200, description = "Created part", body = PartDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to edit the aircraft", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_part(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<CreatePartDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let part = PartService::new(&state.db).create(&actor, dto).await?;

    Ok((StatusCode::OK, axum::Json(part)))
}

#[utoipa::path(
    put,
    path = "/api/parts/{id}",
    tag = PART_TAG,
    params(("id" = i32, Path, description = "Part ID")),
    request_body = UpdatePartDto,
    responses(
        (status = 200, description = "Updated part", body = PartDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to edit the aircraft", body = ErrorDto),
        (status = 404, description = "Part not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_part(
    State(state): State<AppState>,
    session: Session,
    Path(part_id): Path<i32>,
    ApiJson(dto): ApiJson<UpdatePartDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let part = PartService::new(&state.db)
        .update(&actor, part_id, dto)
        .await?;

    Ok((StatusCode::OK, axum::Json(part)))
}

#[utoipa::path(
    delete,
    path = "/api/parts/{id}",
    tag = PART_TAG,
    params(("id" = i32, Path, description = "Part ID")),
    responses(
        (status = 200, description = "Part deleted", body = SuccessDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to edit the aircraft", body = ErrorDto),
        (status = 404, description = "Part not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_part(
    State(state): State<AppState>,
    session: Session,
    Path(part_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    PartService::new(&state.db).delete(&actor, part_id).await?;

    Ok((StatusCode::OK, axum::Json(SuccessDto::ok())))
}
