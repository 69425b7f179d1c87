use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        user::{ChangePasswordDto, CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::util::{get_user::get_user_from_session, json::ApiJson},
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users ordered by ID", body = Vec<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let users = UserService::new(&state.db).get_all_users().await?;

    Ok((StatusCode::OK, axum::Json(users)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let user = UserService::new(&state.db)
        .get_user(user_id)
        .await?
        .ok_or(ResourceError::UserNotFound(user_id))?;

    Ok((StatusCode::OK, axum::Json(user)))
}

/// Create a user, administrators only
///
/// Without a password the configured default password is used.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Created user", body = UserDto),
        (status = 400, description = "Missing fields or username taken", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let user = UserService::new(&state.db)
        .create_user(&actor, dto, &state.default_user_password)
        .await?;

    Ok((StatusCode::OK, axum::Json(user)))
}

/// Update a user's name or level, administrators only
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator, or changing the admin master level", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    ApiJson(dto): ApiJson<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let user = UserService::new(&state.db)
        .update_user(&actor, user_id, dto)
        .await?;

    Ok((StatusCode::OK, axum::Json(user)))
}

/// Change your own password
#[utoipa::path(
    put,
    path = "/api/users/{id}/password",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID, must be the logged in user")),
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = SuccessDto),
        (status = 400, description = "New password missing", body = ErrorDto),
        (status = 401, description = "Not logged in or current password wrong", body = ErrorDto),
        (status = 403, description = "Changing another user's password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    ApiJson(dto): ApiJson<ChangePasswordDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    UserService::new(&state.db)
        .change_password(&actor, user_id, dto)
        .await?;

    Ok((StatusCode::OK, axum::Json(SuccessDto::ok())))
}

/// Delete a user, administrators only
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = SuccessDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator, or deleting the admin master", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    UserService::new(&state.db).delete_user(&actor, user_id).await?;

    Ok((StatusCode::OK, axum::Json(SuccessDto::ok())))
}
