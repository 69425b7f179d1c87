use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        user::{LoginDto, PasswordValidityDto, UserDto},
    },
    server::{
        controller::util::{get_user::get_user_from_session, json::ApiJson},
        error::{resource::ResourceError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::{auth::AuthService, user::UserService},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in with username and password
///
/// Stores the user ID in the session on success.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in, returns the user", body = UserDto),
        (status = 400, description = "Username or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db)
        .login(&dto.username, &dto.password)
        .await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    let user = UserService::new(&state.db)
        .get_user(user.id)
        .await?
        .ok_or(ResourceError::UserNotFound(user.id))?;

    Ok((StatusCode::OK, axum::Json(user)))
}

/// Log out by clearing the session
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = SuccessDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    session.clear().await;

    Ok((StatusCode::OK, axum::Json(SuccessDto::ok())))
}

/// Get the logged in user
#[utoipa::path(
    get,
    path = "/api/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let user = UserService::new(&state.db)
        .get_user(actor.id)
        .await?
        .ok_or(ResourceError::UserNotFound(actor.id))?;

    Ok((StatusCode::OK, axum::Json(user)))
}

/// Check a password without logging in
///
/// Administrators may check any account, other users only their own.
#[utoipa::path(
    post,
    path = "/api/verify-password",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Whether the password is valid", body = PasswordValidityDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Checking another user's password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_password(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let valid = AuthService::new(&state.db)
        .verify_password(&actor, &dto.username, &dto.password)
        .await?;

    Ok((StatusCode::OK, axum::Json(PasswordValidityDto { valid })))
}
