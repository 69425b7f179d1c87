//! Error types for the aerocode server.
//!
//! Domain errors are grouped by concern (authentication, configuration, validation, and
//! missing resources), each mapping itself to an HTTP status. The top-level [`Error`]
//! aggregates those together with library errors so handlers can use `?` throughout.

pub mod auth;
pub mod config;
pub mod resource;
pub mod validation;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, resource::ResourceError, validation::ValidationError,
    },
};

/// Main error type for the aerocode server.
///
/// Uses `thiserror`'s `#[from]` so underlying errors convert through `?`. The
/// `IntoResponse` implementation maps each variant to a status code and a JSON body of
/// the form `{"error": "..."}`.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication and permission errors
/// - Validation errors on request bodies and state transitions
/// - Missing resources
/// - External library errors (database, sessions, password hashing, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Requested record does not exist.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Request body was not valid JSON or did not match the expected shape.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// Internal error indicating a bug in the server code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Password hashing or hash parsing failed.
    #[error("Password hash error: {0}")]
    PasswordHashError(argon2::password_hash::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Failed to bind or serve the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHashError(err)
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and malformed JSON bodies
/// - 401 Unauthorized - Missing session or bad credentials
/// - 403 Forbidden - Insufficient permission
/// - 404 Not Found - Missing records
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: rejection.body_text(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error but returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Build a JSON error response with the given status and the error's display text.
pub(crate) fn error_response(status: StatusCode, err: &impl std::fmt::Display) -> Response {
    (
        status,
        Json(ErrorDto {
            error: err.to_string(),
        }),
    )
        .into_response()
}
