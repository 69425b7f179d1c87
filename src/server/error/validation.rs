use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Request content rejected by business rules, always answered with 400.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Field '{0}' is required")]
    MissingField(&'static str),
    #[error("Field '{field}' is invalid: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),
    #[error("Aircraft ID '{0}' is already in use")]
    AircraftIdTaken(String),
    #[error("User ID {0} does not exist")]
    UnknownUser(i32),
    #[error("User ID {0} is not an engineer")]
    NotAnEngineer(i32),
    #[error("Task status cannot change from '{from}' to '{to}'")]
    InvalidTaskTransition { from: String, to: String },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::BAD_REQUEST, &self)
    }
}
