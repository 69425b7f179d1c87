use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("User not found")]
    UserNotFound(i32),
    #[error("Aircraft not found")]
    AircraftNotFound(String),
    #[error("Task not found")]
    TaskNotFound(i32),
    #[error("Part not found")]
    PartNotFound(i32),
    #[error("Test not found")]
    TestRecordNotFound(i32),
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!(resource = ?self, "{}", self);

        error_response(StatusCode::NOT_FOUND, &self)
    }
}
