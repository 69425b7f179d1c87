use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not logged in")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Current password is incorrect")]
    InvalidCurrentPassword,
    #[error("You do not have permission to {0}")]
    InsufficientPermission(&'static str),
    #[error("The admin master account cannot be deleted")]
    AdminMasterDeletion,
    #[error("The access level of the admin master account cannot be changed")]
    AdminMasterLevelChange,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, &self)
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                // Stale session, report the same as a missing login
                error_response(StatusCode::UNAUTHORIZED, &Self::UserNotInSession)
            }
            Self::InvalidCredentials | Self::InvalidCurrentPassword => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, &self)
            }
            Self::InsufficientPermission(_)
            | Self::AdminMasterDeletion
            | Self::AdminMasterLevelChange => {
                tracing::debug!("{}", self);

                error_response(StatusCode::FORBIDDEN, &self)
            }
        }
    }
}
