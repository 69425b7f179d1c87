use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error("Failed to hash fixture password: {0}")]
    PasswordHashError(argon2::password_hash::Error),
    #[error("Invalid fixture hashing parameters: {0}")]
    Argon2Error(argon2::Error),
}

impl From<argon2::password_hash::Error> for TestError {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHashError(err)
    }
}

impl From<argon2::Error> for TestError {
    fn from(err: argon2::Error) -> Self {
        Self::Argon2Error(err)
    }
}
