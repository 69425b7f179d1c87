use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, validation::ValidationError, Error},
    model::db::UserModel,
    util::{password, permission},
};

/// Service for credential checks.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Check a username and password.
    ///
    /// Unknown usernames and wrong passwords fail the same way so the response does not
    /// reveal which usernames exist.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - Credentials are valid
    /// - `Err(Error::ValidationError)` - Username or password is empty
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Credentials are invalid
    pub async fn login(&self, username: &str, password: &str) -> Result<UserModel, Error> {
        if username.trim().is_empty() {
            return Err(ValidationError::MissingField("username").into());
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField("password").into());
        }

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.get_by_username(username.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(user)
    }

    /// Check whether a password is valid for a username.
    ///
    /// Administrators may check any account, other users only their own.
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether the password matches, false for unknown usernames
    /// - `Err(Error::ValidationError)` - Username or password is empty
    /// - `Err(Error::AuthError(AuthError::InsufficientPermission))` - Checking another user's password
    pub async fn verify_password(
        &self,
        actor: &UserModel,
        username: &str,
        password: &str,
    ) -> Result<bool, Error> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::MissingField("username").into());
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField("password").into());
        }

        permission::require(
            permission::is_admin(actor) || actor.username == username,
            actor,
            "verify another user's password",
        )?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.get_by_username(username).await? else {
            return Ok(false);
        };

        password::verify_password(password, &user.password_hash)
    }
}
