//! User account management.
//!
//! Anyone logged in can list users; creating, editing, and deleting accounts is reserved
//! to administrators. The admin master account is protected from deletion and from
//! level changes.

use std::collections::BTreeSet;

use entity::sea_orm_active_enums::UserLevel;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::user::{ChangePasswordDto, CreateUserDto, UpdateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{
            auth::AuthError, resource::ResourceError, validation::ValidationError, Error,
        },
        model::db::UserModel,
        service::{optional_text, required_text},
        util::{password, permission},
    },
};

/// Display name of the admin master account created at startup.
const ADMIN_MASTER_NAME: &str = "Administrador Master";

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user with their associated aircraft.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.get(user_id).await? else {
            return Ok(None);
        };

        Ok(Some(self.to_dto(user).await?))
    }

    /// Retrieves all users ordered by ID.
    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        self.to_dtos(users).await
    }

    /// Creates a user account.
    ///
    /// # Arguments
    /// - `actor` - Acting user, must be an administrator
    /// - `dto` - Account details, the password falls back to `default_password`
    /// - `default_password` - Configured password for accounts created without one
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Created user
    /// - `Err(Error::AuthError)` - Actor is not an administrator
    /// - `Err(Error::ValidationError)` - Empty name/username or username already taken
    pub async fn create_user(
        &self,
        actor: &UserModel,
        dto: CreateUserDto,
        default_password: &str,
    ) -> Result<UserDto, Error> {
        permission::require_level(actor, UserLevel::Administrator, "create users")?;

        let name = required_text(dto.name, "name")?;
        let username = required_text(dto.username, "username")?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.get_by_username(&username).await?.is_some() {
            return Err(ValidationError::UsernameTaken(username).into());
        }

        let password = dto
            .password
            .filter(|password| !password.is_empty())
            .unwrap_or_else(|| default_password.to_string());
        let password_hash = password::hash_password(&password)?;

        let user = user_repo
            .create(name, username.clone(), password_hash, dto.level)
            .await
            .map_err(|err| username_conflict(err, username))?;

        tracing::info!(
            user_id = %user.id,
            created_by = %actor.id,
            level = ?user.level,
            "Created user {}",
            user.username
        );

        Ok(user_dto(user, BTreeSet::new()))
    }

    /// Updates a user's name and/or level.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Updated user
    /// - `Err(Error::AuthError)` - Actor is not an administrator, or the level of the admin
    ///   master account would change
    /// - `Err(Error::ResourceError)` - User does not exist
    pub async fn update_user(
        &self,
        actor: &UserModel,
        user_id: i32,
        dto: UpdateUserDto,
    ) -> Result<UserDto, Error> {
        permission::require_level(actor, UserLevel::Administrator, "edit users")?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.get(user_id).await? else {
            return Err(ResourceError::UserNotFound(user_id).into());
        };

        if let Some(level) = dto.level {
            if level != user.level && permission::is_admin_master(&user) {
                return Err(AuthError::AdminMasterLevelChange.into());
            }
        }

        let name = optional_text(dto.name, "name")?;
        let user = user_repo
            .update(user_id, name, dto.level)
            .await?
            .ok_or(ResourceError::UserNotFound(user_id))?;

        self.to_dto(user).await
    }

    /// Changes a user's own password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(Error::ValidationError)` - Old or new password is empty
    /// - `Err(Error::AuthError(AuthError::InsufficientPermission))` - Changing someone else's password
    /// - `Err(Error::AuthError(AuthError::InvalidCurrentPassword))` - Old password does not match
    /// - `Err(Error::ResourceError)` - User does not exist
    pub async fn change_password(
        &self,
        actor: &UserModel,
        user_id: i32,
        dto: ChangePasswordDto,
    ) -> Result<(), Error> {
        permission::require(actor.id == user_id, actor, "change another user's password")?;

        if dto.old_password.is_empty() {
            return Err(ValidationError::MissingField("oldPassword").into());
        }
        if dto.new_password.is_empty() {
            return Err(ValidationError::MissingField("newPassword").into());
        }

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.get(user_id).await? else {
            return Err(ResourceError::UserNotFound(user_id).into());
        };

        if !password::verify_password(&dto.old_password, &user.password_hash)? {
            return Err(AuthError::InvalidCurrentPassword.into());
        }

        let password_hash = password::hash_password(&dto.new_password)?;
        user_repo.update_password_hash(user_id, password_hash).await?;

        tracing::info!(user_id = %user_id, "User changed their password");

        Ok(())
    }

    /// Deletes a user account.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(Error::AuthError)` - Actor is not an administrator or the target is the admin master
    /// - `Err(Error::ResourceError)` - User does not exist
    pub async fn delete_user(&self, actor: &UserModel, user_id: i32) -> Result<(), Error> {
        permission::require_level(actor, UserLevel::Administrator, "delete users")?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.get(user_id).await? else {
            return Err(ResourceError::UserNotFound(user_id).into());
        };

        if permission::is_admin_master(&user) {
            return Err(AuthError::AdminMasterDeletion.into());
        }

        user_repo.delete(user_id).await?;

        tracing::info!(user_id = %user_id, deleted_by = %actor.id, "Deleted user");

        Ok(())
    }

    /// Make sure the admin master account exists, creating it when missing.
    ///
    /// # Returns
    /// - `Ok(true)` - Account was created
    /// - `Ok(false)` - Account already existed
    pub async fn ensure_admin_master(&self, password: &str) -> Result<bool, Error> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.get(permission::ADMIN_MASTER_ID).await?.is_some()
            || user_repo
                .get_by_username(permission::ADMIN_MASTER_USERNAME)
                .await?
                .is_some()
        {
            return Ok(false);
        }

        let password_hash = password::hash_password(password)?;
        let admin = user_repo
            .create(
                ADMIN_MASTER_NAME.to_string(),
                permission::ADMIN_MASTER_USERNAME.to_string(),
                password_hash,
                UserLevel::Administrator,
            )
            .await?;

        tracing::info!(user_id = %admin.id, "Created admin master account");

        Ok(true)
    }

    async fn to_dto(&self, user: UserModel) -> Result<UserDto, Error> {
        let mut associations = UserRepository::new(self.db)
            .get_associated_aircraft_ids(&[user.id])
            .await?;
        let aircraft = associations.remove(&user.id).unwrap_or_default();

        Ok(user_dto(user, aircraft))
    }

    async fn to_dtos(&self, users: Vec<UserModel>) -> Result<Vec<UserDto>, Error> {
        let user_ids: Vec<i32> = users.iter().map(|user| user.id).collect();
        let mut associations = UserRepository::new(self.db)
            .get_associated_aircraft_ids(&user_ids)
            .await?;

        Ok(users
            .into_iter()
            .map(|user| {
                let aircraft = associations.remove(&user.id).unwrap_or_default();
                user_dto(user, aircraft)
            })
            .collect())
    }
}

/// Map a unique index violation on insert to [`ValidationError::UsernameTaken`].
///
/// Covers a concurrent create claiming the username after the lookup.
fn username_conflict(err: DbErr, username: String) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ValidationError::UsernameTaken(username).into()
        }
        _ => err.into(),
    }
}

fn user_dto(user: UserModel, associated_aircrafts: BTreeSet<String>) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name,
        username: user.username,
        level: user.level,
        level_name: user.level.label().to_string(),
        associated_aircrafts: associated_aircrafts.into_iter().collect(),
    }
}
