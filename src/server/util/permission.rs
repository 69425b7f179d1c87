//! Access rules for users and aircraft, including the tasks of an aircraft.
//!
//! Levels are ordered by [`ACCESS_HIERARCHY`]. On top of the level checks, an aircraft
//! and everything attached to it may be edited by administrators and by the engineers
//! associated with that aircraft.

pub use entity::sea_orm_active_enums::ACCESS_HIERARCHY;
use entity::sea_orm_active_enums::UserLevel;

use crate::server::{
    error::{auth::AuthError, Error},
    model::db::UserModel,
};

/// ID of the bootstrap administrator account.
pub const ADMIN_MASTER_ID: i32 = 1;

/// Username of the bootstrap administrator account.
pub const ADMIN_MASTER_USERNAME: &str = "admin";

/// Returns true for the admin master account, which cannot be deleted or demoted.
pub fn is_admin_master(user: &UserModel) -> bool {
    user.id == ADMIN_MASTER_ID || user.username == ADMIN_MASTER_USERNAME
}

pub fn is_admin(user: &UserModel) -> bool {
    user.level == UserLevel::Administrator
}

/// Returns true if the user may edit an aircraft with the given associated engineers.
///
/// Covers the aircraft's own details and its tasks, parts, and tests.
pub fn can_edit_aircraft(user: &UserModel, engineer_ids: &[i32]) -> bool {
    match user.level {
        UserLevel::Administrator => true,
        UserLevel::Engineer => engineer_ids.contains(&user.id),
        UserLevel::Operator => false,
    }
}

/// Returns true if the user may move a task forward in its lifecycle.
///
/// # Arguments
/// - `user` - Acting user
/// - `responsible_ids` - Users responsible for the task
/// - `can_edit` - Result of [`can_edit_aircraft`] for the task's aircraft
pub fn can_progress_task(user: &UserModel, responsible_ids: &[i32], can_edit: bool) -> bool {
    if can_edit || user.level == UserLevel::Engineer {
        return true;
    }

    user.level == UserLevel::Operator
        && (responsible_ids.is_empty() || responsible_ids.contains(&user.id))
}

/// Fail with 403 unless the user holds at least the required level.
pub fn require_level(
    user: &UserModel,
    required: UserLevel,
    action: &'static str,
) -> Result<(), Error> {
    if user.level.has_permission(required) {
        return Ok(());
    }

    tracing::debug!(
        user_id = %user.id,
        level = ?user.level,
        "Denied attempt to {}",
        action
    );

    Err(AuthError::InsufficientPermission(action).into())
}

/// Fail with 403 unless `allowed` holds.
pub fn require(allowed: bool, user: &UserModel, action: &'static str) -> Result<(), Error> {
    if allowed {
        return Ok(());
    }

    tracing::debug!(user_id = %user.id, "Denied attempt to {}", action);

    Err(AuthError::InsufficientPermission(action).into())
}
