//! Factory functions for in-memory models.
//!
//! Suitable for unit tests of pure logic such as permission checks, where no database
//! is involved.

use chrono::Utc;
use entity::sea_orm_active_enums::UserLevel;

use crate::model::UserModel;

/// Create a user model with the given ID, username, and level.
///
/// The password hash is a placeholder and will not verify against any password.
pub fn mock_user_model(id: i32, username: &str, level: UserLevel) -> UserModel {
    UserModel {
        id,
        name: format!("Test {}", username),
        username: username.to_string(),
        password_hash: String::new(),
        level,
        created_at: Utc::now().naive_utc(),
    }
}
