use entity::sea_orm_active_enums::UserLevel;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub level: UserLevel,
    /// Display name of the access level, e.g. `Engenheiro`
    pub level_name: String,
    /// IDs of aircraft the user is assigned to as engineer or through a task
    pub associated_aircrafts: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PasswordValidityDto {
    pub valid: bool,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub name: String,
    pub username: String,
    pub level: UserLevel,
    /// Initial password, the configured default is used when omitted
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub level: Option<UserLevel>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub old_password: String,
    pub new_password: String,
}
