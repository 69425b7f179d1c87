use chrono::NaiveDate;
use entity::sea_orm_active_enums::AircraftStatus;
use serde::{Deserialize, Serialize};

use crate::model::api::deserialize_nullable;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AircraftDto {
    pub id: String,
    pub model: String,
    #[serde(rename = "type")]
    pub aircraft_type: String,
    pub capacity: i32,
    /// Range in kilometers
    pub range: i32,
    pub client_name: Option<String>,
    pub delivery_deadline: Option<NaiveDate>,
    pub status: AircraftStatus,
    pub associated_engineers: Vec<i32>,
    pub created_by: Option<i32>,
    /// Whether the requesting user may edit this aircraft and its tasks, parts, and tests
    pub can_edit: bool,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAircraftDto {
    /// Project identifier such as `A-123`, generated when omitted
    #[serde(default)]
    pub id: Option<String>,
    pub model: String,
    #[serde(rename = "type")]
    pub aircraft_type: String,
    pub capacity: i32,
    pub range: i32,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub delivery_deadline: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<AircraftStatus>,
    #[serde(default)]
    pub associated_engineers: Vec<i32>,
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAircraftDto {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, rename = "type")]
    pub aircraft_type: Option<String>,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub range: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub client_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>, format = Date)]
    pub delivery_deadline: Option<Option<NaiveDate>>,
    #[serde(default)]
    pub status: Option<AircraftStatus>,
    #[serde(default)]
    pub associated_engineers: Option<Vec<i32>>,
}
