use entity::sea_orm_active_enums::{PartStatus, PartType};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartDto {
    pub id: i32,
    pub aircraft_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub part_type: PartType,
    pub supplier: String,
    pub status: PartStatus,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartDto {
    pub aircraft_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub part_type: PartType,
    pub supplier: String,
    pub status: PartStatus,
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePartDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub part_type: Option<PartType>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub status: Option<PartStatus>,
}

impl From<entity::part::Model> for PartDto {
    fn from(part: entity::part::Model) -> Self {
        Self {
            id: part.id,
            aircraft_id: part.aircraft_id,
            name: part.name,
            part_type: part.part_type,
            supplier: part.supplier,
            status: part.status,
        }
    }
}
