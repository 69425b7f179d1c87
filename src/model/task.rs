use chrono::NaiveDate;
use entity::sea_orm_active_enums::TaskStatus;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: i32,
    pub aircraft_id: String,
    pub description: String,
    pub status: TaskStatus,
    pub responsible_user_ids: Vec<i32>,
    pub responsible_user_names: Vec<String>,
    pub due_date: NaiveDate,
    pub creation_date: NaiveDate,
    /// Set if and only if the task is completed
    pub completion_date: Option<NaiveDate>,
    pub creator_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskDto {
    pub aircraft_id: String,
    pub description: String,
    #[serde(default)]
    pub responsible_user_ids: Vec<i32>,
    pub due_date: NaiveDate,
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskDto {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub responsible_user_ids: Option<Vec<i32>>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

impl UpdateTaskDto {
    /// Returns true if the update touches anything besides the status
    pub fn edits_details(&self) -> bool {
        self.description.is_some() || self.responsible_user_ids.is_some() || self.due_date.is_some()
    }
}
