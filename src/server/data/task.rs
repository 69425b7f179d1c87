use std::collections::HashMap;

use chrono::NaiveDate;
use entity::sea_orm_active_enums::TaskStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::TaskModel;

/// Partial update of a task, `None` leaves a column unchanged
#[derive(Default)]
pub struct TaskChanges {
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    /// New status together with the completion date that goes with it
    pub status: Option<(TaskStatus, Option<NaiveDate>)>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.due_date.is_none() && self.status.is_none()
    }
}

pub struct TaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskRepository<'a, C> {
    /// Creates a new instance of [`TaskRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending task
    pub async fn create(
        &self,
        aircraft_id: &str,
        description: String,
        due_date: NaiveDate,
        creation_date: NaiveDate,
        creator_id: Option<i32>,
    ) -> Result<TaskModel, DbErr> {
        let task = entity::task::ActiveModel {
            aircraft_id: ActiveValue::Set(aircraft_id.to_string()),
            description: ActiveValue::Set(description),
            status: ActiveValue::Set(TaskStatus::Pending),
            due_date: ActiveValue::Set(due_date),
            creation_date: ActiveValue::Set(creation_date),
            completion_date: ActiveValue::Set(None),
            creator_id: ActiveValue::Set(creator_id),
            ..Default::default()
        };

        task.insert(self.db).await
    }

    pub async fn get(&self, task_id: i32) -> Result<Option<TaskModel>, DbErr> {
        entity::prelude::Task::find_by_id(task_id).one(self.db).await
    }

    /// Get all tasks ordered by ID
    pub async fn get_all(&self) -> Result<Vec<TaskModel>, DbErr> {
        entity::prelude::Task::find()
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await
    }

    /// Get the tasks of an aircraft ordered by ID
    pub async fn get_by_aircraft(&self, aircraft_id: &str) -> Result<Vec<TaskModel>, DbErr> {
        entity::prelude::Task::find()
            .filter(entity::task::Column::AircraftId.eq(aircraft_id))
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await
    }

    /// Apply a partial update to a task already loaded by the caller
    pub async fn update(&self, task: TaskModel, changes: TaskChanges) -> Result<TaskModel, DbErr> {
        if changes.is_empty() {
            return Ok(task);
        }

        let mut task_am = task.into_active_model();
        if let Some(description) = changes.description {
            task_am.description = ActiveValue::Set(description);
        }
        if let Some(due_date) = changes.due_date {
            task_am.due_date = ActiveValue::Set(due_date);
        }
        if let Some((status, completion_date)) = changes.status {
            task_am.status = ActiveValue::Set(status);
            task_am.completion_date = ActiveValue::Set(completion_date);
        }

        task_am.update(self.db).await
    }

    /// Deletes a task along with its responsible user links
    pub async fn delete(&self, task_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Task::delete_by_id(task_id)
            .exec(self.db)
            .await
    }

    /// Get the IDs of a task's responsible users, ascending
    pub async fn get_responsible_ids(&self, task_id: i32) -> Result<Vec<i32>, DbErr> {
        Ok(self
            .get_responsible_ids_for_many(&[task_id])
            .await?
            .remove(&task_id)
            .unwrap_or_default())
    }

    /// Get the responsible user IDs of many tasks at once
    ///
    /// Tasks without responsible users are absent from the returned map.
    pub async fn get_responsible_ids_for_many(
        &self,
        task_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        let mut responsibles: HashMap<i32, Vec<i32>> = HashMap::new();
        if task_ids.is_empty() {
            return Ok(responsibles);
        }

        let links = entity::prelude::TaskResponsible::find()
            .filter(entity::task_responsible::Column::TaskId.is_in(task_ids.iter().copied()))
            .order_by_asc(entity::task_responsible::Column::UserId)
            .all(self.db)
            .await?;

        for link in links {
            responsibles.entry(link.task_id).or_default().push(link.user_id);
        }

        Ok(responsibles)
    }

    /// Replace the responsible users of a task
    pub async fn set_responsibles(&self, task_id: i32, user_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::TaskResponsible::delete_many()
            .filter(entity::task_responsible::Column::TaskId.eq(task_id))
            .exec(self.db)
            .await?;

        if user_ids.is_empty() {
            return Ok(());
        }

        let links = user_ids
            .iter()
            .map(|user_id| entity::task_responsible::ActiveModel {
                task_id: ActiveValue::Set(task_id),
                user_id: ActiveValue::Set(*user_id),
            });

        entity::prelude::TaskResponsible::insert_many(links)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}
