//! Production tasks of an aircraft.
//!
//! Editing a task's details, creating and deleting tasks, and reopening completed tasks
//! require edit rights on the aircraft. Moving a task forward is open to a wider group,
//! see [`permission::can_progress_task`].

pub mod lifecycle;


use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::task::{CreateTaskDto, TaskDto, UpdateTaskDto},
    server::{
        data::{
            aircraft::AircraftRepository,
            task::{TaskChanges, TaskRepository},
            user::UserRepository,
        },
        error::{resource::ResourceError, validation::ValidationError, Error},
        model::db::{TaskModel, UserModel},
        service::{
            aircraft::AircraftService,
            optional_text, required_text,
            task::lifecycle::{completion_date_for, Transition},
            unique_ids,
        },
        util::{permission, time},
    },
};

/// Shown in place of a responsible user that no longer resolves to an account.
pub const UNKNOWN_RESPONSIBLE_NAME: &str = "Equipe Geral";

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    /// Creates a new instance of [`TaskService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all tasks ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<TaskDto>, Error> {
        let tasks = TaskRepository::new(self.db).get_all().await?;

        self.to_dtos(tasks).await
    }

    /// Retrieves the tasks of an aircraft ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<TaskDto>)` - Tasks of the aircraft, possibly empty
    /// - `Err(Error::ResourceError)` - Aircraft does not exist
    pub async fn get_by_aircraft(&self, aircraft_id: &str) -> Result<Vec<TaskDto>, Error> {
        AircraftService::new(self.db).get_existing(aircraft_id).await?;

        let tasks = TaskRepository::new(self.db)
            .get_by_aircraft(aircraft_id)
            .await?;

        self.to_dtos(tasks).await
    }

    /// Creates a pending task dated today, with the acting user as creator.
    ///
    /// # Returns
    /// - `Ok(TaskDto)` - Created task
    /// - `Err(Error::ResourceError)` - Aircraft does not exist
    /// - `Err(Error::AuthError)` - Actor may not edit the aircraft
    /// - `Err(Error::ValidationError)` - Empty description or unknown responsible users
    pub async fn create(&self, actor: &UserModel, dto: CreateTaskDto) -> Result<TaskDto, Error> {
        let (aircraft, _) = AircraftService::new(self.db)
            .get_editable(actor, &dto.aircraft_id, "create tasks for this aircraft")
            .await?;

        let description = required_text(dto.description, "description")?;
        let responsible_ids = unique_ids(&dto.responsible_user_ids);
        self.validate_users(&responsible_ids).await?;

        let txn = self.db.begin().await?;
        let task_repo = TaskRepository::new(&txn);
        let task = task_repo
            .create(
                &aircraft.id,
                description,
                dto.due_date,
                time::today(),
                Some(actor.id),
            )
            .await?;
        task_repo.set_responsibles(task.id, &responsible_ids).await?;
        txn.commit().await?;

        tracing::info!(
            task_id = %task.id,
            aircraft_id = %task.aircraft_id,
            created_by = %actor.id,
            "Created task"
        );

        self.to_dto(task).await
    }

    /// Applies a partial update, including status changes.
    ///
    /// # Returns
    /// - `Ok(TaskDto)` - Updated task
    /// - `Err(Error::ResourceError)` - Task does not exist
    /// - `Err(Error::AuthError)` - Actor may not make this change
    /// - `Err(Error::ValidationError)` - Invalid status transition or field values
    pub async fn update(
        &self,
        actor: &UserModel,
        task_id: i32,
        dto: UpdateTaskDto,
    ) -> Result<TaskDto, Error> {
        let task_repo = TaskRepository::new(self.db);
        let Some(task) = task_repo.get(task_id).await? else {
            return Err(ResourceError::TaskNotFound(task_id).into());
        };

        let engineer_ids = AircraftRepository::new(self.db)
            .get_engineer_ids(&task.aircraft_id)
            .await?;
        let can_edit = permission::can_edit_aircraft(actor, &engineer_ids);

        if dto.edits_details() {
            permission::require(can_edit, actor, "edit this task")?;
        }

        let status = match dto.status {
            Some(new_status) => match lifecycle::classify(task.status, new_status)? {
                None => None,
                Some(Transition::Progress) => {
                    let responsible_ids = task_repo.get_responsible_ids(task.id).await?;
                    permission::require(
                        permission::can_progress_task(actor, &responsible_ids, can_edit),
                        actor,
                        "progress this task",
                    )?;
                    Some(new_status)
                }
                Some(Transition::Reopen) => {
                    permission::require(can_edit, actor, "reopen this task")?;
                    Some(new_status)
                }
            },
            None => None,
        };

        let responsible_ids = match dto.responsible_user_ids {
            Some(ids) => {
                let ids = unique_ids(&ids);
                self.validate_users(&ids).await?;
                Some(ids)
            }
            None => None,
        };

        let changes = TaskChanges {
            description: optional_text(dto.description, "description")?,
            due_date: dto.due_date,
            status: status.map(|status| (status, completion_date_for(status, time::today()))),
        };
        let previous_status = task.status;

        let txn = self.db.begin().await?;
        let task_repo = TaskRepository::new(&txn);
        let task = task_repo.update(task, changes).await?;
        if let Some(ids) = &responsible_ids {
            task_repo.set_responsibles(task.id, ids).await?;
        }
        txn.commit().await?;

        if previous_status != task.status {
            tracing::info!(
                task_id = %task.id,
                user_id = %actor.id,
                from = ?previous_status,
                to = ?task.status,
                "Task status changed"
            );
        }

        self.to_dto(task).await
    }

    /// Deletes a task.
    pub async fn delete(&self, actor: &UserModel, task_id: i32) -> Result<(), Error> {
        let Some(task) = TaskRepository::new(self.db).get(task_id).await? else {
            return Err(ResourceError::TaskNotFound(task_id).into());
        };

        AircraftService::new(self.db)
            .get_editable(actor, &task.aircraft_id, "delete tasks of this aircraft")
            .await?;

        let txn = self.db.begin().await?;
        TaskRepository::new(&txn).delete(task_id).await?;
        txn.commit().await?;

        tracing::info!(task_id = %task_id, deleted_by = %actor.id, "Deleted task");

        Ok(())
    }

    async fn validate_users(&self, user_ids: &[i32]) -> Result<(), Error> {
        let users = UserRepository::new(self.db).get_many(user_ids).await?;

        if let Some(missing) = user_ids
            .iter()
            .find(|id| !users.iter().any(|user| user.id == **id))
        {
            return Err(ValidationError::UnknownUser(*missing).into());
        }

        Ok(())
    }

    async fn to_dto(&self, task: TaskModel) -> Result<TaskDto, Error> {
        let mut dtos = self.to_dtos(vec![task]).await?;

        dtos.pop()
            .ok_or_else(|| Error::InternalError("Task vanished while building response".to_string()))
    }

    async fn to_dtos(&self, tasks: Vec<TaskModel>) -> Result<Vec<TaskDto>, Error> {
        let task_ids: Vec<i32> = tasks.iter().map(|task| task.id).collect();
        let mut responsibles = TaskRepository::new(self.db)
            .get_responsible_ids_for_many(&task_ids)
            .await?;

        let mut user_ids: Vec<i32> = responsibles.values().flatten().copied().collect();
        user_ids.sort_unstable();
        user_ids.dedup();
        let names: HashMap<i32, String> = UserRepository::new(self.db)
            .get_many(&user_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user.name))
            .collect();

        Ok(tasks
            .into_iter()
            .map(|task| {
                let responsible_ids = responsibles.remove(&task.id).unwrap_or_default();
                task_dto(task, responsible_ids, &names)
            })
            .collect())
    }
}

fn task_dto(task: TaskModel, responsible_ids: Vec<i32>, names: &HashMap<i32, String>) -> TaskDto {
    let responsible_user_names = responsible_ids
        .iter()
        .map(|id| {
            names
                .get(id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_RESPONSIBLE_NAME.to_string())
        })
        .collect();

    TaskDto {
        id: task.id,
        aircraft_id: task.aircraft_id,
        description: task.description,
        status: task.status,
        responsible_user_ids: responsible_ids,
        responsible_user_names,
        due_date: task.due_date,
        creation_date: task.creation_date,
        completion_date: task.completion_date,
        creator_id: task.creator_id,
    }
}
