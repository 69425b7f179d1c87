use chrono::{Days, Utc};
use entity::sea_orm_active_enums::TaskStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::TaskModel, TestContext};

impl TestContext {
    pub fn task<'a>(&'a mut self) -> TaskFixtures<'a> {
        TaskFixtures { context: self }
    }
}

pub struct TaskFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> TaskFixtures<'a> {
    /// Insert a task with the given status, due in 30 days.
    ///
    /// A completed task gets today as its completion date so the record stays consistent.
    pub async fn insert_task(
        &mut self,
        aircraft_id: &str,
        status: TaskStatus,
        responsible_ids: &[i32],
    ) -> Result<TaskModel, TestError> {
        let today = Utc::now().date_naive();
        let completion_date = (status == TaskStatus::Completed).then_some(today);

        let task = entity::prelude::Task::insert(entity::task::ActiveModel {
            aircraft_id: ActiveValue::Set(aircraft_id.to_string()),
            description: ActiveValue::Set("Install wiring harness".to_string()),
            status: ActiveValue::Set(status),
            due_date: ActiveValue::Set(today.checked_add_days(Days::new(30)).unwrap_or(today)),
            creation_date: ActiveValue::Set(today),
            completion_date: ActiveValue::Set(completion_date),
            creator_id: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?;

        for user_id in responsible_ids {
            entity::prelude::TaskResponsible::insert(entity::task_responsible::ActiveModel {
                task_id: ActiveValue::Set(task.id),
                user_id: ActiveValue::Set(*user_id),
            })
            .exec_without_returning(&self.context.db)
            .await?;
        }

        Ok(task)
    }
}
