use aerocode::{
    model::task::{CreateTaskDto, TaskDto, UpdateTaskDto},
    server::{
        controller::{
            task::{create_task, delete_task, get_aircraft_tasks, get_tasks, update_task},
            util::json::ApiJson,
        },
        model::app::AppState,
    },
};
use aerocode_test_utils::prelude::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{TaskStatus, UserLevel};

use crate::controller::{login_as, read_json};

fn to_status(status: TaskStatus) -> ApiJson<UpdateTaskDto> {
    ApiJson(UpdateTaskDto {
        status: Some(status),
        ..Default::default()
    })
}

#[tokio::test]
/// Expect a task to go through its whole lifecycle with the completion date kept in sync
async fn task_lifecycle() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let engineer = test.user().insert_user("maria", UserLevel::Engineer).await?;
    let operator = test.user().insert_user("joao", UserLevel::Operator).await?;
    test.aircraft().insert_aircraft("A-100", &[engineer.id]).await?;
    let state: AppState = test.to_app_state();

    login_as(&test, engineer.id).await;
    let created = create_task(
        State(state.clone()),
        test.session.clone(),
        ApiJson(CreateTaskDto {
            aircraft_id: "A-100".to_string(),
            description: "Paint fuselage".to_string(),
            responsible_user_ids: vec![operator.id],
            due_date: NaiveDate::from_ymd_opt(2030, 2, 1).unwrap(),
        }),
    )
    .await;
    let task: TaskDto = read_json(created.unwrap().into_response()).await;
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.creator_id, Some(engineer.id));

    test.new_session();
    login_as(&test, operator.id).await;
    for status in [TaskStatus::InProgress, TaskStatus::Completed] {
        let result = update_task(
            State(state.clone()),
            test.session.clone(),
            Path(task.id),
            to_status(status),
        )
        .await;
        let updated: TaskDto = read_json(result.unwrap().into_response()).await;
        assert_eq!(updated.status, status);
    }

    let listed = get_tasks(State(state.clone()), test.session.clone()).await;
    let tasks: Vec<TaskDto> = read_json(listed.unwrap().into_response()).await;
    assert_eq!(tasks[0].completion_date, Some(Utc::now().date_naive()));

    let reopen = update_task(
        State(state),
        test.session.clone(),
        Path(task.id),
        to_status(TaskStatus::InProgress),
    )
    .await;
    assert_eq!(reopen.err().unwrap().into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when skipping from pending to completed
async fn rejects_skipped_transition() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().with_admin_master().build().await?;
    test.aircraft().insert_aircraft("A-100", &[]).await?;
    let task = test.task().insert_task("A-100", TaskStatus::Pending, &[]).await?;
    login_as(&test, 1).await;

    let state: AppState = test.to_app_state();
    let result = update_task(
        State(state),
        test.session.clone(),
        Path(task.id),
        to_status(TaskStatus::Completed),
    )
    .await;

    assert_eq!(result.err().unwrap().into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect tasks of one aircraft only, and 403 when an operator deletes one
async fn lists_and_protects_tasks() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tables().build().await?;
    let operator = test.user().insert_user("joao", UserLevel::Operator).await?;
    test.aircraft().insert_aircraft("A-100", &[]).await?;
    test.aircraft().insert_aircraft("B-200", &[]).await?;
    let task = test.task().insert_task("A-100", TaskStatus::Pending, &[]).await?;
    test.task().insert_task("B-200", TaskStatus::Pending, &[]).await?;
    login_as(&test, operator.id).await;
    let state: AppState = test.to_app_state();

    let result = get_aircraft_tasks(
        State(state.clone()),
        test.session.clone(),
        Path("A-100".to_string()),
    )
    .await;
    let tasks: Vec<TaskDto> = read_json(result.unwrap().into_response()).await;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, task.id);

    let delete = delete_task(State(state), test.session.clone(), Path(task.id)).await;
    assert_eq!(delete.err().unwrap().into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}
