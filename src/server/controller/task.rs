use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        task::{CreateTaskDto, TaskDto, UpdateTaskDto},
    },
    server::{
        controller::util::{get_user::get_user_from_session, json::ApiJson},
        error::Error,
        model::app::AppState,
        service::task::TaskService,
    },
};

pub static TASK_TAG: &str = "task";

/// List all tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = TASK_TAG,
    responses(
        (status = 200, description = "All tasks ordered by ID", body = Vec<TaskDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let tasks = TaskService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, axum::Json(tasks)))
}

/// List the tasks of an aircraft
#[utoipa::path(
    get,
    path = "/api/tasks/aircraft/{aircraft_id}",
    tag = TASK_TAG,
    params(("aircraft_id" = String, Path, description = "Aircraft ID")),
    responses(
        (status = 200, description = "Tasks of the aircraft ordered by ID", body = Vec<TaskDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_aircraft_tasks(
    State(state): State<AppState>,
    session: Session,
    Path(aircraft_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let tasks = TaskService::new(&state.db)
        .get_by_aircraft(&aircraft_id)
        .await?;

    Ok((StatusCode::OK, axum::Json(tasks)))
}

/// Create a pending task for an aircraft
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = TASK_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 200, description = "Created task", body = TaskDto),
        (status = 400, description = "Invalid fields or unknown responsible users", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to edit the aircraft", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<CreateTaskDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let task = TaskService::new(&state.db).create(&actor, dto).await?;

    Ok((StatusCode::OK, axum::Json(task)))
}

/// Update a task or move it through its lifecycle
///
/// Status moves one step at a time: `Pendente` to `Em Andamento` to `Concluída`, and a
/// completed task may be reopened to `Em Andamento`.
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Updated task", body = TaskDto),
        (status = 400, description = "Invalid fields or status transition", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to make this change", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
    ApiJson(dto): ApiJson<UpdateTaskDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let task = TaskService::new(&state.db)
        .update(&actor, task_id, dto)
        .await?;

    Ok((StatusCode::OK, axum::Json(task)))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task deleted", body = SuccessDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to edit the aircraft", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    TaskService::new(&state.db).delete(&actor, task_id).await?;

    Ok((StatusCode::OK, axum::Json(SuccessDto::ok())))
}
