use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::extractors::CurrentUser,
    error::{parse_id, ApiError, ApiSuccess},
    state::AppState,
    tasks::dto::{CreateTaskRequest, UpdateTaskRequest},
    tasks::repo_types::Task,
};

pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
}

#[instrument(skip(state, user))]
pub async fn list_tasks(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<ApiSuccess<Vec<Task>>, ApiError> {
    let tasks = Task::list_by_user(&state.db, user.id).await?;
    Ok(ApiSuccess(StatusCode::OK, tasks))
}

#[instrument(skip(state, user, payload))]
pub async fn create_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<ApiSuccess<Task>, ApiError> {
    let task = Task::create(&state.db, &payload.title, user.id).await?;
    info!(task_id = %task.id, user_id = %user.id, "task created");
    Ok(ApiSuccess(StatusCode::CREATED, task))
}

#[instrument(skip(state, user))]
pub async fn get_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<ApiSuccess<Task>, ApiError> {
    let id = parse_id(&id)?;
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task could not be found.".into()))?;

    // Existence is checked before ownership, so probing a missing id and
    // probing someone else's id are distinguishable by status.
    if task.user_id != user.id {
        warn!(task_id = %task.id, user_id = %user.id, "task access denied");
        return Err(ApiError::Unauthorized(
            "User is not authorized to access this task.".into(),
        ));
    }

    Ok(ApiSuccess(StatusCode::OK, task))
}

#[instrument(skip(state, user, payload))]
pub async fn update_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<ApiSuccess<Task>, ApiError> {
    let id = parse_id(&id)?;
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task could not be found.".into()))?;

    if task.user_id != user.id {
        warn!(task_id = %task.id, user_id = %user.id, "task update denied");
        return Err(ApiError::Unauthorized(
            "User is not authorized to update this task.".into(),
        ));
    }

    let updated = Task::update_title(&state.db, id, &payload.title)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task could not be found.".into()))?;

    info!(task_id = %updated.id, user_id = %user.id, "task updated");
    Ok(ApiSuccess(StatusCode::OK, updated))
}

#[instrument(skip(state, user))]
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<ApiSuccess<Task>, ApiError> {
    let id = parse_id(&id)?;
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task could not be found.".into()))?;

    if task.user_id != user.id {
        warn!(task_id = %task.id, user_id = %user.id, "task delete denied");
        return Err(ApiError::Unauthorized(
            "User is not authorized to delete this task.".into(),
        ));
    }

    let deleted = Task::delete(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task could not be found.".into()))?;

    info!(task_id = %deleted.id, user_id = %user.id, "task deleted");
    Ok(ApiSuccess(StatusCode::OK, deleted))
}
