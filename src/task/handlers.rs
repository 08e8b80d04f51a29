//! Task HTTP handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::error::TaskError;
use crate::domain::{Task, TaskId};
use crate::gateway::helpers::{invalid_parameter, validation_message};
use crate::gateway::response::ApiResponse;
use crate::gateway::state::AppState;

/// Task creation / retitle request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TaskTitleRequest {
    /// Task title, 1 to 15 characters
    #[validate(length(min = 1, max = 15))]
    #[schema(example = "buy milk")]
    pub title: String,
}

/// Created task data
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateTaskData {
    pub title: String,
    /// RFC3339 creation time
    pub created_at: String,
    /// RFC3339 last-change time
    pub updated_at: String,
}

/// Retitled task data
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateTaskData {
    pub id: i64,
    pub title: String,
    /// RFC3339 last-change time
    pub updated_at: String,
}

/// Task listing entry
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskSummaryData {
    pub id: i64,
    pub title: String,
}

impl From<Task> for TaskSummaryData {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.inner(),
            title: task.title,
        }
    }
}

/// POST /api/v1/tasks
#[utoipa::path(
    post,
    path = "/api/v1/tasks",
    request_body = TaskTitleRequest,
    responses(
        (status = 201, description = "Task recorded", body = CreateTaskData),
        (status = 400, description = "Invalid title")
    ),
    tag = "Tasks"
)]
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TaskTitleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreateTaskData>>), (StatusCode, Json<ApiResponse<()>>)> {
    req.validate()
        .map_err(|errs| invalid_parameter(validation_message(&errs)))?;

    let task = state
        .create_task
        .execute(req.title)
        .await
        .map_err(|err| error_response("create_task", err))?;

    tracing::info!(id = %task.id, "task created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CreateTaskData {
            title: task.title,
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.to_rfc3339(),
        })),
    ))
}

/// PUT /api/v1/tasks/{task_id}
#[utoipa::path(
    put,
    path = "/api/v1/tasks/{task_id}",
    params(
        ("task_id" = i64, Path, description = "Task id")
    ),
    request_body = TaskTitleRequest,
    responses(
        (status = 200, description = "Task retitled", body = UpdateTaskData),
        (status = 400, description = "Invalid title"),
        (status = 404, description = "Task unknown")
    ),
    tag = "Tasks"
)]
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i64>,
    Json(req): Json<TaskTitleRequest>,
) -> Result<Json<ApiResponse<UpdateTaskData>>, (StatusCode, Json<ApiResponse<()>>)> {
    req.validate()
        .map_err(|errs| invalid_parameter(validation_message(&errs)))?;

    let task = state
        .update_task
        .execute(TaskId::new(task_id), req.title)
        .await
        .map_err(|err| error_response("update_task", err))?;

    Ok(Json(ApiResponse::success(UpdateTaskData {
        id: task.id.inner(),
        title: task.title,
        updated_at: task.updated_at.to_rfc3339(),
    })))
}

/// GET /api/v1/tasks
#[utoipa::path(
    get,
    path = "/api/v1/tasks",
    responses(
        (status = 200, description = "All tasks in creation order", body = [TaskSummaryData])
    ),
    tag = "Tasks"
)]
pub async fn find_all_tasks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<TaskSummaryData>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let tasks = state
        .find_all_tasks
        .execute()
        .await
        .map_err(|err| error_response("find_all_tasks", err))?;

    let data = tasks.into_iter().map(TaskSummaryData::from).collect();
    Ok(Json(ApiResponse::success(data)))
}

/// Map a use-case failure onto the envelope. Server-side faults log at
/// error, domain rejections at warn.
fn error_response(key: &str, err: TaskError) -> (StatusCode, Json<ApiResponse<()>>) {
    match &err {
        TaskError::Storage(_) | TaskError::Timeout => {
            tracing::error!(key, error = %err, "request failed")
        }
        _ => tracing::warn!(key, error = %err, "request rejected"),
    }
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ApiResponse::<()>::error(err.code(), err.to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_within_limit_passes() {
        let req = TaskTitleRequest {
            title: "a".repeat(15),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_title() {
        let req = TaskTitleRequest {
            title: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_overlong_title() {
        let req = TaskTitleRequest {
            title: "a".repeat(16),
        };
        let errs = req.validate().unwrap_err();
        assert!(validation_message(&errs).contains("title"));
    }

    #[test]
    fn test_summary_keeps_id_and_title() {
        let task = Task {
            id: TaskId::new(7),
            title: "buy milk".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let data = TaskSummaryData::from(task);
        assert_eq!(data.id, 7);
        assert_eq!(data.title, "buy milk");
    }
}
