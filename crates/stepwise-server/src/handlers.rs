//! HTTP handlers for the generation and checklist endpoints.

use axum::extract::{Path, State};
use axum::Json;
use tracing::{info, instrument};

use stepwise_core::api::{GenerateRequest, GenerateResponse, SnapshotResponse, ToggleRequest};
use stepwise_core::ids::SubtaskId;
use stepwise_core::models::Subtask;
use stepwise_core::parse;
use stepwise_llm::prompt;

use crate::error::ApiError;
use crate::server::AppState;

/// `POST /api/generate-subtasks` — break a task into subtasks via the
/// completion API and persist the result in one transaction.
#[instrument(skip(state, req))]
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    if req.task.trim().is_empty() {
        return Err(ApiError::BadRequest("task is required".into()));
    }

    let messages = prompt::breakdown_messages(&req.task);
    let completion = state.provider.complete(&messages).await?;

    // Degenerate output parses to zero subtasks; the task is still recorded.
    let texts = parse::numbered_list(&completion);
    let (task, subtasks) = state.repo.create_with_subtasks(&req.task, &texts)?;

    info!(task_id = %task.id, subtask_count = subtasks.len(), "generated subtasks");

    Ok(Json(GenerateResponse { task, subtasks }))
}

/// `GET /api/tasks/latest` — the most recent task and its subtasks, for
/// client hydration on load.
#[instrument(skip(state))]
pub async fn latest_snapshot(
    State(state): State<AppState>,
) -> Result<Json<SnapshotResponse>, ApiError> {
    match state.repo.latest()? {
        Some(task) => {
            let subtasks = state.repo.subtasks_for(&task.id)?;
            Ok(Json(SnapshotResponse {
                task: Some(task),
                subtasks,
            }))
        }
        None => Ok(Json(SnapshotResponse::default())),
    }
}

/// `PATCH /api/subtasks/{id}` — set a subtask's completed flag.
#[instrument(skip(state, req))]
pub async fn set_completed(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<Subtask>, ApiError> {
    let subtask = state
        .repo
        .set_completed(&SubtaskId::from_raw(id), req.completed)?;
    Ok(Json(subtask))
}

/// `GET /health`.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}
