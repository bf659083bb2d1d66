//! Wire types for the HTTP surface, shared by server and client.

use serde::{Deserialize, Serialize};

use crate::models::{Subtask, Task};

/// Body of `POST /api/generate-subtasks`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub task: String,
}

/// Success envelope for generation. Carries the persisted records so the
/// client renders and toggles with server-assigned ids.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub task: Task,
    pub subtasks: Vec<Subtask>,
}

/// `GET /api/tasks/latest` — the most recent task and its subtasks, or an
/// empty snapshot when no task exists.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub task: Option<Task>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

/// Body of `PATCH /api/subtasks/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToggleRequest {
    pub completed: bool,
}

/// Uniform error envelope for all non-2xx responses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
