use serde::{Deserialize, Serialize};

use crate::ids::{SubtaskId, TaskId};

/// A user-submitted task. Created once per generation request, never
/// updated or deleted in-app.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub created_at: String,
}

/// One actionable step derived from a task. `completed` is the only
/// mutable field; `position` is the parse-order ordinal used for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: SubtaskId,
    pub task_id: TaskId,
    pub text: String,
    pub completed: bool,
    pub position: u32,
}
