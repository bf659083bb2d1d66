//! Checklist state container. All mutation goes through `apply`, keeping
//! the idle → loading → ready/failed progression testable without any I/O.

use serde::{Deserialize, Serialize};

use stepwise_core::ids::SubtaskId;
use stepwise_core::models::{Subtask, Task};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// User-facing notices. The client never inspects specific upstream error
/// kinds; every failure collapses to one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    TaskRequired,
    GenerateFailed,
    UpdateFailed,
    FetchFailed,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChecklistState {
    pub phase: Phase,
    pub task: Option<Task>,
    pub subtasks: Vec<Subtask>,
    pub notice: Option<Notice>,
}

#[derive(Clone, Debug)]
pub enum Action {
    /// Input was empty or whitespace-only; no request was made.
    SubmitRejected,
    SubmitStarted,
    GenerateSucceeded { task: Task, subtasks: Vec<Subtask> },
    GenerateFailed,
    /// Optimistic flip of one subtask's completed flag.
    SubtaskToggled { id: SubtaskId },
    /// The store rejected the update; the flip is reverted.
    ToggleRejected { id: SubtaskId },
    Hydrated { task: Option<Task>, subtasks: Vec<Subtask> },
    FetchFailed,
    NoticeDismissed,
}

impl ChecklistState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SubmitRejected => {
                self.notice = Some(Notice::TaskRequired);
            }
            Action::SubmitStarted => {
                self.phase = Phase::Loading;
                self.notice = None;
            }
            Action::GenerateSucceeded { task, subtasks } => {
                self.phase = Phase::Ready;
                self.task = Some(task);
                self.subtasks = subtasks;
                self.notice = None;
            }
            Action::GenerateFailed => {
                self.phase = Phase::Failed;
                self.notice = Some(Notice::GenerateFailed);
            }
            Action::SubtaskToggled { id } => {
                self.flip(&id);
            }
            Action::ToggleRejected { id } => {
                self.flip(&id);
                self.notice = Some(Notice::UpdateFailed);
            }
            Action::Hydrated { task, subtasks } => {
                self.phase = if task.is_some() {
                    Phase::Ready
                } else {
                    Phase::Idle
                };
                self.task = task;
                self.subtasks = subtasks;
                self.notice = None;
            }
            Action::FetchFailed => {
                self.notice = Some(Notice::FetchFailed);
            }
            Action::NoticeDismissed => {
                self.notice = None;
            }
        }
    }

    pub fn subtask(&self, id: &SubtaskId) -> Option<&Subtask> {
        self.subtasks.iter().find(|s| &s.id == id)
    }

    fn flip(&mut self, id: &SubtaskId) {
        if let Some(subtask) = self.subtasks.iter_mut().find(|s| &s.id == id) {
            subtask.completed = !subtask.completed;
        }
    }
}
