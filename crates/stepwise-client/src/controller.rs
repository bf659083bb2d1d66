//! Bridges checklist state to the backend: submit, toggle, load.

use tracing::debug;

use stepwise_core::ids::SubtaskId;

use crate::backend::Backend;
use crate::state::{Action, ChecklistState};

pub struct Controller<B> {
    backend: B,
    state: ChecklistState,
}

impl<B: Backend> Controller<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: ChecklistState::default(),
        }
    }

    pub fn state(&self) -> &ChecklistState {
        &self.state
    }

    /// Submit a task description for breakdown. Whitespace-only input is
    /// rejected before any network call.
    pub async fn submit(&mut self, input: &str) {
        if input.trim().is_empty() {
            self.state.apply(Action::SubmitRejected);
            return;
        }

        self.state.apply(Action::SubmitStarted);
        match self.backend.generate(input).await {
            Ok(generated) => self.state.apply(Action::GenerateSucceeded {
                task: generated.task,
                subtasks: generated.subtasks,
            }),
            Err(e) => {
                debug!(error = %e, "generate request failed");
                self.state.apply(Action::GenerateFailed);
            }
        }
    }

    /// Toggle a subtask. The flip is applied optimistically and reverted
    /// if the store update fails.
    pub async fn toggle(&mut self, id: &SubtaskId) {
        let Some(completed) = self.state.subtask(id).map(|s| s.completed) else {
            return;
        };

        self.state.apply(Action::SubtaskToggled { id: id.clone() });
        if let Err(e) = self.backend.set_completed(id, !completed).await {
            debug!(error = %e, subtask_id = %id, "toggle update failed");
            self.state.apply(Action::ToggleRejected { id: id.clone() });
        }
    }

    /// Hydrate from the latest persisted task, clearing state when none
    /// exists.
    pub async fn load(&mut self) {
        match self.backend.latest().await {
            Ok(snapshot) => self.state.apply(Action::Hydrated {
                task: snapshot.task,
                subtasks: snapshot.subtasks,
            }),
            Err(e) => {
                debug!(error = %e, "snapshot fetch failed");
                self.state.apply(Action::FetchFailed);
            }
        }
    }
}
