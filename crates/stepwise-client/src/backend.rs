use async_trait::async_trait;
use serde::de::DeserializeOwned;

use stepwise_core::api::{
    ErrorResponse, GenerateRequest, GenerateResponse, SnapshotResponse, ToggleRequest,
};
use stepwise_core::ids::SubtaskId;
use stepwise_core::models::Subtask;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server error ({status}): {message}")]
    Status { status: u16, message: String },
}

/// Seam between the controller and the HTTP surface. Every mutation
/// returns a typed result the caller has to handle.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn generate(&self, task: &str) -> Result<GenerateResponse, BackendError>;

    async fn latest(&self) -> Result<SnapshotResponse, BackendError>;

    async fn set_completed(
        &self,
        id: &SubtaskId,
        completed: bool,
    ) -> Result<Subtask, BackendError>;
}

/// Backend implementation against the stepwise server.
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| status.to_string());
        return Err(BackendError::Status {
            status: status.as_u16(),
            message,
        });
    }
    response
        .json()
        .await
        .map_err(|e| BackendError::Transport(format!("invalid response body: {e}")))
}

#[async_trait]
impl Backend for HttpBackend {
    async fn generate(&self, task: &str) -> Result<GenerateResponse, BackendError> {
        let response = self
            .http
            .post(self.url("/api/generate-subtasks"))
            .json(&GenerateRequest {
                task: task.to_string(),
            })
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        decode(response).await
    }

    async fn latest(&self) -> Result<SnapshotResponse, BackendError> {
        let response = self
            .http
            .get(self.url("/api/tasks/latest"))
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        decode(response).await
    }

    async fn set_completed(
        &self,
        id: &SubtaskId,
        completed: bool,
    ) -> Result<Subtask, BackendError> {
        let response = self
            .http
            .patch(self.url(&format!("/api/subtasks/{id}")))
            .json(&ToggleRequest { completed })
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        decode(response).await
    }
}
