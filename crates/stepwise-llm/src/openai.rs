use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use stepwise_core::errors::CompletionError;
use stepwise_core::provider::{ChatMessage, CompletionProvider};

const API_URL: &str = "https://api.openai.com/v1/chat/completions";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Chat-completions client for the OpenAI API.
pub struct OpenAiProvider {
    client: Client,
    api_key: SecretString,
    model: String,
}

#[derive(Serialize)]
struct RequestBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenAiProvider {
    pub fn new(api_key: SecretString, model: Option<&str>) -> Self {
        Self {
            client: Client::builder()
                .connect_timeout(CONNECT_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
            api_key,
            model: model.unwrap_or(DEFAULT_MODEL).to_string(),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        let body = RequestBody {
            model: &self.model,
            messages,
        };

        let response = self
            .client
            .post(API_URL)
            .header(
                "authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            let message = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => CompletionError::AuthenticationFailed(message),
                429 => CompletionError::RateLimited { retry_after },
                400 => CompletionError::InvalidRequest(message),
                code => CompletionError::Api {
                    status: code,
                    message,
                },
            });
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| CompletionError::Network(format!("invalid response body: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyCompletion)
    }
}
