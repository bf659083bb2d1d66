use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use stepwise_core::errors::CompletionError;
use stepwise_core::provider::{ChatMessage, CompletionProvider};

/// Pre-programmed responses for deterministic testing without API calls.
#[derive(Clone, Debug)]
pub enum MockResponse {
    Text(String),
    Error(CompletionError),
}

impl MockResponse {
    pub fn text(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Mock provider that returns pre-programmed responses in sequence and
/// records the messages it was called with.
pub struct MockProvider {
    responses: Vec<MockResponse>,
    call_count: AtomicUsize,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockProvider {
    pub fn new(responses: Vec<MockResponse>) -> Self {
        Self {
            responses,
            call_count: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Messages passed to each `complete` call, in order.
    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        let idx = self.call_count.fetch_add(1, Ordering::Relaxed);
        self.calls.lock().push(messages.to_vec());

        match self.responses.get(idx) {
            Some(MockResponse::Text(text)) => Ok(text.clone()),
            Some(MockResponse::Error(e)) => Err(e.clone()),
            None => Err(CompletionError::InvalidRequest(format!(
                "MockProvider: no response configured for call {idx}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt;

    #[tokio::test]
    async fn text_response() {
        let mock = MockProvider::new(vec![MockResponse::text("1. One\n2. Two")]);
        let messages = prompt::breakdown_messages("anything");
        let out = mock.complete(&messages).await.unwrap();
        assert_eq!(out, "1. One\n2. Two");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn error_response() {
        let mock = MockProvider::new(vec![MockResponse::Error(
            CompletionError::AuthenticationFailed("bad key".into()),
        )]);
        let result = mock.complete(&[]).await;
        assert!(matches!(
            result,
            Err(CompletionError::AuthenticationFailed(_))
        ));
    }

    #[tokio::test]
    async fn sequential_responses() {
        let mock = MockProvider::new(vec![
            MockResponse::text("first"),
            MockResponse::text("second"),
        ]);
        assert_eq!(mock.complete(&[]).await.unwrap(), "first");
        assert_eq!(mock.complete(&[]).await.unwrap(), "second");
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn exhausted_responses() {
        let mock = MockProvider::new(vec![MockResponse::text("only one")]);
        let _ = mock.complete(&[]).await;
        assert!(mock.complete(&[]).await.is_err());
    }

    #[tokio::test]
    async fn records_call_messages() {
        let mock = MockProvider::new(vec![MockResponse::text("ok")]);
        let messages = prompt::breakdown_messages("Plan a trip");
        let _ = mock.complete(&messages).await;

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0][1].content, "Plan a trip");
    }

    #[test]
    fn provider_properties() {
        let mock = MockProvider::new(vec![]);
        assert_eq!(mock.name(), "mock");
        assert_eq!(mock.model(), "mock-model");
    }
}
