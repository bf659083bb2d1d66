/// Errors surfaced by completion providers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CompletionError {
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("rate limited")]
    RateLimited { retry_after: Option<u64> },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion contained no choices")]
    EmptyCompletion,
}
