use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use stepwise_core::provider::CompletionProvider;
use stepwise_store::{Database, TaskRepo};

use crate::handlers;

/// Server configuration.
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8787 }
    }
}

/// Shared application state passed to Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
    pub repo: Arc<TaskRepo>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>, db: Database) -> Self {
        Self {
            provider,
            repo: Arc::new(TaskRepo::new(db)),
        }
    }
}

/// Build the Axum router with all routes. The permissive CORS layer also
/// answers OPTIONS pre-flights.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate-subtasks", post(handlers::generate))
        .route("/api/tasks/latest", get(handlers::latest_snapshot))
        .route("/api/subtasks/{id}", patch(handlers::set_completed))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Create and start the server. Returns a handle holding the bound port.
pub async fn start(
    config: ServerConfig,
    provider: Arc<dyn CompletionProvider>,
    db: Database,
) -> Result<ServerHandle, std::io::Error> {
    let state = AppState::new(provider, db);
    let router = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(port = local_addr.port(), "stepwise server started");

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    Ok(ServerHandle {
        port: local_addr.port(),
        _server: server_handle,
    })
}

/// Handle returned by `start()` — keeps the server task alive.
pub struct ServerHandle {
    pub port: u16,
    _server: tokio::task::JoinHandle<()>,
}
