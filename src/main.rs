use std::sync::Arc;

use stepwise_core::provider::CompletionProvider;
use stepwise_llm::OpenAiProvider;
use stepwise_store::Database;

mod config;

use config::Config;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting stepwise server");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let db = Database::open(&config.db_path).expect("Failed to open database");
    tracing::info!(path = %config.db_path.display(), "Database opened");

    let provider = Arc::new(OpenAiProvider::new(config.api_key, config.model.as_deref()));
    tracing::info!(model = provider.model(), "Completion provider configured");

    let server_config = stepwise_server::ServerConfig { port: config.port };
    let handle = stepwise_server::start(server_config, provider, db)
        .await
        .expect("Failed to start server");

    tracing::info!(port = handle.port, "stepwise server ready");

    // Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for ctrl+c");

    tracing::info!("Shutting down");
}
