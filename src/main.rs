use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};

use task_service::config::Config;
use task_service::routes;
use task_service::state::AppState;
use task_service::store::MySqlTaskStore;
use task_service::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config first so a RUST_LOG from .env is visible to the subscriber.
    let config = Config::from_env()?;
    telemetry::init();

    let store = match MySqlTaskStore::connect(&config).await {
        Ok(store) => {
            info!("Connected to MySQL database");
            store
        }
        Err(e) => {
            error!("Error connecting to MySQL database: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState {
        store: Arc::new(store),
    };

    let app = routes::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.addr()))?;

    info!("Server started on port {}", config.port);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
