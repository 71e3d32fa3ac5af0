//! Medika Server — application entry point.

mod auth_gate;
mod config;
mod error;
mod handlers;
mod routes;
mod state;

use medika_db::DbManager;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("medika=info".parse().unwrap()),
        )
        .json()
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server exited with error");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let manager = DbManager::connect(&config.db).await?;
    manager.migrate().await?;

    let state = AppState::new(&manager, config.auth.clone());
    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Starting Medika server");

    axum::serve(listener, app).await?;
    Ok(())
}
