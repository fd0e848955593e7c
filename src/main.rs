//! Screenwise host: serves the SSR shell, the WASM bundle, and health checks.

#![recursion_limit = "256"]
mod config;
mod routes;

use config::{ServerConfig, StartupError};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(config.socket_addr())
        .await
        .map_err(StartupError::Bind)?;

    tracing::info!(addr = %config.socket_addr(), "screenwise listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
