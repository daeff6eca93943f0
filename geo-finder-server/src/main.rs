mod adapters;
mod application;
mod config;
mod domain;
mod infrastructure;

use adapters::{
    app_state::AppState,
    http::{HttpServer, HttpServerConfig},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = crate::config::Config::from_env()?;
    let http_config = HttpServerConfig {
        port: config.server_port,
    };
    let state = AppState::from_config(&config)?;

    let http_server = HttpServer::new(http_config, state).await?;
    http_server.run().await
}
