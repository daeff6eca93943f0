use std::net::SocketAddr;

use anyhow::Context;
use axum::{http::StatusCode, routing::*, Router};
use tokio::net;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{
    app_state::AppState,
    lookup_api::{current_ip_handler, geolocation_handler},
    page::lookup_page,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub port: u16,
}

pub struct HttpServer {
    router: Router,
    listener: net::TcpListener,
}

impl HttpServer {
    pub async fn new(config: HttpServerConfig, state: AppState) -> anyhow::Result<Self> {
        let router = router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0, 0, 0, 0, 0], config.port));

        let listener = net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to listen on port {}", config.port))?;

        Ok(Self { router, listener })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self
            .listener
            .local_addr()
            .context("failed to read listener address")?;
        tracing::debug!("listening on {}", addr);
        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;
        Ok(())
    }
}

pub fn router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request<_>| {
            let uri = request.uri().to_string();
            tracing::info_span!("http_request", method = ?request.method(), uri)
        });

    Router::new()
        .route("/", get(lookup_page))
        .route("/health", get(health_route))
        .nest("/api", api_routes())
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/current-ip", get(current_ip_handler))
        .route("/geolocation/{ip}", get(geolocation_handler))
}

async fn health_route() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
