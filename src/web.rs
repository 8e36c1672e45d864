use anyhow::{Context, Result};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::ServerConfig;

/// Full application router: the JSON API under `/api`, plus the optional frontend
pub fn app(server: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new().nest("/api", api::router());

    if let Some(dir) = &server.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    // Body limit stays outermost: `Cors` needs a `Default` response body
    app.layer(
        ServiceBuilder::new()
            .layer(RequestBodyLimitLayer::new(server.body_limit_bytes))
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
}

pub async fn run(server: &ServerConfig) -> Result<()> {
    let addr = format!("{}:{}", server.host, server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{}", addr);

    axum::serve(listener, app(server))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context(|| "Web server stopped unexpectedly")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", err);
    }
    tracing::info!("Shutting down web server");
}
