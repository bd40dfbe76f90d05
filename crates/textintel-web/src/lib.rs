//! textintel web server
//!
//! Axum-based HTTP server exposing the text intelligence endpoint.

pub mod error;
pub mod routes;
pub mod state;

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use textintel_core::TextIntelligenceProvider;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Listener and CORS settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Port of the frontend dev server allowed through CORS.
    pub frontend_port: u16,
    /// App manifest served by `/api/metadata`.
    pub metadata_path: PathBuf,
}

/// CORS policy admitting the local frontend only.
pub fn cors_layer(frontend_port: u16) -> CorsLayer {
    let origins: Vec<HeaderValue> = ["localhost", "127.0.0.1"]
        .iter()
        .filter_map(|host| format!("http://{}:{}", host, frontend_port).parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Largest request body accepted, in bytes.
pub const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Create the application router.
pub fn create_router(state: AppState, frontend_port: u16) -> Router {
    Router::new()
        .route("/text-intelligence/analyze", post(routes::analyze::analyze))
        .route("/health", get(routes::system::health))
        .route("/api/metadata", get(routes::system::metadata))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(frontend_port))
        .with_state(state)
}

/// Run the web server until Ctrl+C.
pub async fn run_server(
    provider: Arc<dyn TextIntelligenceProvider>,
    config: &ServerConfig,
) -> Result<()> {
    let state = AppState::new(provider, config.metadata_path.clone());
    let app = create_router(state, config.frontend_port);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c()))
        .await
        .context("HTTP server error")?;

    Ok(())
}

/// Resolve once `signal` fires. If the signal listener could not be
/// installed, never resolve so the server keeps running.
pub async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("Web server shutting down"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
