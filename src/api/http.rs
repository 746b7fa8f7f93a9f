//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use super::rest::{search, stats, terms};
use super::AppState;
use crate::search::TermSearchEngine;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/search", get(search::find_terms))
        .route("/api/terms/:id", get(terms::get_term))
        .route("/api/terms/:id/superterms", get(terms::get_superterms))
        .route("/api/stats", get(stats::get_stats))
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve the REST API until Ctrl-C
pub async fn serve(engine: Arc<TermSearchEngine>, addr: &str) -> std::io::Result<()> {
    let app = create_router(Arc::new(AppState::new(engine)));
    let listener = TcpListener::bind(addr).await?;

    info!("Listening on {}", listener.local_addr()?);
    info!("Health check at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        return;
    }
    info!("Shutting down HTTP server");
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
