//! Statistics endpoint

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};

use super::ApiResponse;
use crate::api::AppState;

/// GET /api/stats - Term counts, header metadata and cache statistics
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::new(state.engine.stats()))
}
