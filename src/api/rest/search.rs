//! Search endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{ApiError, ApiResponse};
use crate::api::AppState;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query string
    #[serde(default)]
    pub q: String,
    /// Maximum number of results (default: all)
    pub limit: Option<usize>,
}

/// GET /api/search - Ranked term search
pub async fn find_terms(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    if params.q.trim().is_empty() {
        let error = ApiError::bad_request("Query parameter 'q' is required");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    let results = state.engine.find_terms(&params.q, params.limit);
    let total = results.len();
    (StatusCode::OK, Json(ApiResponse::with_total(results, total))).into_response()
}
