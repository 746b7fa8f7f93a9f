//! Term endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{decode_param, ApiError, ApiResponse};
use crate::api::AppState;

/// Query parameters for ancestor lookup
#[derive(Debug, Deserialize)]
pub struct SupertermParams {
    /// Maximum number of `is_a` hops (default: unbounded)
    pub distance: Option<usize>,
}

/// GET /api/terms/:id - Get a single term
pub async fn get_term(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let term_id = decode_param(&id);

    match state.engine.get_term(&term_id) {
        Some(term) => (StatusCode::OK, Json(ApiResponse::new(term))).into_response(),
        None => {
            let error = ApiError::not_found(format!("Term '{}' not found", term_id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}

/// GET /api/terms/:id/superterms - Ancestors of a term
pub async fn get_superterms(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<SupertermParams>,
) -> impl IntoResponse {
    let term_id = decode_param(&id);

    let superterms = state.engine.get_superterms(&term_id, params.distance);
    let total = superterms.len();
    (StatusCode::OK, Json(ApiResponse::with_total(superterms, total))).into_response()
}
