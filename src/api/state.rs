//! HTTP application state

use std::sync::Arc;

use crate::search::TermSearchEngine;

/// Shared state for REST handlers
pub struct AppState {
    /// The search engine over the loaded ontology
    pub engine: Arc<TermSearchEngine>,
}

impl AppState {
    pub fn new(engine: Arc<TermSearchEngine>) -> Self {
        Self { engine }
    }
}
