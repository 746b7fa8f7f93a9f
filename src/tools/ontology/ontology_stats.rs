//! Ontology statistics tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::search::TermSearchEngine;
use crate::server::json_text_response;
use crate::types::McpResult;

/// Tool reporting term counts, header metadata and cache statistics
pub struct OntologyStatsTool {
    engine: Arc<TermSearchEngine>,
}

impl OntologyStatsTool {
    pub fn new(engine: Arc<TermSearchEngine>) -> Self {
        Self { engine }
    }
}

impl Tool for OntologyStatsTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "ontology_stats".to_string(),
            description: "Report term counts, ontology header metadata and query cache statistics"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    fn execute(&self, _params: Value) -> McpResult<Value> {
        json_text_response(&self.engine.stats())
    }
}
