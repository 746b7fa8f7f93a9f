//! Find terms tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::search::TermSearchEngine;
use crate::server::json_text_response;
use crate::tools::{optional_count, required_str};
use crate::types::McpResult;

/// Tool for free-text search over term names, synonyms and definitions
pub struct FindTermsTool {
    engine: Arc<TermSearchEngine>,
}

impl FindTermsTool {
    pub fn new(engine: Arc<TermSearchEngine>) -> Self {
        Self { engine }
    }
}

impl Tool for FindTermsTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "find_terms".to_string(),
            description: "Search ontology terms by name, synonyms and definition. Name matches \
                          come first; synonym/definition matches carry a snippet of the best \
                          matching text"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Free text, at least 3 characters"
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Maximum number of results (default: all)"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let query = required_str(&params, "query")?;
        let limit = optional_count(&params, "limit")?;

        let results = self.engine.find_terms(query, limit);
        json_text_response(&results)
    }
}
