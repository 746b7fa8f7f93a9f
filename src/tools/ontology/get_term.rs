//! Get term tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::search::TermSearchEngine;
use crate::server::{error_response, json_text_response};
use crate::tools::required_str;
use crate::types::McpResult;

/// Tool for fetching the full record of a single term
pub struct GetTermTool {
    engine: Arc<TermSearchEngine>,
}

impl GetTermTool {
    pub fn new(engine: Arc<TermSearchEngine>) -> Self {
        Self { engine }
    }
}

impl Tool for GetTermTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "get_term".to_string(),
            description: "Get the full record of a term: name, definition, synonyms, parents \
                          and cross-references"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "termId": {
                        "type": "string",
                        "description": "Term identifier, e.g. HP:0001250"
                    }
                },
                "required": ["termId"]
            }),
        }
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let term_id = required_str(&params, "termId")?;
        match self.engine.get_term(term_id) {
            Some(term) => json_text_response(term),
            None => Ok(error_response(format!("Term not found: {}", term_id))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::sample_engine;

    #[test]
    fn test_get_term() {
        let tool = GetTermTool::new(sample_engine());
        let value = tool.execute(json!({"termId": "HP:0001824"})).unwrap();
        let term: Value =
            serde_json::from_str(value["content"][0]["text"].as_str().unwrap()).unwrap();

        assert_eq!(term["name"], "Weight loss");
        assert_eq!(term["definition"], "Rapid decrease in body mass.");
        assert_eq!(term["parents"], json!(["HP:0004323"]));
        assert!(value.get("isError").is_none());
    }

    #[test]
    fn test_get_term_unknown() {
        let tool = GetTermTool::new(sample_engine());
        let value = tool.execute(json!({"termId": "HP:9999999"})).unwrap();
        assert_eq!(value["isError"], true);
    }
}
