//! Get superterms tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::search::TermSearchEngine;
use crate::server::json_text_response;
use crate::tools::{optional_count, required_str};
use crate::types::McpResult;

/// Tool for listing the `is_a` ancestors of a term
pub struct GetSupertermsTool {
    engine: Arc<TermSearchEngine>,
}

impl GetSupertermsTool {
    pub fn new(engine: Arc<TermSearchEngine>) -> Self {
        Self { engine }
    }
}

impl Tool for GetSupertermsTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "get_superterms".to_string(),
            description: "List ancestors of a term following is_a links, optionally limited \
                          to a number of hops. Unknown terms yield an empty list"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "termId": {
                        "type": "string",
                        "description": "Term identifier, e.g. HP:0001250"
                    },
                    "distance": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Maximum number of is_a hops (default: unbounded)"
                    }
                },
                "required": ["termId"]
            }),
        }
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let term_id = required_str(&params, "termId")?;
        let distance = optional_count(&params, "distance")?;

        let superterms = self.engine.get_superterms(term_id, distance);
        json_text_response(&superterms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::sample_engine;

    fn ids(value: &Value) -> Vec<String> {
        let text = value["content"][0]["text"].as_str().unwrap();
        let briefs: Vec<Value> = serde_json::from_str(text).unwrap();
        briefs
            .iter()
            .map(|b| b["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_get_superterms() {
        let tool = GetSupertermsTool::new(sample_engine());

        let value = tool.execute(json!({"termId": "HP:0001824", "distance": 1})).unwrap();
        assert_eq!(ids(&value), vec!["HP:0004323"]);

        let value = tool.execute(json!({"termId": "HP:0001824"})).unwrap();
        assert_eq!(ids(&value), vec!["HP:0004323", "HP:0000001"]);

        let value = tool.execute(json!({"termId": "HP:0001824", "distance": 0})).unwrap();
        assert!(ids(&value).is_empty());
    }

    #[test]
    fn test_get_superterms_unknown_and_invalid() {
        let tool = GetSupertermsTool::new(sample_engine());

        let value = tool.execute(json!({"termId": "nope"})).unwrap();
        assert!(ids(&value).is_empty());

        assert!(tool.execute(json!({"termId": "HP:0001824", "distance": -1})).is_err());
    }
}
