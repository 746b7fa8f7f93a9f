//! MCP Tools implementation
//!
//! Four tools, organized by category:
//! - Search tools (1): ranked term lookup
//! - Ontology tools (3): term details, ancestors, store statistics

pub mod ontology;
pub mod search;

use std::sync::Arc;

use serde_json::Value;

use crate::search::TermSearchEngine;
use crate::server::McpServer;
use crate::types::McpResult;

// Re-export all tools for convenience
pub use ontology::{GetSupertermsTool, GetTermTool, OntologyStatsTool};
pub use search::FindTermsTool;

/// Register all tools with the MCP server
pub fn register_all_tools(server: &mut McpServer, engine: Arc<TermSearchEngine>) {
    // Search tools (1)
    server.register_tool(Box::new(FindTermsTool::new(engine.clone())));

    // Ontology tools (3)
    server.register_tool(Box::new(GetTermTool::new(engine.clone())));
    server.register_tool(Box::new(GetSupertermsTool::new(engine.clone())));
    server.register_tool(Box::new(OntologyStatsTool::new(engine)));
}

/// Read an optional non-negative integer argument
pub(crate) fn optional_count(params: &Value, key: &str) -> McpResult<Option<usize>> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => match value.as_u64() {
            Some(n) => Ok(Some(usize::try_from(n)?)),
            None => Err(format!("'{}' must be a non-negative integer, got {}", key, value).into()),
        },
    }
}

/// Read a required string argument
pub(crate) fn required_str<'a>(params: &'a Value, key: &str) -> McpResult<&'a str> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("Missing required argument '{}'", key).into())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::ontology::Ontology;
    use crate::search::TermSearchEngine;

    pub const SAMPLE_OBO: &str = "format-version: 1.2
data-version: hp/releases/2024-01-01

[Term]
id: HP:0000001
name: All

[Term]
id: HP:0004323
name: Abnormality of body weight
synonym: \"Weight issue\" EXACT []
is_a: HP:0000001 ! All

[Term]
id: HP:0001824
name: Weight loss
def: \"Rapid decrease in body mass.\" []
synonym: \"Weight reduction\" EXACT []
is_a: HP:0004323 ! Abnormality of body weight

[Term]
id: HP:0000002
name: obsolete Weight term
is_obsolete: true
";

    pub fn sample_engine() -> Arc<TermSearchEngine> {
        let ontology = Ontology::from_obo_str(SAMPLE_OBO).unwrap();
        Arc::new(TermSearchEngine::new(Arc::new(ontology)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_all_tools() {
        let mut server = McpServer::new();
        register_all_tools(&mut server, test_support::sample_engine());
        assert_eq!(server.tool_count(), 4);
    }

    #[test]
    fn test_optional_count() {
        assert_eq!(optional_count(&json!({}), "limit").unwrap(), None);
        assert_eq!(optional_count(&json!({"limit": null}), "limit").unwrap(), None);
        assert_eq!(optional_count(&json!({"limit": 5}), "limit").unwrap(), Some(5));
        assert!(optional_count(&json!({"limit": -1}), "limit").is_err());
        assert!(optional_count(&json!({"limit": "ten"}), "limit").is_err());
    }
}
