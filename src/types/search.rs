//! Search result types

use serde::{Deserialize, Serialize};

/// A single `find_terms` hit
///
/// Primary matches satisfy the query on the term name alone. Secondary
/// matches only satisfy it through synonyms or the definition, and carry
/// the snippet that matched best.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "match", rename_all = "lowercase")]
pub enum SearchResult {
    Primary {
        id: String,
        name: String,
    },
    Secondary {
        id: String,
        name: String,
        snippet: String,
    },
}

impl SearchResult {
    pub fn id(&self) -> &str {
        match self {
            SearchResult::Primary { id, .. } | SearchResult::Secondary { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SearchResult::Primary { name, .. } | SearchResult::Secondary { name, .. } => name,
        }
    }

    /// Snippet for secondary matches, `None` for primary ones
    pub fn snippet(&self) -> Option<&str> {
        match self {
            SearchResult::Primary { .. } => None,
            SearchResult::Secondary { snippet, .. } => Some(snippet),
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, SearchResult::Primary { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let primary = SearchResult::Primary {
            id: "HP:0008915".to_string(),
            name: "Obesity".to_string(),
        };
        let secondary = SearchResult::Secondary {
            id: "HP:0008915".to_string(),
            name: "Obesity".to_string(),
            snippet: "truncal obesity".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&primary).unwrap(),
            serde_json::json!({"match": "primary", "id": "HP:0008915", "name": "Obesity"})
        );
        assert_eq!(
            serde_json::to_value(&secondary).unwrap()["snippet"],
            "truncal obesity"
        );
        assert_eq!(secondary.snippet(), Some("truncal obesity"));
        assert!(primary.is_primary());
    }
}
