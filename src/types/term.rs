//! Term types for the ontology store

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scope of a synonym as declared in the ontology file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SynonymScope {
    Exact,
    Broad,
    Narrow,
    #[default]
    Related,
}

impl SynonymScope {
    /// Parse an OBO scope keyword (case-sensitive, as the format requires)
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "EXACT" => Some(SynonymScope::Exact),
            "BROAD" => Some(SynonymScope::Broad),
            "NARROW" => Some(SynonymScope::Narrow),
            "RELATED" => Some(SynonymScope::Related),
            _ => None,
        }
    }
}

impl fmt::Display for SynonymScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            SynonymScope::Exact => "EXACT",
            SynonymScope::Broad => "BROAD",
            SynonymScope::Narrow => "NARROW",
            SynonymScope::Related => "RELATED",
        };
        f.write_str(keyword)
    }
}

/// Alternate textual description of a term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    pub description: String,
    #[serde(default)]
    pub scope: SynonymScope,
}

impl Synonym {
    /// Create a synonym with the default (RELATED) scope
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            scope: SynonymScope::default(),
        }
    }

    /// Create a synonym with an explicit scope
    pub fn with_scope(description: impl Into<String>, scope: SynonymScope) -> Self {
        Self {
            description: description.into(),
            scope,
        }
    }
}

/// Single ontology concept
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub synonyms: Vec<Synonym>,
    #[serde(default)]
    pub obsolete: bool,
    /// Direct `is_a` parents, in declaration order
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(rename = "altIds", default, skip_serializing_if = "Vec::is_empty")]
    pub alt_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub xrefs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "replacedBy", default, skip_serializing_if = "Vec::is_empty")]
    pub replaced_by: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consider: Vec<String>,
}

impl Term {
    /// Create a term with an id and a name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Brief (id, name) view of this term
    pub fn brief(&self) -> TermBrief {
        TermBrief {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }

    /// Iterate over synonym descriptions in declaration order
    pub fn synonym_descriptions(&self) -> impl Iterator<Item = &str> {
        self.synonyms.iter().map(|s| s.description.as_str())
    }
}

/// Identifier and display name of a term
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermBrief {
    pub id: String,
    pub name: String,
}

impl TermBrief {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Metadata from the header frame of an OBO file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyHeader {
    #[serde(rename = "formatVersion", skip_serializing_if = "Option::is_none")]
    pub format_version: Option<String>,
    #[serde(rename = "dataVersion", skip_serializing_if = "Option::is_none")]
    pub data_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ontology: Option<String>,
    #[serde(rename = "defaultNamespace", skip_serializing_if = "Option::is_none")]
    pub default_namespace: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_keywords() {
        assert_eq!(SynonymScope::from_keyword("EXACT"), Some(SynonymScope::Exact));
        assert_eq!(SynonymScope::from_keyword("exact"), None);
        assert_eq!(SynonymScope::Narrow.to_string(), "NARROW");
    }

    #[test]
    fn test_term_serializes_without_empty_extras() {
        let mut term = Term::new("HP:0008915", "Obesity");
        term.synonyms.push(Synonym::with_scope("truncal obesity", SynonymScope::Exact));

        let value = serde_json::to_value(&term).unwrap();
        assert_eq!(value["id"], "HP:0008915");
        assert_eq!(value["synonyms"][0]["scope"], "EXACT");
        assert!(value.get("altIds").is_none());
        assert!(value.get("comment").is_none());
    }
}
