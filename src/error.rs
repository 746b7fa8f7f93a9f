//! Error types for ontology loading, configuration and export
//!
//! Lookups and searches never fail: unknown identifiers and degenerate
//! queries produce empty results. Errors only surface while building the
//! store, reading configuration, or writing export files.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for ontology operations
pub type Result<T> = std::result::Result<T, OntologyError>;

/// Main error type for the ontology store and its collaborators
#[derive(Error, Debug)]
pub enum OntologyError {
    #[error("Ontology file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Duplicate term identifier: {0}")]
    DuplicateTerm(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl OntologyError {
    /// Build a parse error for a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        OntologyError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Check if this error was caused by malformed ontology content
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            OntologyError::Parse { .. } | OntologyError::DuplicateTerm(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = OntologyError::parse(12, "missing id");
        assert_eq!(err.to_string(), "Parse error at line 12: missing id");
        assert!(err.is_malformed());
    }

    #[test]
    fn test_not_found_is_not_malformed() {
        let err = OntologyError::NotFound(PathBuf::from("hp.obo"));
        assert_eq!(err.to_string(), "Ontology file not found: hp.obo");
        assert!(!err.is_malformed());
    }
}
