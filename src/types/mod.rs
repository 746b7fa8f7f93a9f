//! Data types for the HPO explorer
//!
//! This module contains the core data structures shared by the ontology
//! store, the search engine and the protocol surfaces.

mod search;
mod term;

pub use search::SearchResult;
pub use term::{OntologyHeader, Synonym, SynonymScope, Term, TermBrief};

/// Result type for MCP operations
pub type McpResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
