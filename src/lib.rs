//! HPO Explorer
//!
//! Search and ancestor lookup over OBO ontologies such as the Human
//! Phenotype Ontology, exposed through the Model Context Protocol (MCP),
//! a REST API and a command line.
//!
//! # Features
//!
//! - **Ranked search**: name matches first, then synonym/definition matches with a snippet
//! - **Ancestor lookup**: hop-bounded `is_a` traversal
//! - **Memoization**: LRU caches in front of both queries
//! - **Exports**: JSON and JSONL dumps of the loaded terms
//!
//! # Modules
//!
//! - `ontology`: OBO parsing, the immutable term store, traversal and exports
//! - `search`: Preprocessed index, matching rules and the search engine
//! - `types`: Core data structures (Term, Synonym, SearchResult)
//! - `protocol`: MCP and JSON-RPC protocol types
//! - `tools`: MCP tool implementations
//! - `server`: MCP server implementation
//! - `api`: REST endpoints over Axum
//! - `config`: Environment-driven configuration
//! - `error`: Typed errors for loading, configuration and export
//! - `utils`: Atomic file writes
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use hpo_explorer::{McpServer, Ontology, TermSearchEngine};
//! use hpo_explorer::tools::register_all_tools;
//!
//! fn main() -> hpo_explorer::McpResult<()> {
//!     let ontology = Ontology::from_file("hp.obo")?;
//!     let engine = Arc::new(TermSearchEngine::new(Arc::new(ontology)));
//!     let mut server = McpServer::new();
//!     register_all_tools(&mut server, engine);
//!     server.run()
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod ontology;
pub mod protocol;
pub mod search;
pub mod server;
pub mod tools;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::ExplorerConfig;
pub use error::{OntologyError, Result};
pub use ontology::Ontology;
pub use protocol::{McpTool, ServerInfo, Tool};
pub use search::{EngineStats, TermSearchEngine};
pub use server::McpServer;
pub use types::{
    McpResult, OntologyHeader, SearchResult, Synonym, SynonymScope, Term, TermBrief,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
