//! Term search with ranked substring matching and memoized lookups
//!
//! This module provides:
//! - A preprocessed full-text index built once per ontology
//! - Primary (name) and secondary (synonym/definition) matching rules
//! - Bounded LRU caches for search and ancestor queries
//! - `TermSearchEngine`, tying the above to an `Ontology`

mod cache;
mod engine;
mod index;
pub mod matcher;

pub use cache::{CacheStats, QueryCache};
pub use engine::{EngineStats, TermSearchEngine};
pub use index::{PreprocessedTerm, TermIndex};
