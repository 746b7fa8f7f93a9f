//! Term search engine
//!
//! Wraps an immutable [`Ontology`] with a preprocessed [`TermIndex`] and two
//! memoization caches, one for `find_terms` and one for `get_superterms`.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{ExplorerConfig, DEFAULT_CACHE_CAPACITY};
use crate::error::Result;
use crate::ontology::Ontology;
use crate::types::{OntologyHeader, SearchResult, Term, TermBrief};

use super::cache::{CacheStats, QueryCache};
use super::index::TermIndex;
use super::matcher::{self, MatchKind};

type QueryKey = (String, Option<usize>);

/// Search and ancestor lookup over a loaded ontology
pub struct TermSearchEngine {
    ontology: Arc<Ontology>,
    index: TermIndex,
    search_cache: QueryCache<QueryKey, Vec<SearchResult>>,
    superterm_cache: QueryCache<QueryKey, Vec<TermBrief>>,
}

/// Engine statistics for the stats tool and endpoint
#[derive(Debug, Clone, Serialize)]
pub struct EngineStats {
    pub terms: usize,
    #[serde(rename = "obsoleteTerms")]
    pub obsolete_terms: usize,
    pub header: OntologyHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "searchCache")]
    pub search_cache: CacheStats,
    #[serde(rename = "supertermCache")]
    pub superterm_cache: CacheStats,
}

impl TermSearchEngine {
    /// Create an engine with the default cache capacity
    pub fn new(ontology: Arc<Ontology>) -> Self {
        Self::with_cache_capacity(ontology, DEFAULT_CACHE_CAPACITY)
    }

    /// Create an engine, preprocessing every term up front
    pub fn with_cache_capacity(ontology: Arc<Ontology>, cache_capacity: usize) -> Self {
        let index = TermIndex::build(&ontology);
        info!(
            terms = index.len(),
            cache_capacity, "Preprocessed ontology terms"
        );

        Self {
            ontology,
            index,
            search_cache: QueryCache::new(cache_capacity),
            superterm_cache: QueryCache::new(cache_capacity),
        }
    }

    /// Load the configured ontology file and build an engine over it
    pub fn from_config(config: &ExplorerConfig) -> Result<Self> {
        let ontology = Ontology::from_file(&config.ontology_path)?;
        Ok(Self::with_cache_capacity(
            Arc::new(ontology),
            config.cache_capacity,
        ))
    }

    pub fn ontology(&self) -> &Arc<Ontology> {
        &self.ontology
    }

    /// Free-text search for terms
    ///
    /// Primary matches (all tokens in the name) come first, then secondary
    /// matches (all tokens in name, synonyms and definition of a term that
    /// has synonyms), each bucket in store order. Obsolete terms never
    /// match. Queries shorter than three characters after trimming return
    /// nothing. Results are memoized per exact `(query, limit)` pair.
    pub fn find_terms(&self, query: &str, limit: Option<usize>) -> Vec<SearchResult> {
        let key = (query.to_string(), limit);
        if let Some(cached) = self.search_cache.get(&key) {
            return cached;
        }

        let normalized = matcher::normalize(query);
        let results = if normalized != query {
            self.find_terms(normalized, limit)
        } else {
            self.scan(query, limit)
        };

        self.search_cache.put(key, results.clone());
        results
    }

    fn scan(&self, query: &str, limit: Option<usize>) -> Vec<SearchResult> {
        if matcher::is_degenerate(query) {
            return Vec::new();
        }

        let tokens = matcher::tokenize(query);
        let mut primary = Vec::new();
        let mut secondary = Vec::new();

        for entry in self.index.iter() {
            // Stop once primary matches alone fill the limit
            if limit.is_some_and(|limit| primary.len() >= limit) {
                break;
            }

            let term = &self.ontology.terms[entry.position];
            if term.obsolete {
                continue;
            }

            match matcher::classify(entry, term, &tokens) {
                Some(MatchKind::Primary) => primary.push(SearchResult::Primary {
                    id: entry.id.clone(),
                    name: entry.name.clone(),
                }),
                Some(MatchKind::Secondary(snippet)) => secondary.push(SearchResult::Secondary {
                    id: entry.id.clone(),
                    name: entry.name.clone(),
                    snippet: snippet.to_string(),
                }),
                None => {}
            }
        }

        debug!(
            query,
            primary = primary.len(),
            secondary = secondary.len(),
            "Scanned ontology"
        );

        let mut results = primary;
        results.append(&mut secondary);
        if let Some(limit) = limit {
            results.truncate(limit);
        }
        results
    }

    /// Ancestors of a term within `distance` hops (unbounded when `None`)
    ///
    /// Empty or unknown identifiers yield an empty list. Results come in
    /// breadth-first discovery order, which callers should not rely on.
    pub fn get_superterms(&self, term_id: &str, distance: Option<usize>) -> Vec<TermBrief> {
        let key = (term_id.to_string(), distance);
        if let Some(cached) = self.superterm_cache.get(&key) {
            return cached;
        }

        let superterms: Vec<TermBrief> = if term_id.is_empty() {
            Vec::new()
        } else {
            self.ontology
                .superclasses(term_id, distance)
                .into_iter()
                .map(Term::brief)
                .collect()
        };

        self.superterm_cache.put(key, superterms.clone());
        superterms
    }

    /// Full term record by identifier
    pub fn get_term(&self, term_id: &str) -> Option<&Term> {
        self.ontology.get(term_id)
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            terms: self.ontology.len(),
            obsolete_terms: self.ontology.obsolete_count(),
            header: self.ontology.header().clone(),
            source: self
                .ontology
                .source()
                .map(|p| p.display().to_string()),
            search_cache: self.search_cache.stats(),
            superterm_cache: self.superterm_cache.stats(),
        }
    }
}
