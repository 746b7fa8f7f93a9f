//! Ontology store - in-memory term hierarchy
//!
//! Loads an OBO file once and keeps the terms in file order, an id index,
//! and `is_a` adjacency lists by position. The store is read-only after
//! construction and can be shared freely between threads.

pub mod export;
mod parser;
mod traversal;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use crate::error::{OntologyError, Result};
use crate::types::{OntologyHeader, Term};

/// Immutable term hierarchy loaded from an ontology file
#[derive(Debug)]
pub struct Ontology {
    pub(crate) header: OntologyHeader,
    pub(crate) terms: Vec<Term>,
    pub(crate) index: HashMap<String, usize>,
    /// Resolved `is_a` parents per term position
    pub(crate) parents: Vec<Vec<usize>>,
    pub(crate) source: Option<PathBuf>,
}

impl Ontology {
    /// Load an ontology from an OBO file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let started = Instant::now();

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => OntologyError::NotFound(path.to_path_buf()),
            _ => OntologyError::Io(e),
        })?;

        let mut ontology = Self::from_obo_str(&content)?;
        ontology.source = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            terms = ontology.len(),
            obsolete = ontology.obsolete_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Loaded ontology"
        );

        Ok(ontology)
    }

    /// Parse an ontology from OBO text
    pub fn from_obo_str(content: &str) -> Result<Self> {
        let parsed = parser::parse_obo(content)?;
        Self::from_terms(parsed.header, parsed.terms)
    }

    /// Build a store from terms in iteration order
    ///
    /// Fails on duplicate identifiers. `is_a` references to unknown terms
    /// are dropped from the hierarchy with a warning.
    pub fn from_terms(header: OntologyHeader, terms: Vec<Term>) -> Result<Self> {
        let mut index = HashMap::with_capacity(terms.len());
        for (pos, term) in terms.iter().enumerate() {
            if index.insert(term.id.clone(), pos).is_some() {
                return Err(OntologyError::DuplicateTerm(term.id.clone()));
            }
        }

        let parents: Vec<Vec<usize>> = terms
            .iter()
            .map(|term| {
                term.parents
                    .iter()
                    .filter_map(|parent_id| {
                        let pos = index.get(parent_id).copied();
                        if pos.is_none() {
                            warn!(
                                term = %term.id,
                                parent = %parent_id,
                                "Dropping is_a edge to unknown term"
                            );
                        }
                        pos
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            header,
            terms,
            index,
            parents,
            source: None,
        })
    }

    /// Look up a term by identifier
    pub fn get(&self, term_id: &str) -> Option<&Term> {
        self.position(term_id).map(|pos| &self.terms[pos])
    }

    /// Check if a term identifier is known
    pub fn contains(&self, term_id: &str) -> bool {
        self.index.contains_key(term_id)
    }

    /// Position of a term in iteration order
    pub fn position(&self, term_id: &str) -> Option<usize> {
        self.index.get(term_id).copied()
    }

    /// Iterate over all terms in file order
    pub fn terms(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    pub(crate) fn terms_slice(&self) -> &[Term] {
        &self.terms
    }

    /// Ancestors of a term within `distance` hops (unbounded when `None`)
    pub fn superclasses(&self, term_id: &str, distance: Option<usize>) -> Vec<&Term> {
        traversal::superclasses(self, term_id, distance)
    }

    pub fn header(&self) -> &OntologyHeader {
        &self.header
    }

    /// Path the ontology was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn obsolete_count(&self) -> usize {
        self.terms.iter().filter(|t| t.obsolete).count()
    }
}
