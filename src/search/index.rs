//! Preprocessed term index
//!
//! Every term is flattened once into a lowercase full-text blob so queries
//! only do substring checks. The index is built at engine construction and
//! never rebuilt.

use rayon::prelude::*;

use crate::ontology::Ontology;
use crate::types::Term;

/// Threshold for building the index in parallel (term count)
const PARALLEL_INDEX_THRESHOLD: usize = 1000;

/// Searchable snapshot of a single term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessedTerm {
    /// Position of the term in store order
    pub position: usize,
    pub id: String,
    pub name: String,
    pub name_lower: String,
    /// name + synonyms + definition, lowercased and space-joined
    pub full_text: String,
}

impl PreprocessedTerm {
    pub fn from_term(position: usize, term: &Term) -> Self {
        let synonyms: Vec<String> = term
            .synonym_descriptions()
            .map(|s| s.to_lowercase())
            .collect();

        let name_lower = term.name.to_lowercase();
        let full_text = format!(
            "{} {} {}",
            name_lower,
            synonyms.join(" "),
            term.definition.to_lowercase()
        );

        Self {
            position,
            id: term.id.clone(),
            name: term.name.clone(),
            name_lower,
            full_text,
        }
    }
}

/// Preprocessed terms in store order
#[derive(Debug, Default, Clone)]
pub struct TermIndex {
    entries: Vec<PreprocessedTerm>,
}

impl TermIndex {
    /// Build the index from every term of the ontology, obsolete ones included
    pub fn build(ontology: &Ontology) -> Self {
        let terms = ontology.terms_slice();

        let entries: Vec<PreprocessedTerm> = if terms.len() > PARALLEL_INDEX_THRESHOLD {
            terms
                .par_iter()
                .enumerate()
                .map(|(pos, term)| PreprocessedTerm::from_term(pos, term))
                .collect()
        } else {
            terms
                .iter()
                .enumerate()
                .map(|(pos, term)| PreprocessedTerm::from_term(pos, term))
                .collect()
        };

        Self { entries }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PreprocessedTerm> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OntologyHeader, Synonym};

    fn obesity() -> Term {
        let mut term = Term::new("HP:0008915", "Obesity");
        term.definition = "Accumulation of EXCESS body fat.".to_string();
        term.synonyms = vec![Synonym::new("Truncal obesity"), Synonym::new("Obese")];
        term
    }

    #[test]
    fn test_full_text_blob() {
        let entry = PreprocessedTerm::from_term(0, &obesity());
        assert_eq!(entry.name_lower, "obesity");
        assert_eq!(
            entry.full_text,
            "obesity truncal obesity obese accumulation of excess body fat."
        );
    }

    #[test]
    fn test_blob_without_synonyms_or_definition() {
        let entry = PreprocessedTerm::from_term(3, &Term::new("HP:0000001", "All"));
        assert_eq!(entry.full_text, "all  ");
        assert_eq!(entry.position, 3);
    }

    #[test]
    fn test_build_preserves_store_order() {
        let terms: Vec<Term> = (0..(PARALLEL_INDEX_THRESHOLD + 10))
            .map(|i| Term::new(format!("HP:{:07}", i), format!("Term {}", i)))
            .collect();
        let ontology = Ontology::from_terms(OntologyHeader::default(), terms).unwrap();

        let index = TermIndex::build(&ontology);
        assert_eq!(index.len(), ontology.len());
        for (pos, entry) in index.iter().enumerate() {
            assert_eq!(entry.position, pos);
            assert_eq!(entry.id, format!("HP:{:07}", pos));
        }
    }
}
