//! Ontology tools for term details, ancestors and statistics

mod get_superterms;
mod get_term;
mod ontology_stats;

pub use get_superterms::GetSupertermsTool;
pub use get_term::GetTermTool;
pub use ontology_stats::OntologyStatsTool;
