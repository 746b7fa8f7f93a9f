//! Search tools

mod find_terms;

pub use find_terms::FindTermsTool;
