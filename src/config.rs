//! Runtime configuration
//!
//! Defaults can be overridden from the environment:
//! - `HPO_ONTOLOGY_PATH`: ontology file (default `hp.obo`, relative to the
//!   current directory)
//! - `HPO_CACHE_CAPACITY`: entries per query cache (default 1024, 0 disables)
//! - `HPO_HTTP_ADDR`: listen address for the REST API (default `127.0.0.1:3030`)

use std::env;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{OntologyError, Result};

pub const DEFAULT_ONTOLOGY_PATH: &str = "hp.obo";
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:3030";

pub const ENV_ONTOLOGY_PATH: &str = "HPO_ONTOLOGY_PATH";
pub const ENV_CACHE_CAPACITY: &str = "HPO_CACHE_CAPACITY";
pub const ENV_HTTP_ADDR: &str = "HPO_HTTP_ADDR";

/// Configuration for loading and serving an ontology
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Path to the OBO file
    pub ontology_path: PathBuf,
    /// Capacity of each memoization cache
    pub cache_capacity: usize,
    /// Listen address for the HTTP API
    pub http_addr: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            ontology_path: resolve_path(DEFAULT_ONTOLOGY_PATH),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
        }
    }
}

impl ExplorerConfig {
    /// Create config for a specific ontology file
    pub fn new<P: AsRef<Path>>(ontology_path: P) -> Self {
        Self {
            ontology_path: resolve_path(ontology_path.as_ref()),
            ..Default::default()
        }
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_ONTOLOGY_PATH).filter(|p| !p.trim().is_empty()) {
            config.ontology_path = resolve_path(path.trim());
        }

        if let Some(raw) = lookup(ENV_CACHE_CAPACITY) {
            config.cache_capacity = raw.trim().parse().map_err(|_| {
                OntologyError::Config(format!(
                    "{} must be a non-negative integer, got '{}'",
                    ENV_CACHE_CAPACITY, raw
                ))
            })?;
        }

        if let Some(addr) = lookup(ENV_HTTP_ADDR).filter(|a| !a.trim().is_empty()) {
            config.http_addr = addr.trim().to_string();
        }

        Ok(config)
    }

    pub fn with_ontology_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.ontology_path = resolve_path(path.as_ref());
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_http_addr(mut self, addr: impl Into<String>) -> Self {
        self.http_addr = addr.into();
        self
    }

    /// Log the effective configuration
    pub fn log_config(&self) {
        info!(
            ontology = %self.ontology_path.display(),
            cache_capacity = self.cache_capacity,
            http_addr = %self.http_addr,
            "Configuration"
        );
    }
}

/// Resolve relative paths against the current directory
fn resolve_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        return path.to_path_buf();
    }
    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ExplorerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert!(config.ontology_path.is_absolute());
        assert!(config.ontology_path.ends_with(DEFAULT_ONTOLOGY_PATH));
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert_eq!(config.http_addr, DEFAULT_HTTP_ADDR);
    }

    #[test]
    fn test_environment_overrides() {
        let config = ExplorerConfig::from_lookup(lookup_from(&[
            (ENV_ONTOLOGY_PATH, "/data/hp.obo"),
            (ENV_CACHE_CAPACITY, " 16 "),
            (ENV_HTTP_ADDR, "0.0.0.0:8080"),
        ]))
        .unwrap();

        assert_eq!(config.ontology_path, PathBuf::from("/data/hp.obo"));
        assert_eq!(config.cache_capacity, 16);
        assert_eq!(config.http_addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_cache_capacity() {
        let err = ExplorerConfig::from_lookup(lookup_from(&[(ENV_CACHE_CAPACITY, "lots")]))
            .unwrap_err();
        assert!(matches!(err, OntologyError::Config(_)));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ExplorerConfig::new("/tmp/mini.obo")
            .with_cache_capacity(0)
            .with_http_addr("127.0.0.1:9000");

        assert_eq!(config.ontology_path, PathBuf::from("/tmp/mini.obo"));
        assert_eq!(config.cache_capacity, 0);
        assert_eq!(config.http_addr, "127.0.0.1:9000");
    }
}
