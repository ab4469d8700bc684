//! Catalog tunables.
//!
//! The defaults match the constants the listing pages were built around;
//! deployments override them through a YAML file or `MARANI_*` environment
//! variables.

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::listing::EXCERPT_MAX_CHARS;
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Error raised when the catalog configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load catalog configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Tunables for the catalog pipeline.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Listings per page in search results.
    pub default_page_size: usize,
    /// Characters kept when cutting a description into a card excerpt.
    pub excerpt_max_chars: usize,
    /// Upper bound on listings materialized for one in-memory search pass.
    pub search_fetch_limit: usize,
    /// Listings shown in the homepage featured rail.
    pub featured_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            excerpt_max_chars: EXCERPT_MAX_CHARS,
            search_fetch_limit: 200,
            featured_limit: 6,
        }
    }
}

impl CatalogConfig {
    /// Loads configuration from an optional YAML file, with `MARANI_*`
    /// environment variables layered on top.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path));
        }
        let settings = builder
            .add_source(Environment::with_prefix("MARANI"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_page_constants() {
        let config = CatalogConfig::default();
        assert_eq!(config.default_page_size, 12);
        assert_eq!(config.excerpt_max_chars, 150);
        assert_eq!(config.search_fetch_limit, 200);
        assert_eq!(config.featured_limit, 6);
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(file, "default_page_size: 24\nfeatured_limit: 8").unwrap();

        let config = CatalogConfig::load(file.path().to_str()).unwrap();
        assert_eq!(config.default_page_size, 24);
        assert_eq!(config.featured_limit, 8);
        assert_eq!(config.excerpt_max_chars, 150);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(CatalogConfig::load(Some("/nonexistent/marani.yaml")).is_err());
    }
}
