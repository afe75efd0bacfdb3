//! Environment configuration.

use std::path::PathBuf;

use thiserror::Error;

use flora_catalog::{Catalog, CatalogError, sample_bouquets};
use flora_observability::{LogFormat, UnknownLogFormat};

pub const CATALOG_ENV: &str = "FLORA_CATALOG";
pub const LOG_FORMAT_ENV: &str = "FLORA_LOG_FORMAT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("FLORA_LOG_FORMAT: {0}")]
    LogFormat(#[from] UnknownLogFormat),

    #[error("FLORA_CATALOG is set but empty")]
    EmptyCatalogPath,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellConfig {
    /// JSON catalog to load instead of the built-in bouquets.
    pub catalog_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl ShellConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = match lookup(CATALOG_ENV) {
            Some(path) if path.trim().is_empty() => return Err(ConfigError::EmptyCatalogPath),
            Some(path) => Some(PathBuf::from(path.trim())),
            None => None,
        };

        let log_format = match lookup(LOG_FORMAT_ENV) {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            catalog_path,
            log_format,
        })
    }

    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::from_json_file(path),
            None => {
                tracing::info!("{CATALOG_ENV} not set; using built-in bouquets");
                Ok(sample_bouquets())
            }
        }
    }
}
