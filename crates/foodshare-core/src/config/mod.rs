//! Configuration for the Foodshare engine.
//! Loaded from `foodshare.toml`; every section falls back to defaults.

pub mod cache_config;
pub mod export_config;
pub mod logging_config;
pub mod store_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use cache_config::CacheConfig;
pub use export_config::ExportConfig;
pub use logging_config::LoggingConfig;
pub use store_config::StoreConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FoodshareConfig {
    pub store: StoreConfig,
    pub cache: CacheConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

impl FoodshareConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load config from a file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }
}
