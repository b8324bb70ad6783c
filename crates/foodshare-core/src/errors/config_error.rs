//! Configuration loading errors.

use super::error_code::{self, FoodshareErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl FoodshareErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::CONFIG_ERROR,
            Self::TomlParse(_) => error_code::CONFIG_PARSE_ERROR,
        }
    }
}
