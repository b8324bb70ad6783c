//! Store location and connection settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const DEFAULT_DB_PATH: &str = "food_waste.db";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database file. Default: "food_waste.db".
    pub path: Option<PathBuf>,
    /// Busy timeout applied to every connection. Default: 5000.
    pub busy_timeout_ms: Option<u64>,
}

impl StoreConfig {
    pub fn effective_path(&self) -> &Path {
        self.path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_DB_PATH))
    }

    pub fn effective_busy_timeout_ms(&self) -> u64 {
        self.busy_timeout_ms.unwrap_or(5000)
    }
}
