//! Report result cache settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache report results by SQL text. Default: true.
    pub enabled: Option<bool>,
    /// Maximum cached results. Default: 64.
    pub max_entries: Option<u64>,
}

impl CacheConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_max_entries(&self) -> u64 {
        self.max_entries.unwrap_or(64)
    }
}
