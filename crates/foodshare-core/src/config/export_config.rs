//! CSV export settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory the CLI writes batch exports into. Default: "exports".
    pub directory: Option<PathBuf>,
}

impl ExportConfig {
    pub fn effective_directory(&self) -> &Path {
        self.directory
            .as_deref()
            .unwrap_or_else(|| Path::new("exports"))
    }
}
