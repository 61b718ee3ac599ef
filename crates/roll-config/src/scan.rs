//! Directory scanning configuration.

use serde::{Deserialize, Serialize};

const fn default_creation_date_fallback() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Honor `.gitignore`, `.ignore` and `.taskrollignore`, and skip hidden entries.
    #[serde(default)]
    pub respect_ignore_files: bool,

    /// Fall back to filesystem creation time when a file name carries no date.
    #[serde(default = "default_creation_date_fallback")]
    pub creation_date_fallback: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            respect_ignore_files: false,
            creation_date_fallback: default_creation_date_fallback(),
        }
    }
}
