//! Report output configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default report file name, also excluded from scanning.
pub const DEFAULT_OUTPUT_FILENAME: &str = "TASKS.md";

fn default_output_filename() -> String {
    DEFAULT_OUTPUT_FILENAME.to_string()
}

const fn default_links() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Report file, written relative to the scan root.
    #[serde(default = "default_output_filename")]
    pub output_filename: String,

    /// Render each task as a link back to its source file and section.
    #[serde(default = "default_links")]
    pub links: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_filename: default_output_filename(),
            links: default_links(),
        }
    }
}

impl ReportConfig {
    /// File-name component of the output path. Discovery skips files with this name.
    #[must_use]
    pub fn output_file_name(&self) -> Option<&str> {
        Path::new(&self.output_filename)
            .file_name()
            .and_then(|name| name.to_str())
    }

    /// Reject output paths that cannot name a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty value or a path
    /// without a file name (e.g. `..`).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_filename.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "report.output_filename".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.output_file_name().is_none() {
            return Err(ConfigError::InvalidValue {
                field: "report.output_filename".to_string(),
                reason: format!("'{}' does not name a file", self.output_filename),
            });
        }
        Ok(())
    }
}
