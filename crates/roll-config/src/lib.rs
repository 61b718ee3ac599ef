//! # roll-config
//!
//! Layered configuration loading for taskroll using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKROLL_*` prefix, `__` as separator)
//! 2. Project-level `.taskroll.toml` in the working directory
//! 3. User-level `~/.config/taskroll/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top by the binary after extraction.
//!
//! # Environment Variable Mapping
//!
//! `TASKROLL_REPORT__OUTPUT_FILENAME` -> `report.output_filename`,
//! `TASKROLL_SCAN__RESPECT_IGNORE_FILES` -> `scan.respect_ignore_files`.
//!
//! # Usage
//!
//! ```no_run
//! use roll_config::RollConfig;
//!
//! let config = RollConfig::load().expect("config");
//! println!("writing to {}", config.report.output_filename);
//! ```

mod error;
mod report;
mod scan;

pub use error::ConfigError;
pub use report::{DEFAULT_OUTPUT_FILENAME, ReportConfig};
pub use scan::ScanConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".taskroll.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RollConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl RollConfig {
    /// Load configuration from all sources and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when the merged values are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        Self::layered(Self::global_config_path())
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`RollConfig::load`].
    pub fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.report.validate()
    }

    fn layered(global_path: Option<PathBuf>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TASKROLL_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskroll").join("config.toml"))
    }
}
