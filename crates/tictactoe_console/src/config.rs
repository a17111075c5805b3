//! Console configuration loaded from TOML.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a console game session.
///
/// Every field is optional in the file; missing fields take their defaults.
///
/// ```toml
/// log_filter = "tictactoe_console=debug"
/// max_read_failures = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    log_filter: String,

    /// Consecutive failed reads tolerated for one coordinate.
    ///
    /// `None` keeps prompting forever.
    max_read_failures: Option<u32>,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            max_read_failures: None,
        }
    }
}

impl ConsoleConfig {
    /// Replaces the log filter directive.
    pub fn with_log_filter(mut self, log_filter: impl Into<String>) -> Self {
        self.log_filter = log_filter.into();
        self
    }

    /// Replaces the read-failure limit.
    pub fn with_max_read_failures(mut self, limit: Option<u32>) -> Self {
        self.max_read_failures = limit;
        self
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            log_filter = %config.log_filter,
            max_read_failures = ?config.max_read_failures,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}
