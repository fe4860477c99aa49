//! CLI configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;

/// Settings for the `iou` tool.
///
/// Loaded from a TOML file via [`CliConfig::from_toml_file`]; command-line
/// flags and environment variables override individual fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Constraint discriminator used when `--constraint-type` is absent.
    #[serde(default)]
    pub default_constraint_type: Option<i32>,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl CliConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, CliError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CliError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, CliError> {
        toml::from_str(s).map_err(|e| CliError::Config(e.to_string()))
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_format: default_log_format(),
            log_level: default_log_level(),
            default_constraint_type: None,
            pretty: default_true(),
        }
    }
}
