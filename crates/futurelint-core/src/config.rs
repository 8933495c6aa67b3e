//! Configuration types for futurelint.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration.
///
/// Every field has a default, so an empty (or absent) file is valid.
/// Command-line flags override config values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Target Python 2.6+, where `with_statement` is implied by the runtime
    /// and the require-with-import rule is disabled.
    #[serde(default)]
    pub py26: bool,

    /// Suppress per-violation output on stderr.
    #[serde(default)]
    pub quiet: bool,

    /// Substring patterns excluded during directory recursion
    /// (e.g. `"build/"`).
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the config file.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in the config file.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
