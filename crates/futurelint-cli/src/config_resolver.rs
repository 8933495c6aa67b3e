//! Configuration file resolution.
//!
//! Priority order:
//!
//! 1. `--config` flag (explicit path, trusted as-is)
//! 2. `futurelint.toml` or `.futurelint.toml` in the working directory
//! 3. `~/.futurelint/config.toml` (global fallback)
//! 4. Built-in defaults

use anyhow::{Context, Result};
use futurelint_core::Config;
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["futurelint.toml", ".futurelint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config`.
    Explicit(PathBuf),
    /// Found in the working directory.
    Project(PathBuf),
    /// Loaded from `~/.futurelint/`.
    Global(PathBuf),
    /// No config found; defaults apply.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Loads the configuration this source points at.
    ///
    /// # Errors
    ///
    /// Fails when the resolved file cannot be read or parsed.
    pub fn load(&self) -> Result<Config> {
        match self.path() {
            None => Ok(Config::default()),
            Some(p) => {
                tracing::debug!("loading config from {}", p.display());
                Config::from_file(p)
                    .with_context(|| format!("failed to load config: {}", p.display()))
            }
        }
    }
}

/// Resolves the configuration source for a run started in `working_dir`.
#[must_use]
pub fn resolve(working_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(working_dir, explicit, global_config_dir())
}

/// Testable core: takes the global dir as a parameter to avoid env races.
fn resolve_inner(
    working_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    for name in PROJECT_CONFIG_NAMES {
        let candidate = working_dir.join(name);
        if candidate.exists() {
            return ConfigSource::Project(candidate);
        }
    }

    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_CONFIG_NAME);
        if candidate.exists() {
            return ConfigSource::Global(candidate);
        }
    }

    ConfigSource::Default
}

/// Returns the global config directory.
///
/// `$FUTURELINT_CONFIG_DIR` overrides `~/.futurelint/` for tests and CI.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("FUTURELINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".futurelint"))
}
