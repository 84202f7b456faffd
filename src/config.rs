//! Configuration loaded from `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::history::{DEFAULT_CAPACITY, HISTORY_KEY};

const APP_DIR: &str = "zcalc";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of history entries kept.
    pub history_capacity: usize,
    /// Storage key the history is saved under.
    pub history_key: String,
    /// Directory holding persisted data.
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_CAPACITY,
            history_key: HISTORY_KEY.to_string(),
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR),
        }
    }
}

impl Config {
    /// Default location, `~/.config/zcalc/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Parse TOML contents, filling unset fields with defaults.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        if config.history_capacity == 0 {
            anyhow::bail!("history_capacity must be at least 1");
        }
        Ok(config)
    }
}
