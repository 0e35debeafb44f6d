//! Configuration file management for isla.
//!
//! Reads `~/.config/isla/config.toml`. Every field is optional; a missing
//! file yields the defaults. Environment variables override the file:
//!
//! | variable | field |
//! |---|---|
//! | `ISLA_CATALOG_PATH` | `catalog_path` |
//! | `ISLA_INTERACTION_LOG` | `interaction_log_path` |
//! | `ISLA_CHAT_ENDPOINT` | `chat.endpoint` |
//! | `ISLA_CHAT_API_KEY` | `chat.api_key` |

use crate::paths::IslaPaths;
use isla_core::error::{IslaError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 30;

/// Root configuration structure for config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// TOML catalog file; the bundled seed catalog is used when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// JSON-lines file receiving interaction records.
    #[serde(default)]
    pub interaction_log_path: Option<PathBuf>,
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Chat round-trip settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Remote chat handler; the in-process handler is used when unset.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_CHAT_TIMEOUT_SECS
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: DEFAULT_CHAT_TIMEOUT_SECS,
        }
    }
}

impl ChatConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    /// Loads the configuration from the default location, then applies
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let path = IslaPaths::config_file()?;
        Ok(Self::load_from(&path)?.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Loads the configuration from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(target: "config", "No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            IslaError::config(format!(
                "Failed to read configuration file at {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            IslaError::config(format!(
                "Failed to parse configuration file at {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Applies overrides looked up by variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("ISLA_CATALOG_PATH") {
            self.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("ISLA_INTERACTION_LOG") {
            self.interaction_log_path = Some(PathBuf::from(path));
        }
        if let Some(endpoint) = lookup("ISLA_CHAT_ENDPOINT") {
            self.chat.endpoint = Some(endpoint);
        }
        if let Some(api_key) = lookup("ISLA_CHAT_API_KEY") {
            self.chat.api_key = Some(api_key);
        }
        self
    }

    /// The interaction log path, falling back to the data directory.
    pub fn interaction_log_path(&self) -> Result<PathBuf> {
        match &self.interaction_log_path {
            Some(path) => Ok(path.clone()),
            None => IslaPaths::interaction_log(),
        }
    }
}
