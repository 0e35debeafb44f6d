//! Unified path management for isla files.
//!
//! ```text
//! ~/.config/isla/              # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/isla/         # Data directory
//! └── interactions.jsonl       # Interaction records
//! ```

use isla_core::error::{IslaError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "isla";

/// Platform path resolution for isla.
pub struct IslaPaths;

impl IslaPaths {
    /// Returns the isla configuration directory (e.g. `~/.config/isla/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| IslaError::config("Cannot determine config directory"))
    }

    /// Returns the isla data directory (e.g. `~/.local/share/isla/`).
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| IslaError::config("Cannot determine data directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default interaction log path.
    pub fn interaction_log() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("interactions.jsonl"))
    }
}
