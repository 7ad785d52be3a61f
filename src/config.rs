//! Configuration for the tdo-mcp server.
//!
//! The external tool's invocation path is an explicit configuration value
//! threaded into the note store at construction, never ambient process state.
//! Resolution order: CLI flag, then `~/.tdo-mcp/config.yaml`, then `"tdo"`.

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The default tdo invocation, resolved through PATH.
pub const DEFAULT_TDO_PATH: &str = "tdo";

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path to the tdo executable.
    /// None means resolve `tdo` through PATH.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tdo_path: Option<String>,
}

impl ServerConfig {
    /// Load config from the default location, returning None if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Option<Self>> {
        match paths::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load config from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(config_path: &Path) -> Result<Option<Self>> {
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Save config to a specific file path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Resolve the tdo invocation path, preferring an explicit CLI override.
    #[must_use]
    pub fn resolve_tdo_path(&self, cli_override: Option<&str>) -> String {
        cli_override
            .map(ToString::to_string)
            .or_else(|| self.tdo_path.clone())
            .unwrap_or_else(|| DEFAULT_TDO_PATH.to_string())
    }
}
