//! Path utilities for determining data storage locations.
//!
//! Server state (config, logs) lives in `~/.tdo-mcp/`. Note files themselves
//! are wherever the external tdo tool keeps them; this crate never decides
//! note locations on its own.

use std::path::PathBuf;

/// The base directory name for tdo-mcp data.
const DATA_DIR_NAME: &str = ".tdo-mcp";

/// The config filename within the data directory.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// The log filename within the data directory.
pub const LOG_FILENAME: &str = "mcp.log";

/// Get the base data directory for tdo-mcp.
///
/// Returns `~/.tdo-mcp/` or `None` if the home directory cannot be determined.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}

/// Get the path of the server config file.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(CONFIG_FILENAME))
}

/// Get the path of the MCP log file.
#[must_use]
pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(LOG_FILENAME))
}
