//! Error types for `tdo_mcp`.

use std::path::PathBuf;

/// Errors that can occur while serving tdo notes.
///
/// Every failure is terminal for the request it occurs in: there are no
/// retries and no partial success. The MCP layer translates these into
/// protocol-level errors; nothing is swallowed on the way up.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML parsing error occurred.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The external tdo command exited non-zero.
    #[error("Command '{command}' failed with exit code {exit_code}: {stderr}")]
    CommandFailed {
        /// The command that was run.
        command: String,
        /// The exit code.
        exit_code: i32,
        /// The stderr output.
        stderr: String,
    },

    /// A note file could not be read.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A note file could not be written.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Note resolution produced no file path.
    #[error("No todo note found for {0}")]
    NoteNotFound(String),

    /// The toggle target is absent, or present but already completed.
    #[error("Todo not found in the specified file: {0}")]
    TodoNotFound(String),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
