//! Core traits for testability and abstraction.

use crate::error::Result;
use std::time::Duration;

/// Output from a command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// The exit code of the command.
    pub exit_code: i32,
    /// The stdout output.
    pub stdout: String,
    /// The stderr output.
    pub stderr: String,
}

impl CommandOutput {
    /// Check if the command succeeded (exit code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Trait for running shell commands.
///
/// Abstracts the external tdo invocation so the note store can be exercised
/// in tests without a real tdo binary on the PATH.
pub trait CommandRunner {
    /// Run a command with the given arguments and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned or executed.
    fn run(&self, program: &str, args: &[&str], timeout: Option<Duration>)
        -> Result<CommandOutput>;

    /// Check if a program is available in PATH.
    fn is_available(&self, program: &str) -> bool;
}
