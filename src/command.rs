//! Real command execution implementation.

use crate::error::Result;
use crate::traits::{CommandOutput, CommandRunner};
use std::process::{Child, Command, Stdio};
use std::time::Duration;

/// ETXTBSY error code (errno 26 on Linux).
/// This error occurs when trying to execute a file that is currently being written.
const ETXTBSY: i32 = 26;

/// Spawn a command with retry logic for ETXTBSY errors.
///
/// ETXTBSY ("Text file busy") can occur on overlay filesystems (like Docker)
/// when executing a script that was just created. The file may still be held
/// open by the filesystem layer. A brief retry usually succeeds.
fn spawn_with_etxtbsy_retry<F>(mut spawn_fn: F) -> std::io::Result<Child>
where
    F: FnMut() -> std::io::Result<Child>,
{
    loop {
        match spawn_fn() {
            Ok(child) => return Ok(child),
            Err(e) if e.raw_os_error() == Some(ETXTBSY) => {
                std::thread::sleep(Duration::from_millis(1));
            }
            Err(e) => return Err(e),
        }
    }
}

/// Real command runner that executes shell commands.
#[derive(Debug, Default, Clone)]
pub struct RealCommandRunner;

impl RealCommandRunner {
    /// Create a new command runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CommandRunner for RealCommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> Result<CommandOutput> {
        let mut command = Command::new(program);
        command.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());

        let child = spawn_with_etxtbsy_retry(|| command.spawn())?;

        // No timeout semantics: a hang in the external tool is not
        // interrupted. Blocking wait only.
        let _ = timeout;
        let output = child.wait_with_output()?;

        let exit_code = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        Ok(CommandOutput { exit_code, stdout, stderr })
    }

    fn is_available(&self, program: &str) -> bool {
        Command::new("which")
            .arg(program)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_echo() {
        let runner = RealCommandRunner::new();
        let output = runner.run("echo", &["hello"], None).unwrap();
        assert!(output.success());
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[test]
    fn test_run_failing_command() {
        let runner = RealCommandRunner::new();
        let output = runner.run("false", &[], None).unwrap();
        assert!(!output.success());
        assert_ne!(output.exit_code, 0);
    }

    #[test]
    fn test_run_nonexistent_command() {
        let runner = RealCommandRunner::new();
        let result = runner.run("definitely_not_a_real_command_12345", &[], None);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_available() {
        let runner = RealCommandRunner::new();
        assert!(runner.is_available("echo"));
        assert!(!runner.is_available("definitely_not_a_real_command_12345"));
    }

    #[test]
    fn test_spawn_with_etxtbsy_retry_retries_on_etxtbsy() {
        let mut call_count = 0;
        let mut command = Command::new("true");
        command.stdout(Stdio::piped()).stderr(Stdio::piped());

        let result = spawn_with_etxtbsy_retry(|| {
            call_count += 1;
            if call_count < 3 {
                Err(std::io::Error::from_raw_os_error(ETXTBSY))
            } else {
                command.spawn()
            }
        });

        assert!(result.is_ok());
        assert_eq!(call_count, 3);
    }

    #[test]
    fn test_spawn_with_etxtbsy_retry_propagates_other_errors() {
        let mut call_count = 0;

        let result = spawn_with_etxtbsy_retry(|| {
            call_count += 1;
            // ENOENT should not be retried
            Err(std::io::Error::from_raw_os_error(2))
        });

        assert!(result.is_err());
        assert_eq!(call_count, 1);
    }
}
