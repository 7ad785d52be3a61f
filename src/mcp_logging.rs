//! MCP server logging to help debug disconnections.
//!
//! Writes logs to `~/.tdo-mcp/mcp.log`. Since stdout/stderr are captured by
//! the MCP stdio transport, this logs directly to file.

use crate::paths;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::panic;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

/// Maximum log file size before rotation (1MB).
const MAX_LOG_SIZE: u64 = 1_048_576;

/// Global log file handle (lazily initialized).
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Initialize the MCP logger at the default location.
///
/// This should be called once at server startup. Does nothing if the home
/// directory cannot be determined.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init() -> std::io::Result<()> {
    match paths::log_path() {
        Some(path) => init_at(&path),
        None => Ok(()),
    }
}

/// Initialize the MCP logger at a specific file path.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_at(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Rotate log file if too large
    if path.exists() {
        if let Ok(metadata) = fs::metadata(path) {
            if metadata.len() > MAX_LOG_SIZE {
                let backup = path.with_extension("log.old");
                let _ = fs::rename(path, backup);
            }
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }

    log_event("MCP server starting");

    Ok(())
}

/// Write a log entry.
fn write_log(message: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let _ = writeln!(file, "[{ts}] {message}");
            let _ = file.flush();
        }
    }
}

/// Log a general event.
pub fn log_event(message: &str) {
    write_log(&format!("EVENT: {message}"));
}

/// Log a tool call start.
pub fn log_tool_start(tool_name: &str) {
    write_log(&format!("TOOL_START: {tool_name}"));
}

/// Log a tool call completion with duration.
pub fn log_tool_end(tool_name: &str, duration_ms: u128, success: bool) {
    let status = if success { "OK" } else { "ERROR" };
    write_log(&format!("TOOL_END: {tool_name} ({duration_ms}ms) [{status}]"));
}

/// Log an error.
pub fn log_error(message: &str) {
    write_log(&format!("ERROR: {message}"));
}

/// Log a warning.
pub fn log_warning(message: &str) {
    write_log(&format!("WARN: {message}"));
}

/// Log a panic with location and payload.
#[allow(deprecated)] // PanicInfo is deprecated but PanicHookInfo requires Rust 1.81+
fn log_panic(info: &panic::PanicInfo<'_>) {
    let location = info.location().map_or_else(
        || "unknown".to_string(),
        |loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()),
    );

    let payload = info
        .payload()
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());

    write_log(&format!("PANIC at {location}: {payload}"));
}

/// Install a panic hook that logs panics to the MCP log file.
///
/// This should be called after `init()`.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        log_panic(info);
        original_hook(info);
    }));

    log_event("Panic hook installed");
}

/// Log MCP server shutdown.
pub fn log_shutdown() {
    write_log("SHUTDOWN: normal");
}

/// A guard that logs tool call duration when dropped.
///
/// ```ignore
/// let mut guard = ToolCallGuard::new("mark_todo_done");
/// // ... execute tool, guard.mark_error() on failure ...
/// // guard logs duration when dropped
/// ```
pub struct ToolCallGuard {
    tool_name: String,
    start: Instant,
    success: bool,
}

impl ToolCallGuard {
    /// Create a new tool call guard and log the start.
    #[must_use]
    pub fn new(tool_name: &str) -> Self {
        log_tool_start(tool_name);
        Self { tool_name: tool_name.to_string(), start: Instant::now(), success: true }
    }

    /// Mark the tool call as failed.
    pub fn mark_error(&mut self) {
        self.success = false;
    }
}

impl Drop for ToolCallGuard {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_millis();
        log_tool_end(&self.tool_name, duration, self.success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    // These tests share the global LOG_FILE handle, hence #[serial].

    #[serial]
    #[test]
    fn test_init_creates_log_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mcp.log");
        init_at(&path).unwrap();

        assert!(path.exists());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("MCP server starting"));
    }

    #[serial]
    #[test]
    fn test_events_are_timestamped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mcp.log");
        init_at(&path).unwrap();

        log_event("something happened");
        let content = std::fs::read_to_string(&path).unwrap();
        let line = content.lines().last().unwrap();
        assert!(line.starts_with('['));
        assert!(line.contains("EVENT: something happened"));
    }

    #[serial]
    #[test]
    fn test_tool_call_guard_logs_start_and_end() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mcp.log");
        init_at(&path).unwrap();

        {
            let mut guard = ToolCallGuard::new("add_todo");
            guard.mark_error();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("TOOL_START: add_todo"));
        assert!(content.contains("TOOL_END: add_todo"));
        assert!(content.contains("[ERROR]"));
    }

    #[serial]
    #[test]
    fn test_rotation_renames_oversized_log() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mcp.log");
        let oversized = usize::try_from(MAX_LOG_SIZE + 1).unwrap();
        std::fs::write(&path, vec![b'x'; oversized]).unwrap();

        init_at(&path).unwrap();

        assert!(path.with_extension("log.old").exists());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.starts_with('x'));
    }
}
