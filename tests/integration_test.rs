//! Integration tests for `tdo_mcp`.
//!
//! Exercises the note store against a fake tdo executable, end to end
//! through real process spawning and real files.

use tdo_mcp::notes::NoteStore;
use tdo_mcp::VERSION;

#[test]
fn test_version_exists() {
    assert!(!VERSION.is_empty());
}

#[test]
fn test_real_command_runner() {
    use tdo_mcp::command::RealCommandRunner;
    use tdo_mcp::traits::CommandRunner;

    let runner = RealCommandRunner::new();
    let output = runner.run("echo", &["hello"], None).unwrap();
    assert!(output.success());
    assert!(output.stdout.contains("hello"));
}

/// Write an executable fake tdo script that prints the given stdout.
#[cfg(unix)]
fn fake_tdo(dir: &std::path::Path, stdout: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("tdo");
    std::fs::write(&script, format!("#!/bin/sh\nprintf '%s\\n' \"{stdout}\"\n")).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}

#[cfg(unix)]
#[test]
fn test_todo_contents_through_fake_tdo() {
    use tdo_mcp::command::RealCommandRunner;

    let dir = tempfile::TempDir::new().unwrap();
    let note = dir.path().join("today.md");
    std::fs::write(&note, "# Today\n- [ ] Walk the dog").unwrap();

    let script = fake_tdo(dir.path(), &note.display().to_string());
    let store = NoteStore::new(script.display().to_string(), RealCommandRunner::new());

    let result = store.todo_contents(None).unwrap();
    assert_eq!(result.file_path, note.display().to_string());
    assert_eq!(result.content, "# Today\n- [ ] Walk the dog");
}

#[cfg(unix)]
#[test]
fn test_failing_tdo_surfaces_command_error() {
    use std::os::unix::fs::PermissionsExt;
    use tdo_mcp::command::RealCommandRunner;
    use tdo_mcp::error::Error;

    let dir = tempfile::TempDir::new().unwrap();
    let script = dir.path().join("tdo");
    std::fs::write(&script, "#!/bin/sh\necho 'no notes dir' >&2\nexit 3\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let store = NoteStore::new(script.display().to_string(), RealCommandRunner::new());
    let err = store.todo_contents(None).unwrap_err();
    match err {
        Error::CommandFailed { exit_code, stderr, .. } => {
            assert_eq!(exit_code, 3);
            assert!(stderr.contains("no notes dir"));
        }
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[test]
fn test_mark_then_add_full_cycle() {
    use tdo_mcp::command::RealCommandRunner;

    let dir = tempfile::TempDir::new().unwrap();
    let note = dir.path().join("todo.md");
    std::fs::write(&note, "# Todo List\n- [ ] First\n- [ ] Second\n\n# Log\nnotes").unwrap();

    // The editing operations never touch the tdo command, only the file.
    let store = NoteStore::new("tdo", RealCommandRunner::new());

    let marked = store.mark_todo_done(&note, "- [ ] First").unwrap();
    assert!(marked.content.contains("- [x] First"));

    let added = store.add_todo(&note, "Third").unwrap();
    assert_eq!(
        added.content,
        "# Todo List\n- [x] First\n- [ ] Second\n- [ ] Third\n\n# Log\nnotes"
    );
    assert_eq!(std::fs::read_to_string(&note).unwrap(), added.content);
}
