//! The note repository adapter.
//!
//! Resolves logical note references (today, offset, search query) to file
//! paths through the external tdo command, and performs the read-edit-write
//! cycles for todo mutations. There is no caching: every edit re-reads the
//! file immediately before mutating, and the last writer wins.

use crate::checklist;
use crate::editor;
use crate::error::{Error, Result};
use crate::notes::models::{PendingTodo, PendingTodos, SearchResult, TodoNote};
use crate::traits::CommandRunner;
use std::path::{Path, PathBuf};

/// File-backed note store driven by the external tdo tool.
#[derive(Debug)]
pub struct NoteStore<R> {
    tdo_path: String,
    runner: R,
}

impl<R: CommandRunner> NoteStore<R> {
    /// Create a store invoking tdo at the given path.
    pub fn new(tdo_path: impl Into<String>, runner: R) -> Self {
        Self { tdo_path: tdo_path.into(), runner }
    }

    /// The configured tdo invocation path.
    #[must_use]
    pub fn tdo_path(&self) -> &str {
        &self.tdo_path
    }

    /// Run tdo with the given arguments and return trimmed stdout.
    fn run_tdo(&self, args: &[&str]) -> Result<String> {
        let output = self.runner.run(&self.tdo_path, args, None)?;
        if !output.success() {
            let command = if args.is_empty() {
                self.tdo_path.clone()
            } else {
                format!("{} {}", self.tdo_path, args.join(" "))
            };
            return Err(Error::CommandFailed {
                command,
                exit_code: output.exit_code,
                stderr: output.stderr,
            });
        }
        Ok(output.stdout.trim().to_string())
    }

    /// Resolve a note reference to a file path.
    ///
    /// With no offset, tdo resolves today's note; offsets like `1` or `-1`
    /// select tomorrow or yesterday.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoteNotFound`] if resolution produced no path, or
    /// [`Error::CommandFailed`] if tdo exited non-zero.
    pub fn resolve_note(&self, offset: Option<&str>) -> Result<PathBuf> {
        let args: Vec<&str> = offset.into_iter().collect();
        let path = self.run_tdo(&args)?;
        if path.is_empty() {
            return Err(Error::NoteNotFound("the specified offset".to_string()));
        }
        Ok(PathBuf::from(path))
    }

    /// Find note files matching a query, one path per output line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandFailed`] if tdo exited non-zero.
    pub fn search(&self, query: &str) -> Result<Vec<PathBuf>> {
        let stdout = self.run_tdo(&["f", query])?;
        Ok(stdout.lines().filter(|line| !line.is_empty()).map(PathBuf::from).collect())
    }

    /// List note files that still contain pending todos.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandFailed`] if tdo exited non-zero.
    pub fn list_with_pending_todos(&self) -> Result<Vec<PathBuf>> {
        let stdout = self.run_tdo(&["t"])?;
        Ok(stdout.lines().filter(|line| !line.is_empty()).map(PathBuf::from).collect())
    }

    /// Read a note file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] carrying the path.
    pub fn read_note(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .map_err(|source| Error::FileRead { path: path.to_path_buf(), source })
    }

    /// Write a note file. A failed write never claims success.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileWrite`] carrying the path.
    pub fn write_note(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content)
            .map_err(|source| Error::FileWrite { path: path.to_path_buf(), source })
    }

    /// Create an empty note file, including parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileWrite`] carrying the path.
    pub fn create_note(&self, path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| Error::FileWrite { path: path.to_path_buf(), source })?;
        }
        self.write_note(path, "")?;
        Ok(path.to_path_buf())
    }

    /// Get the contents of a todo note, resolved by optional day offset.
    ///
    /// # Errors
    ///
    /// Fails if resolution or the file read fails.
    pub fn todo_contents(&self, offset: Option<&str>) -> Result<TodoNote> {
        let path = self.resolve_note(offset)?;
        let content = self.read_note(&path)?;
        Ok(TodoNote { file_path: path.display().to_string(), content })
    }

    /// Search notes and return each match with its content.
    ///
    /// # Errors
    ///
    /// Fails if the search command or any file read fails.
    pub fn search_notes(&self, query: &str) -> Result<SearchResult> {
        let notes = self
            .search(query)?
            .into_iter()
            .map(|path| {
                let content = self.read_note(&path)?;
                Ok(TodoNote { file_path: path.display().to_string(), content })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(SearchResult { query: query.to_string(), notes })
    }

    /// Collect all pending todo lines across the collection.
    ///
    /// Uses the loose pending predicate (`[ ]` anywhere on the line), not the
    /// stricter bullet scan used for insertion placement.
    ///
    /// # Errors
    ///
    /// Fails if the listing command or any file read fails.
    pub fn pending_todos(&self) -> Result<PendingTodos> {
        let mut todos = Vec::new();
        for path in self.list_with_pending_todos()? {
            let content = self.read_note(&path)?;
            for line in content.lines() {
                if checklist::is_pending(line) {
                    todos.push(PendingTodo {
                        file: path.display().to_string(),
                        todo: line.trim().to_string(),
                    });
                }
            }
        }
        Ok(PendingTodos { todos })
    }

    /// Mark a todo line as done: read, toggle, write back.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TodoNotFound`] if no pending line matches, or with
    /// a file error if the read or write fails.
    pub fn mark_todo_done(&self, path: &Path, todo_text: &str) -> Result<TodoNote> {
        let content = self.read_note(path)?;
        let outcome = editor::toggle_todo(&content, todo_text)?;
        self.write_note(path, &outcome.content)?;
        Ok(TodoNote { file_path: path.display().to_string(), content: outcome.content })
    }

    /// Add a todo line to a note: read (or create), insert, write back.
    ///
    /// A missing file is treated as an empty document and created first.
    ///
    /// # Errors
    ///
    /// Fails with a file error if the read, create, or write fails.
    pub fn add_todo(&self, path: &Path, item_text: &str) -> Result<TodoNote> {
        let content = if path.exists() {
            self.read_note(path)?
        } else {
            self.create_note(path)?;
            String::new()
        };
        let outcome = editor::insert_todo(&content, item_text);
        self.write_note(path, &outcome.content)?;
        Ok(TodoNote { file_path: path.display().to_string(), content: outcome.content })
    }
}
