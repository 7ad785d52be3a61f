//! MCP server for tdo notes and todos.
//!
//! This module provides an MCP server that exposes the note store's
//! operations as tools over the Model Context Protocol.

// The rmcp `#[tool(aggr)]` macro requires ownership of input structs,
// making pass-by-value necessary for all tool handler functions.
#![allow(clippy::needless_pass_by_value)]

use crate::command::RealCommandRunner;
use crate::mcp_logging::ToolCallGuard;
use crate::notes::NoteStore;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::tool;
use rmcp::Error as McpError;
use schemars::JsonSchema;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Instructions for the MCP server, shown to agents using this server.
const INSTRUCTIONS: &str = r"Personal notes and todos, backed by the tdo command-line tool.

Notes are markdown files. Todos are checklist lines: `- [ ]` pending, `- [x]` done.

- Use `get_todo_contents` to read a daily note; pass an offset like `1` for tomorrow or `-1` for yesterday.
- Use `search_notes` to find notes by query, and `get_pending_todos` to list every unchecked todo across the collection.
- To complete a todo, call `mark_todo_done` with the file path and the todo line exactly as a read returned it.
- To add a todo, call `add_todo` with the file path and the item text; it is placed at the end of the note's existing todo list, or after the first section header when the note has none.

Edits rewrite the whole file. There is no locking: do not issue concurrent edits against the same note.";

/// MCP server exposing note and todo tools.
#[derive(Clone)]
pub struct NotesServer {
    store: Arc<NoteStore<RealCommandRunner>>,
}

impl NotesServer {
    /// Create a server around an existing note store.
    #[must_use]
    pub fn new(store: NoteStore<RealCommandRunner>) -> Self {
        Self { store: Arc::new(store) }
    }
}

// Tool input schemas

/// Input for reading a todo note.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTodoContentsInput {
    /// Optional day offset like "1" for tomorrow, "-1" for yesterday.
    pub offset: Option<String>,
}

/// Input for searching notes.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchNotesInput {
    /// Search query term.
    pub query: String,
}

/// Input for listing pending todos. No parameters.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetPendingTodosInput {}

/// Input for marking a todo as done.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct MarkTodoDoneInput {
    /// Path of the note file holding the todo.
    pub file_path: String,
    /// The todo line to complete, as returned by a previous read.
    pub todo_text: String,
}

/// Input for adding a todo.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddTodoInput {
    /// Path of the note file to add the todo to.
    pub file_path: String,
    /// The todo text; a `- [ ]` prefix is added if missing.
    pub todo_text: String,
}

/// Translate a store failure into a protocol error, logging it on the way.
fn internal_error(guard: &mut ToolCallGuard, err: &crate::error::Error) -> McpError {
    guard.mark_error();
    crate::mcp_logging::log_error(&err.to_string());
    McpError::internal_error(err.to_string(), None)
}

/// Serialize a tool result as pretty JSON text content.
fn json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool(tool_box)]
impl NotesServer {
    /// Read the contents of a todo note.
    #[tool(description = "Show contents of todo notes; optional offset like '1' for tomorrow")]
    fn get_todo_contents(
        &self,
        #[tool(aggr)] input: GetTodoContentsInput,
    ) -> Result<CallToolResult, McpError> {
        let mut guard = ToolCallGuard::new("get_todo_contents");
        let note = self
            .store
            .todo_contents(input.offset.as_deref())
            .map_err(|e| internal_error(&mut guard, &e))?;
        json_result(&note)
    }

    /// Search for notes matching a query.
    #[tool(description = "Search for notes matching a query")]
    fn search_notes(
        &self,
        #[tool(aggr)] input: SearchNotesInput,
    ) -> Result<CallToolResult, McpError> {
        let mut guard = ToolCallGuard::new("search_notes");
        let result =
            self.store.search_notes(&input.query).map_err(|e| internal_error(&mut guard, &e))?;
        json_result(&result)
    }

    /// List every pending todo across the note collection.
    #[tool(description = "Get all pending todos")]
    fn get_pending_todos(
        &self,
        #[tool(aggr)] _input: GetPendingTodosInput,
    ) -> Result<CallToolResult, McpError> {
        let mut guard = ToolCallGuard::new("get_pending_todos");
        let todos = self.store.pending_todos().map_err(|e| internal_error(&mut guard, &e))?;
        json_result(&todos)
    }

    /// Mark a todo line as completed.
    #[tool(description = "Mark a todo as done by its file path and exact line text")]
    fn mark_todo_done(
        &self,
        #[tool(aggr)] input: MarkTodoDoneInput,
    ) -> Result<CallToolResult, McpError> {
        let mut guard = ToolCallGuard::new("mark_todo_done");
        let note = self
            .store
            .mark_todo_done(Path::new(&input.file_path), &input.todo_text)
            .map_err(|e| internal_error(&mut guard, &e))?;
        json_result(&note)
    }

    /// Add a new todo line to a note.
    #[tool(description = "Add a todo to a note, placed next to its existing todo list")]
    fn add_todo(&self, #[tool(aggr)] input: AddTodoInput) -> Result<CallToolResult, McpError> {
        let mut guard = ToolCallGuard::new("add_todo");
        let note = self
            .store
            .add_todo(Path::new(&input.file_path), &input.todo_text)
            .map_err(|e| internal_error(&mut guard, &e))?;
        json_result(&note)
    }
}

#[rmcp::tool(tool_box)]
impl rmcp::ServerHandler for NotesServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "tdo-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::ServerHandler;

    #[test]
    fn test_get_info_advertises_tools() {
        let server = NotesServer::new(NoteStore::new("tdo", RealCommandRunner::new()));
        let info = server.get_info();
        assert_eq!(info.server_info.name, "tdo-mcp");
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("tdo"));
    }

    #[test]
    fn test_mark_todo_done_tool_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("note.md");
        std::fs::write(&path, "# Todo\n- [ ] Ship it").unwrap();

        let server = NotesServer::new(NoteStore::new("tdo", RealCommandRunner::new()));
        let result = server.mark_todo_done(MarkTodoDoneInput {
            file_path: path.display().to_string(),
            todo_text: "- [ ] Ship it".to_string(),
        });

        assert!(result.is_ok());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Todo\n- [x] Ship it");
    }

    #[test]
    fn test_mark_todo_done_tool_surfaces_failure() {
        let server = NotesServer::new(NoteStore::new("tdo", RealCommandRunner::new()));
        let result = server.mark_todo_done(MarkTodoDoneInput {
            file_path: "/definitely/not/a/file.md".to_string(),
            todo_text: "- [ ] Anything".to_string(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_add_todo_tool_creates_and_writes() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("fresh.md");

        let server = NotesServer::new(NoteStore::new("tdo", RealCommandRunner::new()));
        let result = server.add_todo(AddTodoInput {
            file_path: path.display().to_string(),
            todo_text: "Water plants".to_string(),
        });

        assert!(result.is_ok());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "\n- [ ] Water plants");
    }
}
