//! Result types returned by note operations.
//!
//! These are the shapes serialized onto the wire for tool responses.

use serde::{Deserialize, Serialize};

/// A note file together with its full content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoNote {
    /// Path of the note file.
    pub file_path: String,
    /// Full text of the note.
    pub content: String,
}

/// Notes matching a search query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    /// The query that produced these notes.
    pub query: String,
    /// Matching notes with their content.
    pub notes: Vec<TodoNote>,
}

/// A single pending todo line and the file it lives in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingTodo {
    /// Path of the note file holding the todo.
    pub file: String,
    /// The trimmed todo line.
    pub todo: String,
}

/// All pending todos across the note collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingTodos {
    /// Pending todo lines in file order.
    pub todos: Vec<PendingTodo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_note_serializes_with_field_names() {
        let note = TodoNote {
            file_path: "/notes/today.md".to_string(),
            content: "- [ ] x".to_string(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["file_path"], "/notes/today.md");
        assert_eq!(json["content"], "- [ ] x");
    }

    #[test]
    fn test_pending_todos_shape() {
        let todos = PendingTodos {
            todos: vec![PendingTodo {
                file: "/notes/today.md".to_string(),
                todo: "- [ ] x".to_string(),
            }],
        };
        let json = serde_json::to_value(&todos).unwrap();
        assert_eq!(json["todos"][0]["file"], "/notes/today.md");
        assert_eq!(json["todos"][0]["todo"], "- [ ] x");
    }
}
