//! Note repository adapter.
//!
//! Bridges the external tdo command-line tool and the markdown editor:
//! resolves logical note references to file paths, reads and writes note
//! files, and applies todo edits as full read-modify-write cycles.

pub mod models;
pub mod store;

pub use models::{PendingTodo, PendingTodos, SearchResult, TodoNote};
pub use store::NoteStore;
