//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the note store's operations to agents over stdio.

pub mod notes_server;

pub use notes_server::NotesServer;
