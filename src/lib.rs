//! # `tdo_mcp`
//!
//! An MCP server that lets agents read, search, and edit a personal markdown
//! note/todo collection managed by the external tdo command-line tool.
//!
//! The interesting part is the markdown todo-list editor ([`editor`]): it
//! locates checklist lines to flip their completion markers, and decides
//! where a newly authored todo belongs inside an arbitrary markdown
//! document. Everything else is glue between the MCP transport, the tdo
//! command, and the filesystem.

pub mod checklist;
pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod mcp;
pub mod mcp_logging;
pub mod notes;
pub mod paths;
pub mod testing;
pub mod traits;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
