//! MCP tool handlers for the notes server
//!
//! Each tool exposed by `NotesServerHandler` delegates to a `handle_*`
//! method defined in one of these files.

pub mod note_set;
pub mod note_text;
pub mod sources;
