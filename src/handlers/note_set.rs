//! Note set handler for the notes MCP server

use crate::NotesServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl NotesServerHandler {
    /// Returns the note index of one source.
    pub async fn handle_get_note_set(&self, source_id: u32) -> McpResult<String> {
        let note_set = self
            .catalog
            .get_note_set(source_id)
            .map_err(formatting::catalog_error)?;
        formatting::to_json(note_set)
    }
}
