//! Note text handler for the notes MCP server

use crate::NotesServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl NotesServerHandler {
    /// Reads a note's body from disk, without its frontmatter.
    pub async fn handle_get_note_text(&self, source_id: u32, note_id: u32) -> McpResult<String> {
        let text = self.catalog.get_note_text(source_id, note_id);
        if let Err(ref e) = text {
            tracing::debug!(source_id, note_id, error = %e, "Note text lookup failed");
        }
        text.map_err(formatting::catalog_error)
    }
}
