//! Source list handler for the notes MCP server

use crate::NotesServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl NotesServerHandler {
    /// Lists every note source, the daily source first when enabled.
    pub async fn handle_get_note_source_list(&self) -> McpResult<String> {
        formatting::to_json(self.catalog.list_sources())
    }
}
