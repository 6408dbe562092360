//! Notes MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server that exposes a
//! read-only catalog of markdown notes from a vault. Notes come from
//! configured directories and from a synthetic daily-notes source.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `NotesServerHandler` - Handles MCP protocol communication
//! - **Catalog Layer**: `catalog` module - In-memory sources and note sets, lookups
//! - **Pipeline Layer**: `notes` module - Frontmatter parsing, metadata
//!   extraction, directory and daily note-set builders, source resolution
//!
//! The catalog is built once at startup and never changes afterwards.
//! Only `get_note_text` reads from disk while serving.
//!
//! # Example
//!
//! ```no_run
//! use notes_mcp::NotesServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = NotesServerHandler::new("notes.toml")?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod formatting;
pub mod handlers;
pub mod notes;
pub mod summary;

use anyhow::{Context, Result};
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, DailyNotesPolicy, NoteSourceConfig, NotesConfig};
pub use notes::{Note, NoteSet, NoteSource, SourceKind};

/// MCP Server handler for the notes catalog
///
/// Owns the catalog built at startup. Nothing is written after
/// construction, so no locking is needed.
pub struct NotesServerHandler {
    pub(crate) catalog: Catalog,
}

impl NotesServerHandler {
    /// Create a new handler from a configuration file
    ///
    /// # Arguments
    /// * `config_path` - Path to the TOML configuration file
    ///
    /// # Returns
    /// Result containing the handler, or a configuration error when the file
    /// is missing or points at directories that do not exist
    ///
    /// # Example
    /// ```no_run
    /// # use notes_mcp::NotesServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = NotesServerHandler::new("notes.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let config = NotesConfig::load_validated(config_path).with_context(|| {
            format!("Failed to load configuration '{}'", config_path.display())
        })?;
        Ok(Self::from_config(&config))
    }

    /// Create a handler from an already validated configuration
    pub fn from_config(config: &NotesConfig) -> Self {
        Self::from_catalog(Catalog::build(config))
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Read-only access to a vault of markdown notes.
///
/// Notes are grouped into sources. Each source is either a directory of
/// markdown files or the "Daily Notes" source, which collects the
/// `YYYY-MM-DD.md` notes of the last few days.
///
/// **Workflow**: 1) get_note_source_list to discover sources → 2) get_note_set
/// to see the notes of one source (id, title, created, description) →
/// 3) get_note_text to read a note's content.
#[mcp_server]
impl McpServer for NotesServerHandler {
    /// **List sources**: All note sources with their source_id, name, path and description.
    /// The daily notes source (is_daily=true) is listed first when enabled.
    #[tool]
    async fn get_note_source_list(&self) -> McpResult<String> {
        self.handle_get_note_source_list().await
    }

    /// **Note index**: Notes of one source with note_id, path, title, created and description.
    /// **Next**: Pass a note_id to get_note_text to read the note.
    #[tool]
    async fn get_note_set(
        &self,
        /// source_id from get_note_source_list
        source_id: u32,
    ) -> McpResult<String> {
        self.handle_get_note_set(source_id).await
    }

    /// **Read note**: Current content of one note, without its frontmatter header.
    #[tool]
    async fn get_note_text(
        &self,
        /// source_id from get_note_source_list
        source_id: u32,
        /// note_id from get_note_set
        note_id: u32,
    ) -> McpResult<String> {
        self.handle_get_note_text(source_id, note_id).await
    }
}
