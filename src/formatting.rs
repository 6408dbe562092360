//! Formatting helper functions for the notes MCP server
//!
//! Tool results are returned to the client as pretty-printed JSON text, and
//! catalog lookup failures become public `INVALID_PARAMS` errors so the
//! caller can see which id or path was missing.

use crate::catalog::CatalogError;
use mcp_attr::{Result as McpResult, bail};
use serde::Serialize;

/// Serialize a tool result as pretty JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> McpResult<String> {
    match serde_json::to_string_pretty(value) {
        Ok(json) => Ok(json),
        Err(e) => bail!("Failed to serialize result: {}", e),
    }
}

/// Convert a catalog lookup failure into an MCP error visible to the client
pub fn catalog_error(err: CatalogError) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(err.to_string(), true)
}
