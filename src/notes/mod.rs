//! Note domain models and the note-set construction pipeline
//!
//! This module is split into submodules:
//! - `note`: Note, NoteSet and NoteSource models
//! - `frontmatter`: header/body splitting of a single document
//! - `extract`: metadata extraction with key fallbacks
//! - `directory`: directory-backed note sets
//! - `daily`: synthetic daily note sets
//! - `resolver`: configuration to sources and note sets
//! - `serde_impl`: wire shape of NoteSource

pub mod daily;
pub mod directory;
pub mod extract;
pub mod frontmatter;
mod note;
pub mod resolver;
mod serde_impl;

// Re-export all public types
pub use directory::{DirectoryBuilder, ScanError};
pub use frontmatter::{FrontmatterError, Header};
pub use note::{
    GENERATED_BY, Note, NoteSet, NoteSource, SourceKind, local_date_today, local_timestamp_now,
};
