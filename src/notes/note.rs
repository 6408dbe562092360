use chrono::{Local, NaiveDate, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::config::DailyNotesPolicy;

/// Provenance tag stamped on every note set built by this crate
pub const GENERATED_BY: &str = env!("CARGO_PKG_NAME");

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local time as an RFC 3339 string (used for `generated_on`)
pub fn local_timestamp_now() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Where the notes of a source come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// A directory of markdown files, relative to the vault root
    Directory { path: String },
    /// The synthetic daily-notes generator
    Daily { policy: DailyNotesPolicy },
}

/// A note source as seen by the catalog
///
/// Serialized flat as `{source_id, name, path, is_daily, description}`,
/// see `serde_impl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSource {
    pub source_id: u32,
    pub name: String,
    pub description: String,
    pub kind: SourceKind,
}

impl NoteSource {
    pub fn is_daily(&self) -> bool {
        matches!(self.kind, SourceKind::Daily { .. })
    }

    /// Vault-relative directory for directory sources, `None` for the daily source
    pub fn path(&self) -> Option<&str> {
        match &self.kind {
            SourceKind::Directory { path } => Some(path),
            SourceKind::Daily { .. } => None,
        }
    }
}

/// Lightweight metadata for one note. Never carries the body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub note_id: u32,
    /// Vault-relative path with `/` separators
    pub path: Option<String>,
    pub title: Option<String>,
    /// ISO-8601 timestamp or the header's verbatim text
    pub created: Option<String>,
    pub description: Option<String>,
}

/// The resolved collection of notes for one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSet {
    /// Owning source; set by the resolver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<u32>,
    pub generated_by: String,
    pub generated_on: String,
    /// Absolute directory for directory-derived sets
    pub directory: Option<String>,
    pub is_daily: bool,
    pub total_files: usize,
    pub notes: Vec<Note>,
}

impl NoteSet {
    pub(crate) fn new(directory: Option<String>, is_daily: bool, notes: Vec<Note>) -> Self {
        Self {
            source_id: None,
            generated_by: GENERATED_BY.to_string(),
            generated_on: local_timestamp_now(),
            directory,
            is_daily,
            total_files: notes.len(),
            notes,
        }
    }

    /// Linear scan for a note by id
    pub fn find_note(&self, note_id: u32) -> Option<&Note> {
        self.notes.iter().find(|n| n.note_id == note_id)
    }
}
