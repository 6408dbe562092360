//! Catalog service
//!
//! Holds the sources and note sets built at startup and answers lookups
//! against them. The catalog is immutable after construction; only
//! `get_note_text` touches the filesystem.

use crate::config::{NotesConfig, vault_join};
use crate::notes::{self, FrontmatterError, Note, NoteSet, NoteSource, frontmatter, resolver};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Note source not found: {0}")]
    SourceNotFound(u32),
    #[error("Note set not found for source ID {0}")]
    NoteSetNotFound(u32),
    #[error("Note not found for source ID {source_id} and note ID {note_id}")]
    NoteNotFound { source_id: u32, note_id: u32 },
    #[error("Note path is not set for note ID {0}")]
    NotePathUnset(u32),
    #[error("Note file does not exist: '{}'", .0.display())]
    NoteFileMissing(PathBuf),
    #[error("Failed to read note file '{}': {source}", .path.display())]
    ReadNote {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse note file '{}': {source}", .path.display())]
    Frontmatter {
        path: PathBuf,
        source: FrontmatterError,
    },
}

pub struct Catalog {
    vault_root: PathBuf,
    sources: Vec<NoteSource>,
    note_sets: Vec<NoteSet>,
}

impl Catalog {
    /// Build the whole catalog from a validated configuration, with daily
    /// notes counted back from today
    pub fn build(config: &NotesConfig) -> Self {
        Self::build_for_date(config, notes::local_date_today())
    }

    /// Build the catalog with daily notes counted back from `today`
    pub fn build_for_date(config: &NotesConfig, today: NaiveDate) -> Self {
        let (sources, note_sets) = resolver::resolve(config, today);
        tracing::info!(
            vault = %config.vault_path.display(),
            sources = sources.len(),
            note_sets = note_sets.len(),
            notes = note_sets.iter().map(|s| s.total_files).sum::<usize>(),
            "Note catalog built"
        );
        Self::from_parts(config.vault_path.clone(), sources, note_sets)
    }

    pub fn from_parts(vault_root: PathBuf, sources: Vec<NoteSource>, note_sets: Vec<NoteSet>) -> Self {
        Self {
            vault_root,
            sources,
            note_sets,
        }
    }

    pub fn vault_root(&self) -> &Path {
        &self.vault_root
    }

    pub fn list_sources(&self) -> &[NoteSource] {
        &self.sources
    }

    pub fn get_source(&self, source_id: u32) -> Result<&NoteSource, CatalogError> {
        self.sources
            .iter()
            .find(|s| s.source_id == source_id)
            .ok_or(CatalogError::SourceNotFound(source_id))
    }

    pub fn get_note_set(&self, source_id: u32) -> Result<&NoteSet, CatalogError> {
        let source = self.get_source(source_id)?;
        let is_daily = source.is_daily();
        self.note_sets
            .iter()
            .find(|set| set.source_id == Some(source_id) && set.is_daily == is_daily)
            .ok_or(CatalogError::NoteSetNotFound(source_id))
    }

    pub fn get_note(&self, source_id: u32, note_id: u32) -> Result<&Note, CatalogError> {
        self.get_note_set(source_id)?
            .find_note(note_id)
            .ok_or(CatalogError::NoteNotFound { source_id, note_id })
    }

    /// Read the note's body fresh from disk with its header removed
    pub fn get_note_text(&self, source_id: u32, note_id: u32) -> Result<String, CatalogError> {
        let note = self.get_note(source_id, note_id)?;
        let relative = note
            .path
            .as_deref()
            .ok_or(CatalogError::NotePathUnset(note_id))?;

        let path = vault_join(&self.vault_root, relative);
        if !path.is_file() {
            return Err(CatalogError::NoteFileMissing(path));
        }

        let content = fs::read_to_string(&path).map_err(|source| CatalogError::ReadNote {
            path: path.clone(),
            source,
        })?;
        frontmatter::strip(&content).map_err(|source| CatalogError::Frontmatter { path, source })
    }
}
