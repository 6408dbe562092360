//! Scan summary artifact
//!
//! The `scan` command writes a JSON summary of one directory's notes to a
//! hidden file inside that directory. The catalog never reads it.

use crate::notes::{DirectoryBuilder, NoteSet, ScanError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SUMMARY_FILENAME: &str = ".llm_summary.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub id: u32,
    pub relative_path: Option<String>,
    pub title: Option<String>,
    pub created: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub generated_by: String,
    pub generated_on: String,
    pub directory: String,
    pub total_files: usize,
    pub files: Vec<SummaryEntry>,
}

impl From<NoteSet> for ScanSummary {
    fn from(set: NoteSet) -> Self {
        Self {
            generated_by: set.generated_by,
            generated_on: set.generated_on,
            directory: set.directory.unwrap_or_default(),
            total_files: set.total_files,
            files: set
                .notes
                .into_iter()
                .map(|note| SummaryEntry {
                    id: note.note_id,
                    relative_path: note.path,
                    title: note.title,
                    created: note.created,
                    description: note.description,
                })
                .collect(),
        }
    }
}

/// Scan `directory` without writing anything
pub fn scan(directory: &Path) -> Result<ScanSummary, ScanError> {
    // Scanning a directory as its own root keeps paths relative to it
    let set = DirectoryBuilder::new(directory).build(Path::new(""))?;
    Ok(set.into())
}

/// Scan `directory` and write its summary file, returning the file's path
pub fn write_summary(directory: &Path) -> Result<PathBuf> {
    let summary = scan(directory)?;
    let output_path = Path::new(&summary.directory).join(SUMMARY_FILENAME);

    let content = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
    fs::write(&output_path, content)
        .with_context(|| format!("Failed to write summary to '{}'", output_path.display()))?;

    tracing::info!(
        path = %output_path.display(),
        files = summary.total_files,
        "Summary saved"
    );
    Ok(output_path)
}

/// Load a previously written summary file
pub fn read_summary(path: &Path) -> Result<ScanSummary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read summary '{}'", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid summary '{}'", path.display()))
}
