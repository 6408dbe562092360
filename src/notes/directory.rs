//! Directory note-set builder
//!
//! Scans one directory (non-recursive) for `.md`/`.markdown` files and
//! extracts a `Note` from each. Files that cannot be read or whose header
//! does not parse are logged and skipped; the rest of the scan continues.

use super::extract::extract;
use super::frontmatter;
use super::note::{Note, NoteSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Directory '{}' does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("Failed to read directory '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
enum FileError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Frontmatter(#[from] frontmatter::FrontmatterError),
}

/// Builds note sets from directories under a vault root
pub struct DirectoryBuilder<'a> {
    vault_root: &'a Path,
}

impl<'a> DirectoryBuilder<'a> {
    pub fn new(vault_root: &'a Path) -> Self {
        Self { vault_root }
    }

    /// Scan `vault_root/relative_dir`.
    ///
    /// Note paths are relative to the vault root. Ids are the 1-based
    /// position in filename order, so a skipped file leaves a gap.
    pub fn build(&self, relative_dir: &Path) -> Result<NoteSet, ScanError> {
        let directory = self.vault_root.join(relative_dir);
        let absolute = check_directory(&directory)?;

        let mut notes = Vec::new();
        for (index, file_name) in list_markdown_files(&absolute)?.into_iter().enumerate() {
            let note_id = index as u32 + 1;
            let relative_path = relative_dir.join(&file_name);
            match read_note(note_id, &absolute.join(&file_name), &relative_path) {
                Ok(note) => notes.push(note),
                Err(e) => {
                    tracing::warn!(
                        file = %relative_path.display(),
                        error = %e,
                        "Skipping note that could not be processed"
                    );
                }
            }
        }

        tracing::debug!(
            directory = %absolute.display(),
            notes = notes.len(),
            "Scanned note directory"
        );

        Ok(NoteSet::new(
            Some(absolute.to_string_lossy().into_owned()),
            false,
            notes,
        ))
    }
}

/// Validate that `directory` exists and is a directory, returning its absolute form
pub fn check_directory(directory: &Path) -> Result<PathBuf, ScanError> {
    if !directory.exists() {
        return Err(ScanError::NotFound(directory.to_path_buf()));
    }
    if !directory.is_dir() {
        return Err(ScanError::NotADirectory(directory.to_path_buf()));
    }
    fs::canonicalize(directory).map_err(|source| ScanError::Io {
        path: directory.to_path_buf(),
        source,
    })
}

fn list_markdown_files(directory: &Path) -> Result<Vec<String>, ScanError> {
    let io_err = |source| ScanError::Io {
        path: directory.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(directory).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        if path.is_file() && is_markdown(&path) {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|md| ext.eq_ignore_ascii_case(md))
        })
}

fn read_note(note_id: u32, file: &Path, relative_path: &Path) -> Result<Note, FileError> {
    let content = fs::read_to_string(file)?;
    let (header, _body) = frontmatter::split(&content)?;
    Ok(extract(note_id, relative_path, &header))
}
