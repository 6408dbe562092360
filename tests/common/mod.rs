//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use notes_mcp::{DailyNotesPolicy, NoteSourceConfig, NotesConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A throwaway vault on disk
pub struct TestVault {
    pub dir: TempDir,
}

impl TestVault {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the vault root, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    pub fn mkdir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.path().join(relative)).unwrap();
        self
    }

    pub fn config(&self, sources: Vec<NoteSourceConfig>, daily: DailyNotesPolicy) -> NotesConfig {
        NotesConfig {
            vault_path: self.path().to_path_buf(),
            notes: sources,
            daily_notes: daily,
        }
    }
}

/// Create a directory source with minimal fields
pub fn source(source_id: u32, name: &str, path: &str) -> NoteSourceConfig {
    NoteSourceConfig {
        source_id,
        name: name.to_string(),
        path: Some(path.to_string()),
        description: format!("{name} notes"),
    }
}

pub fn daily(days: u32, paths: &[&str]) -> DailyNotesPolicy {
    DailyNotesPolicy {
        enabled: true,
        days,
        paths: paths.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// `YYYY-MM-DD` of `days_ago` days before `today`
pub fn day_name(today: NaiveDate, days_ago: u64) -> String {
    today
        .checked_sub_days(Days::new(days_ago))
        .unwrap()
        .format("%Y-%m-%d")
        .to_string()
}
