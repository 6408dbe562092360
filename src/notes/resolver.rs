//! Source resolution
//!
//! Turns a validated configuration into the effective source list and the
//! note set each source produces.

use super::daily::build_daily;
use super::directory::DirectoryBuilder;
use super::note::{NoteSet, NoteSource, SourceKind};
use crate::config::NotesConfig;
use chrono::NaiveDate;
use std::path::Path;

const DAILY_SOURCE_NAME: &str = "Daily Notes";

/// Effective source list: the synthetic daily source (when enabled) first,
/// then the configured sources in declared order.
///
/// Pure; the configuration is never modified.
pub fn effective_sources(config: &NotesConfig) -> Vec<NoteSource> {
    let mut sources = Vec::with_capacity(config.notes.len() + 1);

    if config.daily_notes.enabled {
        sources.push(NoteSource {
            source_id: config.daily_source_id(),
            name: DAILY_SOURCE_NAME.to_string(),
            description: format!(
                "Daily notes from the last {} day(s) in: {}",
                config.daily_notes.days,
                config.daily_notes.paths.join(", ")
            ),
            kind: SourceKind::Daily {
                policy: config.daily_notes.clone(),
            },
        });
    }

    sources.extend(config.notes.iter().map(|source| NoteSource {
        source_id: source.source_id,
        name: source.name.clone(),
        description: source.description.clone(),
        kind: SourceKind::Directory {
            path: source.path.clone().unwrap_or_default(),
        },
    }));

    sources
}

/// Build the note set for one source, `None` when it yields nothing
pub fn resolve_source(source: &NoteSource, vault_root: &Path, today: NaiveDate) -> Option<NoteSet> {
    let mut note_set = match &source.kind {
        SourceKind::Daily { policy } => build_daily(policy, vault_root, today)?,
        SourceKind::Directory { path } => {
            let relative = Path::new(path.trim_start_matches(['/', '\\']));
            match DirectoryBuilder::new(vault_root).build(relative) {
                Ok(set) => set,
                Err(e) => {
                    tracing::warn!(
                        source_id = source.source_id,
                        name = %source.name,
                        error = %e,
                        "Note source could not be resolved"
                    );
                    return None;
                }
            }
        }
    };
    note_set.source_id = Some(source.source_id);
    Some(note_set)
}

/// Resolve every effective source. Sources that yield no set are omitted.
pub fn resolve(config: &NotesConfig, today: NaiveDate) -> (Vec<NoteSource>, Vec<NoteSet>) {
    let sources = effective_sources(config);
    let note_sets = sources
        .iter()
        .filter_map(|source| resolve_source(source, &config.vault_path, today))
        .collect();
    (sources, note_sets)
}
