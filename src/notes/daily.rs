//! Daily note-set builder
//!
//! Daily notes are not scanned. For every (day offset, configured path)
//! pair the builder probes `vault/<path>/<YYYY-MM-DD>.md` and synthesizes a
//! note when the file exists. Misses are expected and skipped silently.

use super::extract::path_to_string;
use super::note::{Note, NoteSet};
use crate::config::{DailyNotesPolicy, vault_join};
use chrono::{Days, NaiveDate};
use std::path::Path;

/// Description given to every synthesized daily note
pub const DAILY_NOTE_DESCRIPTION: &str = "Daily note";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build the daily note set for the days ending at `today`.
///
/// Returns `None` when the policy is disabled. Ids count hits only, in
/// day-offset order and then configured path order.
pub fn build_daily(policy: &DailyNotesPolicy, vault_root: &Path, today: NaiveDate) -> Option<NoteSet> {
    if !policy.enabled {
        return None;
    }

    let mut notes = Vec::new();
    for days_ago in 0..policy.days {
        let Some(note_date) = today.checked_sub_days(Days::new(days_ago as u64)) else {
            break;
        };
        let formatted = note_date.format(DATE_FORMAT).to_string();

        for sub_path in &policy.paths {
            let candidate = vault_join(vault_root, sub_path).join(format!("{formatted}.md"));
            if !candidate.is_file() {
                continue;
            }

            let relative = Path::new(sub_path.trim_start_matches(['/', '\\']))
                .join(format!("{formatted}.md"));
            notes.push(Note {
                note_id: notes.len() as u32 + 1,
                path: Some(path_to_string(&relative)),
                title: Some(format!("Daily Note for {formatted}")),
                created: Some(formatted.clone()),
                description: Some(DAILY_NOTE_DESCRIPTION.to_string()),
            });
        }
    }

    tracing::debug!(notes = notes.len(), days = policy.days, "Built daily note set");

    Some(NoteSet::new(None, true, notes))
}
