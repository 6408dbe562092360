//! Metadata extraction
//!
//! Turns a parsed header plus the note's path into a `Note`, applying the
//! ordered key fallbacks for title, created and description.

use super::frontmatter::Header;
use super::note::Note;
use chrono::{DateTime, NaiveDateTime};
use regex::Regex;
use serde_yaml::Value;
use std::path::Path;
use std::sync::LazyLock;

const TITLE_KEYS: [&str; 2] = ["title", "Title"];
const CREATED_KEYS: [&str; 4] = ["Created", "created", "date", "Date"];
const DESCRIPTION_KEYS: [&str; 4] = ["Description", "description", "Summary", "summary"];

/// Naive date-time layouts recognized as timestamps in `created` values
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[-_]+\s*").expect("valid separator regex"));

/// Build a note record from a document header.
///
/// `path` is stored as given (vault-relative) and its file stem is the
/// title fallback. Missing fields are `None`, never an error.
pub fn extract(note_id: u32, path: &Path, header: &Header) -> Note {
    let title = first_present(header, &TITLE_KEYS)
        .and_then(render_value)
        .or_else(|| title_from_path(path));

    let created = first_present(header, &CREATED_KEYS).and_then(render_created);

    let description = first_present(header, &DESCRIPTION_KEYS).and_then(render_value);

    Note {
        note_id,
        path: Some(path_to_string(path)),
        title,
        created,
        description,
    }
}

/// Derive a readable title from a filename: `my-first_note.md` -> `My First Note`
pub fn title_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    let spaced = SEPARATORS.replace_all(&stem, " ");
    let title = title_case(&spaced);
    if title.is_empty() { None } else { Some(title) }
}

/// Render a path with `/` between components regardless of platform.
///
/// Characters inside a component are kept as-is, so a `\\` in a Unix
/// filename survives.
pub fn path_to_string(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }
    result
}

fn first_present<'a>(header: &'a Header, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| header.get(*key))
        .find(|value| is_present(value))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Tagged(tagged) => is_present(&tagged.value),
        _ => true,
    }
}

fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => render_value(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => serde_yaml::to_string(value)
            .ok()
            .map(|s| s.trim_end().to_string()),
    }
}

fn render_created(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(render_timestamp(s).unwrap_or_else(|| s.clone())),
        Value::Tagged(tagged) => render_created(&tagged.value),
        other => render_value(other),
    }
}

/// ISO-8601 form of a string that holds a date-time, `None` otherwise
fn render_timestamp(text: &str) -> Option<String> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.to_rfc3339());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::frontmatter;

    fn header(yaml: &str) -> Header {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_extract_title_from_filename() {
        let path = Path::new("example_file.md");
        assert_eq!(title_from_path(path).as_deref(), Some("Example File"));
    }

    #[test]
    fn test_title_from_filename_collapses_separators() {
        assert_eq!(
            title_from_path(Path::new("notes/my - first__NOTE.markdown")).as_deref(),
            Some("My First Note")
        );
        assert_eq!(
            title_from_path(Path::new("2024-01-05.md")).as_deref(),
            Some("2024 01 05")
        );
    }

    #[test]
    fn test_path_to_string_joins_components() {
        assert_eq!(path_to_string(Path::new("Projects/plan.md")), "Projects/plan.md");
        assert_eq!(path_to_string(Path::new("plan.md")), "plan.md");
    }

    #[cfg(unix)]
    #[test]
    fn test_path_to_string_keeps_backslash_in_unix_filename() {
        assert_eq!(
            path_to_string(Path::new("Projects/back\\slash.md")),
            "Projects/back\\slash.md"
        );
    }

    #[test]
    fn test_extract_full_header() {
        let h = header(
            "title: Test Title\nCreated: 2023-10-01 00:00:00\nDescription: This is a test description.\n",
        );
        let note = extract(1, Path::new("test/example_file.md"), &h);

        assert_eq!(note.note_id, 1);
        assert_eq!(note.path.as_deref(), Some("test/example_file.md"));
        assert_eq!(note.title.as_deref(), Some("Test Title"));
        assert_eq!(note.created.as_deref(), Some("2023-10-01T00:00:00"));
        assert_eq!(note.description.as_deref(), Some("This is a test description."));
    }

    #[test]
    fn test_title_header_wins_over_filename() {
        let h = header("Title: Explicit\n");
        let note = extract(2, Path::new("some-other-name.md"), &h);
        assert_eq!(note.title.as_deref(), Some("Explicit"));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let note = extract(3, Path::new("plain.md"), &Header::new());
        assert_eq!(note.title.as_deref(), Some("Plain"));
        assert!(note.created.is_none());
        assert!(note.description.is_none());
    }

    #[test]
    fn test_created_precedence() {
        let h = header("date: 2020-01-01\nCreated: 2023-05-06\n");
        let note = extract(1, Path::new("a.md"), &h);
        assert_eq!(note.created.as_deref(), Some("2023-05-06"));
    }

    #[test]
    fn test_created_skips_null_and_empty() {
        let h = header("Created: ~\ncreated: ''\nDate: 2022-02-02\n");
        let note = extract(1, Path::new("a.md"), &h);
        assert_eq!(note.created.as_deref(), Some("2022-02-02"));
    }

    #[test]
    fn test_created_timestamp_forms() {
        let note = extract(1, Path::new("a.md"), &header("created: 2023-10-01T08:30:00+02:00\n"));
        assert_eq!(note.created.as_deref(), Some("2023-10-01T08:30:00+02:00"));

        let note = extract(1, Path::new("a.md"), &header("created: 2023-10-01 08:30\n"));
        assert_eq!(note.created.as_deref(), Some("2023-10-01T08:30:00"));

        let note = extract(1, Path::new("a.md"), &header("created: last tuesday\n"));
        assert_eq!(note.created.as_deref(), Some("last tuesday"));

        let note = extract(1, Path::new("a.md"), &header("created: 20231001\n"));
        assert_eq!(note.created.as_deref(), Some("20231001"));
    }

    #[test]
    fn test_description_fallback_order() {
        let h = header("summary: lower\nSummary: upper\n");
        let note = extract(1, Path::new("a.md"), &h);
        assert_eq!(note.description.as_deref(), Some("upper"));

        let h = header("description: plain\nsummary: ignored\n");
        let note = extract(1, Path::new("a.md"), &h);
        assert_eq!(note.description.as_deref(), Some("plain"));
    }

    #[test]
    fn test_non_string_values_render() {
        let h = header("title: 42\ndescription: true\n");
        let note = extract(1, Path::new("a.md"), &h);
        assert_eq!(note.title.as_deref(), Some("42"));
        assert_eq!(note.description.as_deref(), Some("true"));
    }

    #[test]
    fn test_extract_from_split_document() {
        let (h, _) = frontmatter::split("---\nsummary: From doc\n---\nBody").unwrap();
        let note = extract(7, Path::new("Inbox/quick_idea.md"), &h);
        assert_eq!(note.title.as_deref(), Some("Quick Idea"));
        assert_eq!(note.description.as_deref(), Some("From doc"));
    }
}
