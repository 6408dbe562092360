//! Frontmatter splitting
//!
//! A document carries a header when its first line is a fence (three or
//! more dashes, trailing whitespace allowed) and a later line is a fence too.
//! The text between the fences is YAML. Only a mapping contributes keys; any
//! other YAML value leaves the header empty and the note is kept.

use serde_yaml::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Parsed key/value header of one document
pub type Header = BTreeMap<String, Value>;

#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("Failed to parse frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

const MIN_FENCE_DASHES: usize = 3;

/// Split raw document text into its header map and body.
///
/// Text without a complete header is returned whole as the body with an
/// empty header.
pub fn split(content: &str) -> Result<(Header, String), FrontmatterError> {
    let Some(rest) = strip_opening_fence(content) else {
        return Ok((Header::new(), content.to_string()));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if is_fence(line) {
            let header = parse_header(&rest[..offset])?;
            let body = rest[offset + line.len()..].trim_start_matches(['\r', '\n']);
            return Ok((header, body.to_string()));
        }
        offset += line.len();
    }

    // No closing fence, treat as no frontmatter
    Ok((Header::new(), content.to_string()))
}

/// Return only the body of a document
pub fn strip(content: &str) -> Result<String, FrontmatterError> {
    split(content).map(|(_, body)| body)
}

fn is_fence(line: &str) -> bool {
    let line = line.trim_end();
    line.len() >= MIN_FENCE_DASHES && line.chars().all(|c| c == '-')
}

fn strip_opening_fence(content: &str) -> Option<&str> {
    let first = content.split_inclusive('\n').next()?;
    if !first.ends_with('\n') || !is_fence(first) {
        return None;
    }
    Some(&content[first.len()..])
}

fn parse_header(yaml: &str) -> Result<Header, FrontmatterError> {
    if yaml.trim().is_empty() {
        return Ok(Header::new());
    }
    let Value::Mapping(mapping) = serde_yaml::from_str::<Value>(yaml)? else {
        // A fenced block that is not a mapping (plain text, a list, comments only)
        return Ok(Header::new());
    };

    let header = mapping
        .into_iter()
        .filter_map(|(key, value)| {
            let key = match key {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key, value))
        })
        .collect();
    Ok(header)
}
