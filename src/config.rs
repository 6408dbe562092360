//! Configuration loading and validation
//!
//! The server reads a TOML file describing the vault root, the directory
//! note sources and the daily-notes policy. Validation is fail-fast: a
//! configuration that points at missing directories never reaches the
//! resolver.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name used by the `serve` command
pub const DEFAULT_CONFIG_FILE: &str = "notes.toml";

const DEFAULT_DAILY_DAYS: u32 = 7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Vault path '{}' does not exist or is not a directory", .0.display())]
    MissingVault(PathBuf),
    #[error("Daily notes path '{}' does not exist in the vault", .0.display())]
    MissingDailyPath(PathBuf),
    #[error("Duplicate note source id {0}")]
    DuplicateSourceId(u32),
}

/// A directory note source as declared in the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSourceConfig {
    pub source_id: u32,
    pub name: String,
    /// Vault-relative directory; absent means the vault root
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Which daily notes to expose
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyNotesPolicy {
    #[serde(default)]
    pub enabled: bool,
    /// Calendar days to look back, today included
    #[serde(default = "default_daily_days")]
    pub days: u32,
    /// Vault-relative directories holding `YYYY-MM-DD.md` files
    #[serde(default)]
    pub paths: Vec<String>,
}

fn default_daily_days() -> u32 {
    DEFAULT_DAILY_DAYS
}

impl Default for DailyNotesPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            days: DEFAULT_DAILY_DAYS,
            paths: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesConfig {
    pub vault_path: PathBuf,
    #[serde(default)]
    pub notes: Vec<NoteSourceConfig>,
    #[serde(default)]
    pub daily_notes: DailyNotesPolicy,
}

impl NotesConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file.
    ///
    /// A relative `vault_path` is resolved against the directory holding
    /// the configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;

        if config.vault_path.is_relative()
            && let Some(base) = path.parent()
        {
            config.vault_path = base.join(&config.vault_path);
        }

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Id given to the synthetic daily source
    pub fn daily_source_id(&self) -> u32 {
        self.notes.len() as u32 + 1
    }

    /// Check that every directory the configuration relies on exists
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.vault_path.is_dir() {
            return Err(ConfigError::MissingVault(self.vault_path.clone()));
        }

        let mut seen = HashSet::new();
        for source in &self.notes {
            if !seen.insert(source.source_id) {
                return Err(ConfigError::DuplicateSourceId(source.source_id));
            }
        }

        if self.daily_notes.enabled {
            let daily_id = self.daily_source_id();
            if seen.contains(&daily_id) {
                return Err(ConfigError::DuplicateSourceId(daily_id));
            }

            for sub_path in &self.daily_notes.paths {
                let full = vault_join(&self.vault_path, sub_path);
                if !full.is_dir() {
                    return Err(ConfigError::MissingDailyPath(full));
                }
            }
        }

        Ok(())
    }
}

/// Join a configured sub-path onto the vault root.
///
/// A leading `/` is vault-relative, not a filesystem root.
pub fn vault_join(vault_root: &Path, sub_path: &str) -> PathBuf {
    vault_root.join(sub_path.trim_start_matches(['/', '\\']))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
vault_path = "/path/to/vault"

[[notes]]
source_id = 1
name = "Test Note"
path = "/path/to/test_notes"
description = "This is a test note."

[daily_notes]
enabled = true
paths = ["/daily_notes"]
"#;

    #[test]
    fn test_parse_configuration() {
        let config = NotesConfig::from_toml_str(SAMPLE).unwrap();

        assert_eq!(config.notes[0].source_id, 1);
        assert_eq!(config.notes[0].name, "Test Note");
        assert_eq!(config.notes[0].path.as_deref(), Some("/path/to/test_notes"));
        assert_eq!(config.vault_path, PathBuf::from("/path/to/vault"));
        assert!(config.daily_notes.enabled);
        assert_eq!(config.daily_notes.days, 7);
        assert_eq!(config.daily_notes.paths, vec!["/daily_notes".to_string()]);
    }

    #[test]
    fn test_daily_notes_default_disabled() {
        let config = NotesConfig::from_toml_str("vault_path = \"/v\"\n").unwrap();
        assert!(config.notes.is_empty());
        assert!(!config.daily_notes.enabled);
    }

    #[test]
    fn test_missing_vault_path_is_parse_error() {
        let result = NotesConfig::from_toml_str("[[notes]]\nsource_id = 1\nname = \"x\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = NotesConfig::load(dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_resolves_relative_vault() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("vault")).unwrap();
        let config_path = dir.path().join("notes.toml");
        fs::write(&config_path, "vault_path = \"vault\"\n").unwrap();

        let config = NotesConfig::load_validated(&config_path).unwrap();
        assert_eq!(config.vault_path, dir.path().join("vault"));
    }

    #[test]
    fn test_validate_missing_vault() {
        let dir = TempDir::new().unwrap();
        let config = NotesConfig {
            vault_path: dir.path().join("missing"),
            notes: vec![],
            daily_notes: DailyNotesPolicy::default(),
        };
        assert!(matches!(config.validate(), Err(ConfigError::MissingVault(_))));
    }

    #[test]
    fn test_validate_missing_daily_path() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Daily")).unwrap();
        let mut config = NotesConfig {
            vault_path: dir.path().to_path_buf(),
            notes: vec![],
            daily_notes: DailyNotesPolicy {
                enabled: true,
                days: 3,
                paths: vec!["/Daily".to_string(), "Journal".to_string()],
            },
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingDailyPath(p)) if p.ends_with("Journal")
        ));

        // Disabled policies are not checked
        config.daily_notes.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_ids() {
        let dir = TempDir::new().unwrap();
        let source = |id| NoteSourceConfig {
            source_id: id,
            name: format!("source {id}"),
            path: None,
            description: String::new(),
        };
        let mut config = NotesConfig {
            vault_path: dir.path().to_path_buf(),
            notes: vec![source(1), source(1)],
            daily_notes: DailyNotesPolicy::default(),
        };
        assert!(matches!(config.validate(), Err(ConfigError::DuplicateSourceId(1))));

        // Daily id (count + 1 = 3) collides with a configured id
        config.notes = vec![source(3), source(1)];
        config.daily_notes.enabled = true;
        assert!(matches!(config.validate(), Err(ConfigError::DuplicateSourceId(3))));
    }

    #[test]
    fn test_vault_join_strips_leading_slash() {
        let root = Path::new("/vault");
        assert_eq!(vault_join(root, "/Daily"), PathBuf::from("/vault/Daily"));
        assert_eq!(vault_join(root, "Work/Daily"), PathBuf::from("/vault/Work/Daily"));
        assert_eq!(vault_join(root, ""), PathBuf::from("/vault/"));
    }
}
