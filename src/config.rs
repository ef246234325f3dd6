//! Generator configuration: mapping tables and target mode keys
//!
//! The defaults are the Dvorak-style layout this tool ships with. A YAML file
//! can override any subset of fields:
//!
//! ```yaml
//! movement:
//!   d: h
//!   h: j
//! window_prefix: "<C-w>"
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Ordered before → after chord lookup; iteration order is insertion order
pub type MappingTable = IndexMap<String, String>;

pub const COMMAND_LINE_MODE: &str = "vim.commandLineModeKeyBindingsNonRecursive";
pub const NORMAL_MODE: &str = "vim.normalModeKeyBindingsNonRecursive";
pub const VISUAL_MODE: &str = "vim.visualModeKeyBindingsNonRecursive";
pub const OPERATOR_PENDING_MODE: &str = "vim.operatorPendingModeKeyBindings";
pub const INSERT_MODE: &str = "vim.insertModeKeyBindingsNonRecursive";

/// Window-command chord prepended to movement bindings in normal mode
pub const WINDOW_PREFIX: &str = "<C-w>";

/// Immutable inputs for [`crate::Generator`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Cursor movement keys; also replicated behind the window prefix
    pub movement: MappingTable,
    /// Remaps shared by every movement mode; wins over `movement` on collision
    pub generic: MappingTable,
    /// Insert-mode only remaps
    pub insert: MappingTable,
    /// Modes receiving `generic ∪ movement`, in output order
    pub movement_modes: Vec<String>,
    /// The movement mode that also receives the prefixed movement pass
    pub overlap_mode: String,
    pub insert_mode: String,
    pub window_prefix: String,
}

fn table(entries: &[(&str, &str)]) -> MappingTable {
    entries
        .iter()
        .map(|(before, after)| (before.to_string(), after.to_string()))
        .collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            movement: table(&[("d", "h"), ("h", "j"), ("t", "k"), ("n", "l")]),
            generic: table(&[("l", "n"), ("j", "d"), (";", ":"), ("-", "$")]),
            insert: table(&[("<C-c>", "<Esc>")]),
            movement_modes: [COMMAND_LINE_MODE, NORMAL_MODE, VISUAL_MODE, OPERATOR_PENDING_MODE]
                .iter()
                .map(|mode| mode.to_string())
                .collect(),
            overlap_mode: NORMAL_MODE.to_string(),
            insert_mode: INSERT_MODE.to_string(),
            window_prefix: WINDOW_PREFIX.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load and validate a config from a YAML file
    pub fn load_from_yaml(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse_yaml(&content)?;
        tracing::info!("Loaded generator tables from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a config from a YAML string
    pub fn parse_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check table chords are non-empty and every mode key lands in one pass
    ///
    /// Movement modes must be distinct, the insert mode must not be one of
    /// them, and the overlap mode must be one of them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, table) in [
            ("movement", &self.movement),
            ("generic", &self.generic),
            ("insert", &self.insert),
        ] {
            if table
                .iter()
                .any(|(before, after)| before.is_empty() || after.is_empty())
            {
                return Err(ConfigError::EmptyChord { table: name });
            }
        }

        if self.insert_mode.is_empty() || self.movement_modes.iter().any(String::is_empty) {
            return Err(ConfigError::EmptyModeKey);
        }

        for (i, mode) in self.movement_modes.iter().enumerate() {
            if self.movement_modes[..i].contains(mode) {
                return Err(ConfigError::DuplicateModeKey(mode.clone()));
            }
        }

        if self.movement_modes.contains(&self.insert_mode) {
            return Err(ConfigError::InsertModeCollision(self.insert_mode.clone()));
        }

        if !self.movement_modes.contains(&self.overlap_mode) {
            return Err(ConfigError::UnknownOverlapKey(self.overlap_mode.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_tables_keep_order() {
        let config = GeneratorConfig::default();
        let movement: Vec<_> = config.movement.keys().map(String::as_str).collect();
        assert_eq!(movement, vec!["d", "h", "t", "n"]);
        assert_eq!(config.generic[";"], ":");
        assert_eq!(config.insert["<C-c>"], "<Esc>");
    }

    #[test]
    fn test_default_modes() {
        let config = GeneratorConfig::default();
        assert_eq!(config.movement_modes.len(), 4);
        assert_eq!(config.movement_modes[1], NORMAL_MODE);
        assert_eq!(config.overlap_mode, NORMAL_MODE);
        assert_eq!(config.insert_mode, INSERT_MODE);
        assert_eq!(config.window_prefix, "<C-w>");
    }

    #[test]
    fn test_parse_partial_yaml_falls_back_to_defaults() {
        let yaml = r#"
generic:
  l: n
  jj: dd
"#;
        let config = GeneratorConfig::parse_yaml(yaml).unwrap();
        let generic: Vec<_> = config.generic.keys().map(String::as_str).collect();

        assert_eq!(generic, vec!["l", "jj"]);
        assert_eq!(config.movement, GeneratorConfig::default().movement);
        assert_eq!(config.window_prefix, WINDOW_PREFIX);
    }

    #[test]
    fn test_parse_rejects_empty_chord() {
        let yaml = r#"
insert:
  "<C-c>": ""
"#;
        let err = GeneratorConfig::parse_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyChord { table: "insert" }));
    }

    #[test]
    fn test_parse_rejects_unknown_overlap_mode() {
        let yaml = r#"
overlap_mode: vim.insertModeKeyBindingsNonRecursive
"#;
        let err = GeneratorConfig::parse_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownOverlapKey(_)));
    }

    #[test]
    fn test_parse_rejects_duplicate_movement_mode() {
        let yaml = r#"
movement_modes:
  - vim.normalModeKeyBindingsNonRecursive
  - vim.visualModeKeyBindingsNonRecursive
  - vim.normalModeKeyBindingsNonRecursive
"#;
        let err = GeneratorConfig::parse_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateModeKey(mode) if mode == NORMAL_MODE));
    }

    #[test]
    fn test_parse_rejects_insert_mode_among_movement_modes() {
        let yaml = r#"
insert_mode: vim.visualModeKeyBindingsNonRecursive
"#;
        let err = GeneratorConfig::parse_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::InsertModeCollision(mode) if mode == VISUAL_MODE));
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        let err = GeneratorConfig::parse_yaml("movement: [d, h").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GeneratorConfig::load_from_yaml(Path::new("/nonexistent/tables.yaml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
