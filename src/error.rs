//! Error types for loading, generating and writing settings

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a settings run
#[derive(Error, Debug)]
pub enum RemapError {
    #[error("failed to read template {}: {source}", .path.display())]
    ReadTemplate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse template {}: {source}", .path.display())]
    ParseTemplate {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("template {} must be a JSON object at the top level", .path.display())]
    TemplateNotObject { path: PathBuf },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write settings {}: {source}", .path.display())]
    WriteSettings {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that can occur when loading generator tables
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read tables {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse tables: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("empty key chord in {table} table")]
    EmptyChord { table: &'static str },

    #[error("overlap mode key '{0}' is not one of the movement mode keys")]
    UnknownOverlapKey(String),

    #[error("mode key '{0}' is listed more than once in movement modes")]
    DuplicateModeKey(String),

    #[error("insert mode key '{0}' is also a movement mode key")]
    InsertModeCollision(String),

    #[error("empty mode key")]
    EmptyModeKey,
}

pub type Result<T, E = RemapError> = std::result::Result<T, E>;
