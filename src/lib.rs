//! VSCodeVim key remapping generator
//!
//! Expands small before → after mapping tables into the per-mode binding
//! lists VSCodeVim reads, and layers them over a settings template.

pub mod binding;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod merge;
pub mod settings;
pub mod tracing;

// Re-export commonly used types
pub use binding::{prefix, uppercase, BindingPair};
pub use config::{GeneratorConfig, MappingTable};
pub use error::{ConfigError, RemapError};
pub use generator::{expand, generate, Generator, SettingsDocument};
pub use merge::merge;
pub use settings::{run, RunOptions};
