//! Template loading, merging and settings persistence
//!
//! A run reads `template.json`, layers the generated bindings over it and
//! writes `settings.json`. Managed mode keys replace the template's values
//! wholesale; every other template key passes through untouched.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{RemapError, Result};
use crate::generator::{Generator, SettingsDocument};
use crate::merge::merge;

pub const TEMPLATE_JSON: &str = "template.json";
pub const SETTINGS_JSON: &str = "settings.json";

/// Inputs for a single [`run`]
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub template: PathBuf,
    pub output: PathBuf,
    /// Print the merged document to stdout instead of writing `output`
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            template: PathBuf::from(TEMPLATE_JSON),
            output: PathBuf::from(SETTINGS_JSON),
            dry_run: false,
        }
    }
}

/// Read and parse the template; the top level must be an object
pub fn load_template(path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path).map_err(|source| RemapError::ReadTemplate {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(&content, path)
}

/// Parse a template from a JSON string
pub fn parse_template(json: &str) -> Result<Map<String, Value>> {
    parse_document(json, Path::new("<string>"))
}

fn parse_document(json: &str, path: &Path) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(json).map_err(|source| RemapError::ParseTemplate {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(RemapError::TemplateNotObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Layer `settings` over `template`; generated values win on collision
pub fn merge_settings(
    template: Map<String, Value>,
    settings: &SettingsDocument,
) -> Result<Map<String, Value>> {
    let generated = settings
        .iter()
        .map(|(mode, bindings)| -> Result<(String, Value)> {
            Ok((mode.clone(), serde_json::to_value(bindings)?))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(merge(template, generated))
}

/// Pretty-print with 2-space indentation and a trailing newline
pub fn render(document: &Map<String, Value>) -> Result<String> {
    let mut content = serde_json::to_string_pretty(document)?;
    content.push('\n');
    Ok(content)
}

/// Overwrite `path` with the rendered document
pub fn write_settings(path: &Path, document: &Map<String, Value>) -> Result<()> {
    let content = render(document)?;
    std::fs::write(path, content).map_err(|source| RemapError::WriteSettings {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the template, merge in generated bindings, and persist the result
///
/// Returns the merged document.
pub fn run(generator: &Generator, options: &RunOptions) -> Result<Map<String, Value>> {
    tracing::info!("Reading {}", options.template.display());
    let template = load_template(&options.template)?;

    let settings = generator.generate();
    let merged = merge_settings(template, &settings)?;

    if options.dry_run {
        print!("{}", render(&merged)?);
    } else {
        tracing::info!("Writing {}", options.output.display());
        write_settings(&options.output, &merged)?;
    }

    Ok(merged)
}
