//! Expansion of mapping tables into per-mode binding lists

use std::path::Path;

use indexmap::IndexMap;

use crate::binding::BindingPair;
use crate::config::{GeneratorConfig, MappingTable};
use crate::error::Result;
use crate::merge::merge;

/// Mode key → ordered binding list, the shape VSCodeVim reads
pub type SettingsDocument = IndexMap<String, Vec<BindingPair>>;

/// Expand `table` into a binding list for every mode in `mode_keys`
///
/// Each entry becomes `{before: [k], after: [v]}` with `prefix` applied. With
/// `add_upper_case` the upper-cased variant follows each pair directly. Every
/// requested mode is present in the output, even for an empty table.
pub fn expand<S: AsRef<str>>(
    table: &MappingTable,
    mode_keys: &[S],
    add_upper_case: bool,
    prefix: &str,
) -> SettingsDocument {
    let mut settings = SettingsDocument::with_capacity(mode_keys.len());

    for mode in mode_keys {
        let bindings = settings.entry(mode.as_ref().to_string()).or_default();

        for (before, after) in table {
            let pair = BindingPair::new(before.as_str(), after.as_str());
            bindings.push(pair.with_prefix(prefix));
            if add_upper_case {
                bindings.push(pair.to_upper().with_prefix(prefix));
            }
        }
    }

    settings
}

/// Builds the managed part of the settings document from a [`GeneratorConfig`]
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Build from a YAML tables file, or the built-in tables when `None`
    pub fn from_tables(tables: Option<&Path>) -> Result<Self> {
        let config = match tables {
            Some(path) => GeneratorConfig::load_from_yaml(path)?,
            None => GeneratorConfig::default(),
        };
        Ok(Self::new(config))
    }

    /// Run the insert, shared movement and prefixed movement passes
    ///
    /// The overlap mode's list is the shared pass followed by the prefixed
    /// pass. Order matters since VSCodeVim takes the first matching binding.
    pub fn generate(&self) -> SettingsDocument {
        let config = &self.config;

        let insert = expand(&config.insert, &[&config.insert_mode], false, "");

        // Generic keys first; movement only contributes keys generic lacks
        let movement_only = config
            .movement
            .iter()
            .filter(|(before, _)| !config.generic.contains_key(*before))
            .map(|(before, after)| (before.clone(), after.clone()));
        let shared = merge(config.generic.clone(), movement_only);
        let mut all = expand(&shared, &config.movement_modes, true, "");

        let mut movement = expand(
            &config.movement,
            &[&config.overlap_mode],
            true,
            &config.window_prefix,
        );

        if let Some(prefixed) = movement.swap_remove(&config.overlap_mode) {
            all.entry(config.overlap_mode.clone())
                .or_default()
                .extend(prefixed);
        }

        let settings = merge(insert, all);
        for (mode, bindings) in &settings {
            tracing::debug!(mode = %mode, count = bindings.len(), "Generated bindings");
            for pair in bindings {
                tracing::trace!(mode = %mode, "{}", pair.display_string());
            }
        }
        settings
    }
}

/// Generate settings from the default tables
pub fn generate() -> SettingsDocument {
    Generator::default().generate()
}
