//! Command-line argument parsing
//!
//! With no arguments the tool reads `template.json` and writes
//! `settings.json` in the current directory.

use clap::Parser;
use std::path::PathBuf;

use crate::settings::{RunOptions, SETTINGS_JSON, TEMPLATE_JSON};

/// Generate VSCodeVim key remapping settings from a template
#[derive(Parser, Debug)]
#[command(name = "vimremap", version, about = "Generate VSCodeVim key remapping settings")]
pub struct CliArgs {
    /// Template settings document to read
    #[arg(short, long, visible_alias = "source", value_name = "FILE", default_value = TEMPLATE_JSON)]
    pub template: PathBuf,

    /// Settings document to write (overwritten)
    #[arg(short, long, value_name = "FILE", default_value = SETTINGS_JSON)]
    pub output: PathBuf,

    /// YAML file overriding the built-in mapping tables
    #[arg(long, value_name = "FILE")]
    pub tables: Option<PathBuf>,

    /// Print the merged settings to stdout instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into run options
    pub fn into_options(self) -> (RunOptions, Option<PathBuf>) {
        let options = RunOptions {
            template: self.template,
            output: self.output,
            dry_run: self.dry_run,
        };
        (options, self.tables)
    }
}
