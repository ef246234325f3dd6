use anyhow::{Context, Result};
use clap::Parser;

use vimremap::cli::CliArgs;
use vimremap::Generator;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    vimremap::tracing::init();

    let (options, tables) = args.into_options();
    let generator = Generator::from_tables(tables.as_deref()).with_context(|| match &tables {
        Some(path) => format!("loading tables from {}", path.display()),
        None => "loading built-in tables".to_string(),
    })?;

    vimremap::run(&generator, &options).with_context(|| {
        format!(
            "generating {} from {}",
            options.output.display(),
            options.template.display()
        )
    })?;

    Ok(())
}
