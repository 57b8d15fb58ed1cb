//! Describe an extended holder built from CLI arguments

use eyre::{Context, Result};
use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::powers::{Describe, ExtendedTraitHolder};

pub fn run(traits: Vec<String>, format: OutputFormat) -> Result<()> {
    let holder = ExtendedTraitHolder::new(traits);
    log::info!("Describing holder with {} traits as {:?}", holder.traits().len(), format);

    match format {
        OutputFormat::Text => holder.print(),
        _ => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write!(lock, "{}", render(&holder, format)?).context("Failed to write output")?;
        }
    }
    Ok(())
}

/// Render a holder in the requested format, newline-terminated
pub fn render(holder: &ExtendedTraitHolder, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Text => format!("{}\n", holder.describe()),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(holder)?),
        // serde_yaml already ends with a newline
        OutputFormat::Yaml => serde_yaml::to_string(holder)?,
    };
    Ok(out)
}
