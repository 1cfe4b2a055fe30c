use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use temporal_distance::DistanceOptions;

use crate::cli::Cli;

/// Resolve distance options: defaults, then the config file, then flags.
pub fn resolve_options(cli: &Cli) -> Result<DistanceOptions> {
    let mut options = match &cli.config {
        Some(path) => load(path)?,
        None => DistanceOptions::default(),
    };

    if let Some(overflow) = cli.month_overflow {
        options.month_overflow = overflow;
    }
    if let Some(boundary) = cli.month_boundary {
        options.month_boundary = boundary;
    }

    tracing::debug!(?options, "resolved distance options");
    Ok(options)
}

fn load(path: &Path) -> Result<DistanceOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid config file {}", path.display()))
}
