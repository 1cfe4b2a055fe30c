mod cli;
mod config;
mod logging;

use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use temporal_distance::{current_time, measure, parse_timestamp, parse_timezone};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let tz = parse_timezone(&cli.timezone)?;
    let options = config::resolve_options(cli)?;

    let from = parse_timestamp(&cli.from, &tz).context("invalid FROM date")?;
    let to = match &cli.to {
        Some(s) => parse_timestamp(s, &tz).context("invalid TO date")?,
        None => current_time().with_timezone(&tz),
    };

    // The calculator does not check ordering; reject reversed input here.
    if from > to {
        bail!(
            "FROM ({}) must not be after TO ({})",
            from.to_rfc3339(),
            to.to_rfc3339()
        );
    }

    tracing::info!(from = %from.to_rfc3339(), to = %to.to_rfc3339(), "measuring distance");
    let distance = measure(&from, &to, &options);

    match cli.unit {
        Some(unit) => println!("{}", distance.get(unit)),
        None => println!("{}", serde_json::to_string_pretty(&distance)?),
    }
    Ok(())
}
