mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use chrono_tz::Tz;
use clap::Parser;
use duck_date::{set_first_weekday, set_time_zone, DateError};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let tz: Tz = cli
        .tz
        .parse()
        .map_err(|_| DateError::InvalidTimezone(format!("'{}'", cli.tz)))?;
    set_time_zone(tz);
    set_first_weekday(cli.first_weekday);

    let report = commands::run(&cli.command)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.json)?);
    } else {
        println!("{}", report.text);
    }
    Ok(())
}
