//! `dogdays` CLI — query a work regimen's hours from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Working hours on a given date (default regimen: Mon-Fri, 09:00-17:00)
//! dogdays hours --date 2015-01-05
//!
//! # Same, with holidays and shifts from a config file, as JSON
//! dogdays --config regimen.json hours --date 2015-01-05 --json
//!
//! # Total hours over a span of days
//! dogdays between --begin 2015-01-01T00:00:00 --end 2015-01-31T23:59:59
//!
//! # Is this date worked at all?
//! dogdays is-working-day --date 2015-01-01
//!
//! # Log each dated segment to stderr
//! RUST_LOG=dogdays=trace dogdays --log hours --date 2015-01-05
//! ```

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use dogdays::{Calendar, Regimen, RegimenConfig, WorkRegimen};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dogdays", version, about = "Working hours for a work regimen")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Regimen config file (JSON); the default Mon-Fri 09:00-17:00 regimen if omitted
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log to stderr (filter from RUST_LOG)
    #[arg(long, global = true)]
    log: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the working hours that start on a date
    Hours {
        /// Date as YYYY-MM-DD
        #[arg(short, long)]
        date: NaiveDate,
        /// Print the ranges as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the total working hours over every date in a span
    Between {
        /// Span start as YYYY-MM-DDTHH:MM:SS
        #[arg(short, long)]
        begin: NaiveDateTime,
        /// Span end as YYYY-MM-DDTHH:MM:SS
        #[arg(short, long)]
        end: NaiveDateTime,
    },
    /// Print whether a date is a working day
    IsWorkingDay {
        /// Date as YYYY-MM-DD
        #[arg(short, long)]
        date: NaiveDate,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log {
        init_logging();
    }

    let regimen = load_regimen(cli.config.as_deref())?;

    match cli.command {
        Commands::Hours { date, json } => {
            let hours = regimen
                .work_hours_for(date)
                .with_context(|| format!("Failed to build working hours for {}", date))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&hours)?);
            } else {
                for range in &hours {
                    println!("{}", range);
                }
                println!("Total: {:.2} hours", hours.total_hours());
            }
        }
        Commands::Between { begin, end } => {
            let calendar = Calendar::new(regimen);
            let total = calendar
                .work_hours_between(begin, end)
                .context("Failed to sum working hours")?;
            println!("Total: {:.2} hours", total);
        }
        Commands::IsWorkingDay { date } => {
            println!("{}", regimen.is_working_day(date));
        }
    }

    Ok(())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dogdays=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

fn load_regimen(path: Option<&str>) -> Result<WorkRegimen> {
    let config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            RegimenConfig::from_json(&json)
                .with_context(|| format!("Failed to parse config file: {}", path))?
        }
        None => RegimenConfig::default(),
    };
    info!(
        holidays = config.holidays.len(),
        segments = config.work_hours.len(),
        "loaded regimen"
    );
    Ok(config.into_regimen())
}
