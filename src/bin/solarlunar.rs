//! Command-line front end: convert dates and list lunar months or solar terms.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;

use solarlunar::chinese::fmt::{self, Script};
use solarlunar::chinese::terms;
use solarlunar::{Calendar, Config};

#[derive(Debug, Parser)]
#[command(name = "solarlunar", version, about = "Gregorian / Chinese lunisolar date conversion")]
struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,
    /// TOML configuration file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Use traditional characters regardless of the configuration.
    #[arg(long, global = true)]
    traditional: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a Gregorian date into the lunar calendar.
    Solar { year: i32, month: u32, day: u32 },
    /// Convert a lunar date into the Gregorian calendar.
    Lunar {
        year: i32,
        month: u32,
        day: u32,
        /// The month is the leap month of that number.
        #[arg(long)]
        leap: bool,
    },
    /// List the months of a lunar year.
    Year { year: i32 },
    /// List the solar terms of a Gregorian year.
    Terms { year: i32 },
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::default(),
    };
    if cli.traditional {
        config.script = Script::Traditional;
    }
    log::debug!("using {config:?}");
    let calendar = Calendar::new(config);

    match cli.command {
        Command::Solar { year, month, day } => {
            let date = calendar.solar2lunar(year, month, day)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&date)?);
            } else {
                println!("{date}");
            }
        }
        Command::Lunar {
            year,
            month,
            day,
            leap,
        } => {
            let date = calendar.lunar2solar(year, month, day, leap)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&date)?);
            } else {
                println!("{date}");
            }
        }
        Command::Year { year } => {
            let lunar_year = calendar.year(year)?;
            let spans = lunar_year.months.windows(2).map(|pair| {
                let days = pair[1].date - pair[0].date;
                (pair[0].month.name(config.script), pair[0].date, days)
            });
            if cli.json {
                let months: Vec<_> = spans
                    .map(|(name, start, days)| {
                        json!({ "month": name, "start": start.to_string(), "days": days })
                    })
                    .collect();
                let doc = json!({
                    "year": year,
                    "gzYear": fmt::sexagenary(solarlunar::chinese::sexagenary_for_year(year)),
                    "animal": fmt::animal(year, config.script),
                    "months": months,
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                for (name, start, days) in spans {
                    println!("{name}\t{start}\t{days}");
                }
            }
        }
        Command::Terms { year } => {
            let dates = terms::dates_for_year(year, config.utc_offset_minutes)
                .with_context(|| format!("no solar terms for year {year}"))?;
            let named = (1..).zip(dates).map(|(n, date)| (fmt::solar_term(n, config.script), date));
            if cli.json {
                let doc: Vec<_> = named
                    .map(|(name, date)| json!({ "term": name, "date": date.to_string() }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                for (name, date) in named {
                    println!("{name}\t{date}");
                }
            }
        }
    }
    Ok(())
}
