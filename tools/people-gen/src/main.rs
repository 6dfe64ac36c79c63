//! CLI tool that writes a synthetic people file.
//!
//! # Usage
//!
//! ```bash
//! # One million rows with the default seed
//! people-gen people.csv 1000000
//!
//! # Fixed range and seed, no header, to stdout
//! people-gen - 100 --seed 7 --start-date 1990-01-01 --end-date 1999-12-31 --no-header
//! ```

use std::{
    fs::File,
    io::{Write, stdout},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use jiff::civil::Date;
use people_gen::generator::{PersonGenerator, write_people};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate a file of random `FirstName,LastName,DateOfBirth` rows.
#[derive(Parser, Debug)]
#[command(name = "people-gen")]
#[command(version, about)]
struct Args {
    /// Output file path, or `-` for stdout.
    output: PathBuf,

    /// Number of rows to generate.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    count: u64,

    /// Seed for the random number generator.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Earliest birth date.
    #[arg(long, default_value = "1900-01-01")]
    start_date: Date,

    /// Latest birth date. Defaults to today.
    #[arg(long)]
    end_date: Option<Date>,

    /// Do not write the header line.
    #[arg(long)]
    no_header: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let end_date = args.end_date.unwrap_or_else(|| jiff::Zoned::now().date());
    let mut generator = PersonGenerator::new(args.seed, args.start_date, end_date)
        .context("Invalid date range")?;

    let to_stdout = args.output == Path::new("-");
    let output: Box<dyn Write> = if to_stdout {
        Box::new(stdout().lock())
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("Failed to create output file: {}", args.output.display()))?;
        Box::new(file)
    };

    info!(seed = args.seed, start = %args.start_date, end = %end_date, "generating rows");
    let written = write_people(output, &mut generator, args.count, !args.no_header)
        .context("Failed to write rows")?;

    let target = if to_stdout { "stdout".to_string() } else { args.output.display().to_string() };
    eprintln!("Generated {written} rows to {target}");

    Ok(())
}
