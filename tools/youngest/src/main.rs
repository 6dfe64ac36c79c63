//! CLI tool that reports the youngest people in a large file.
//!
//! # Usage
//!
//! ```bash
//! # Ten youngest (default)
//! youngest people.csv
//!
//! # Twenty youngest as JSON, read from stdin
//! cat people.csv | youngest - 20 --format json
//!
//! # See every rejected line
//! RUST_LOG=people=debug youngest people.csv
//! ```

use std::{
    fs::File,
    io::{Read, Write, stdin, stdout},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use people::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_COUNT: i64 = 10;

/// Find the youngest people in a `FirstName,LastName,DateOfBirth` file.
///
/// The file is streamed once; memory use depends on COUNT, not on the file
/// size. Malformed lines are skipped and counted.
#[derive(Parser, Debug)]
#[command(name = "youngest")]
#[command(version, about)]
struct Args {
    /// Input file path, or `-` for stdin.
    path: PathBuf,

    /// How many people to report (default 10). Zero or a negative number
    /// reports nobody; a value that is not a number falls back to the default.
    #[arg(allow_negative_numbers = true)]
    count: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log a warning every N invalid lines (0 disables).
    #[arg(long, default_value_t = 1024)]
    report_every: usize,

    /// Treat the first line as data even if it looks like a header.
    #[arg(long)]
    no_header_detection: bool,
}

/// How the selected people are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Numbered list with a summary line.
    Text,
    /// Canonical `First,Last,YYYY-MM-DD` rows with a header.
    Csv,
    /// JSON array of objects.
    Json,
}

/// Outcome of one pass over the input.
struct Report {
    top: Vec<Person>,
    stats: ReadStats,
    elapsed: Duration,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
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

    let input: Box<dyn Read> = if args.path == Path::new("-") {
        Box::new(stdin().lock())
    } else {
        let file = File::open(&args.path)
            .with_context(|| format!("Failed to open input file: {}", args.path.display()))?;
        Box::new(file)
    };

    let count = args.count.as_deref().map_or(DEFAULT_COUNT, parse_count);
    let take = take_from_count(count);
    info!(path = %args.path.display(), take, "searching for the youngest people");

    let banner = format!(
        "Processing {} to find the {count} youngest people...",
        args.path.display()
    );
    if args.format == OutputFormat::Text {
        println!("{banner}\n");
    } else {
        eprintln!("{banner}");
    }

    let report = find_youngest(input, take, args.report_every, !args.no_header_detection)
        .with_context(|| format!("Failed to process '{}'", args.path.display()))?;

    info!(
        lines = report.stats.lines_read,
        valid = report.stats.records_parsed,
        invalid = report.stats.invalid_lines,
        elapsed_ms = u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
        "done"
    );

    let mut out = stdout().lock();
    write_report(&mut out, args.format, &report).context("Failed to write report")?;
    out.flush().context("Failed to flush output")?;

    if args.format != OutputFormat::Text {
        eprintln!("{}", summary(&report));
    }

    Ok(())
}

/// Parses the COUNT argument, falling back to the default when it is not an
/// integer.
fn parse_count(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or_else(|_| {
        warn!(count = raw, default = DEFAULT_COUNT, "invalid count, using default");
        DEFAULT_COUNT
    })
}

/// Maps the signed CLI count onto the selector's `take`.
fn take_from_count(count: i64) -> usize {
    if count <= 0 { 0 } else { usize::try_from(count).unwrap_or(usize::MAX) }
}

/// Streams `input` through the reader into the selector.
fn find_youngest<R: Read>(
    input: R,
    take: usize,
    report_every: usize,
    detect_header: bool,
) -> Result<Report> {
    let started = Instant::now();

    let mut invalid = 0usize;
    let mut reader = PersonReader::with_sink(input, |line: &str| {
        invalid += 1;
        if report_every > 0 && invalid % report_every == 0 {
            warn!(invalid, last = line, "invalid lines encountered");
        }
    })
    .detect_header(detect_header);

    let top = try_youngest(&mut reader, take).context("Failed to read input")?;

    Ok(Report { top, stats: reader.stats(), elapsed: started.elapsed() })
}

fn write_report<W: Write>(out: &mut W, format: OutputFormat, report: &Report) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Top {} youngest people (youngest first):", report.top.len())?;
            writeln!(out)?;
            for (i, person) in report.top.iter().enumerate() {
                writeln!(out, "{}. {person}", i + 1)?;
            }
            writeln!(out)?;
            writeln!(out, "{}", summary(report))?;
        }
        OutputFormat::Csv => {
            let mut writer = PersonWriter::new(out);
            writer.write_header()?;
            writer.write_all(&report.top)?;
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report.top)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn summary(report: &Report) -> String {
    format!(
        "Processed in {:.2}s. Invalid lines: {}",
        report.elapsed.as_secs_f64(),
        report.stats.invalid_lines
    )
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use jiff::civil::date;

    use super::*;

    const SAMPLE: &str = "FirstName,LastName,DateOfBirth\n\
                          A,Alpha,1980-01-01\n\
                          B,Bravo,2000-01-01\n\
                          Alice,Smith\n\
                          C,Charlie,1990-01-01\n\
                          D,Delta,2010-01-01\n\
                          Bob,Jones,not-a-date\n\
                          E,Echo,1995-01-01\n";

    fn report_for(input: &str, take: usize) -> Report {
        find_youngest(Cursor::new(input.to_string()), take, 1024, true).unwrap()
    }

    fn render(format: OutputFormat, report: &Report) -> String {
        let mut out = Vec::new();
        write_report(&mut out, format, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn count_argument_falls_back_to_default() {
        assert_eq!(parse_count("25"), 25);
        assert_eq!(parse_count(" -4 "), -4);
        assert_eq!(parse_count("twenty"), DEFAULT_COUNT);
        assert_eq!(parse_count(""), DEFAULT_COUNT);
    }

    #[test]
    fn negative_and_zero_counts_select_nobody() {
        assert_eq!(take_from_count(-5), 0);
        assert_eq!(take_from_count(0), 0);
        assert_eq!(take_from_count(3), 3);
    }

    #[test]
    fn finds_youngest_and_counts_invalid_lines() {
        let report = report_for(SAMPLE, 2);
        let names: Vec<_> = report.top.iter().map(Person::first_name).collect();
        assert_eq!(names, vec!["D", "B"]);
        assert_eq!(report.stats.invalid_lines, 2);
        assert_eq!(report.stats.records_parsed, 5);
        assert!(report.stats.header_skipped);
    }

    #[test]
    fn text_report_lists_people_in_order() {
        let text = render(OutputFormat::Text, &report_for(SAMPLE, 2));
        assert!(text.starts_with("Top 2 youngest people (youngest first):\n\n"));
        assert!(text.contains("1. D Delta (2010-01-01)\n2. B Bravo (2000-01-01)\n"));
        assert!(text.contains("Invalid lines: 2"));
    }

    #[test]
    fn csv_report_is_canonical() {
        let csv = render(OutputFormat::Csv, &report_for(SAMPLE, 3));
        assert_eq!(
            csv,
            "FirstName,LastName,DateOfBirth\n\
             D,Delta,2010-01-01\n\
             B,Bravo,2000-01-01\n\
             E,Echo,1995-01-01\n"
        );
    }

    #[test]
    fn json_report_round_trips() {
        let report = report_for(SAMPLE, 1);
        let json = render(OutputFormat::Json, &report);
        let parsed: Vec<Person> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![Person::new("D", "Delta", date(2010, 1, 1)).unwrap()]);
    }

    #[test]
    fn take_zero_reports_empty_list() {
        let report = report_for(SAMPLE, 0);
        assert!(report.top.is_empty());
        assert!(render(OutputFormat::Text, &report).starts_with("Top 0 youngest people"));
    }

    #[test]
    fn header_detection_can_be_turned_off() {
        let report =
            find_youngest(Cursor::new("FirstName,LastName,DateOfBirth\n"), 5, 0, false).unwrap();
        assert!(report.top.is_empty());
        assert_eq!(report.stats.invalid_lines, 1);
    }
}
