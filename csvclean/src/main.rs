//! # csvclean
//!
//! A CLI tool for one-shot cleaning of delimited data files.
//!
//! ## Overview
//!
//! csvclean is built on top of csvcleanlib and runs a delimited file through
//! a linear pipeline: read, drop exact-duplicate data rows (the header is
//! always kept), fill empty cells with a sentinel, and write the result to a
//! new file. It prints before/after table dumps and a short report of what
//! changed.
//!
//! ## Usage
//!
//! ```bash
//! # Clean data.csv into cleaned_data.csv (the defaults)
//! csvclean
//!
//! # Explicit paths
//! csvclean survey.csv -o survey_clean.csv
//!
//! # Semicolon-delimited input, custom sentinel
//! csvclean -d ";" --sentinel "N/A"
//!
//! # Keep duplicates, only fill missing cells
//! csvclean --no-dedupe
//!
//! # Machine-readable run summary
//! csvclean --json
//!
//! # Inspect a file without writing anything
//! csvclean stats survey.csv
//! ```

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use csvcleanlib::{
    clean_table, read_table, write_table, CleanError, CleanOptions, CleanReport, TableSummary,
    DEFAULT_SENTINEL,
};
use serde::Serialize;

mod render;

/// JSON document emitted by `csvclean --json`
#[derive(Debug, Serialize)]
struct CleanOutput {
    input: String,
    output: String,
    before: TableSummary,
    after: TableSummary,
    report: CleanReport,
}

/// JSON document emitted by `csvclean stats --json`
#[derive(Debug, Serialize)]
struct StatsOutput {
    input: String,
    summary: TableSummary,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("csvclean")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Delimited-file cleaner: drops duplicate rows and fills missing cells")
        .arg(
            Arg::new("input")
                .help("Input file to clean")
                .default_value("data.csv"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .default_value("cleaned_data.csv")
                .help("Where to write the cleaned file"),
        )
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .default_value(",")
                .help("Field delimiter (single character, \\t for tab)"),
        )
        .arg(
            Arg::new("sentinel")
                .long("sentinel")
                .default_value(DEFAULT_SENTINEL)
                .help("Replacement value for empty cells"),
        )
        .arg(
            Arg::new("no-dedupe")
                .long("no-dedupe")
                .action(ArgAction::SetTrue)
                .help("Keep duplicate rows"),
        )
        .arg(
            Arg::new("no-fill")
                .long("no-fill")
                .action(ArgAction::SetTrue)
                .help("Keep empty cells as-is"),
        )
        .arg(
            Arg::new("preview")
                .short('n')
                .long("preview")
                .value_parser(clap::value_parser!(usize))
                .default_value("0")
                .help("Show at most N data rows per table dump (0 = all)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Emit a JSON run summary instead of tables"),
        )
        .subcommand(
            Command::new("stats")
                .about("Show table statistics and a preview without writing anything")
                .arg(
                    Arg::new("input")
                        .help("Input file to inspect")
                        .default_value("data.csv"),
                )
                .arg(
                    Arg::new("delimiter")
                        .short('d')
                        .long("delimiter")
                        .default_value(",")
                        .help("Field delimiter (single character, \\t for tab)"),
                )
                .arg(
                    Arg::new("preview")
                        .short('n')
                        .long("preview")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("10")
                        .help("Show at most N data rows (0 = all)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the summary as JSON"),
                ),
        )
}

/// Parse the delimiter argument into a single byte
fn parse_delimiter(raw: &str) -> Result<u8, anyhow::Error> {
    if raw == "\\t" || raw == "\t" {
        return Ok(b'\t');
    }
    let bytes = raw.as_bytes();
    if bytes.len() == 1 {
        Ok(bytes[0])
    } else {
        Err(anyhow::anyhow!(
            "delimiter must be a single character, got '{raw}'"
        ))
    }
}

/// Build clean options from matches
fn build_options(matches: &ArgMatches) -> Result<CleanOptions, anyhow::Error> {
    let delimiter = matches
        .get_one::<String>("delimiter")
        .map(|s| s.as_str())
        .unwrap_or(",");
    let sentinel = matches
        .get_one::<String>("sentinel")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_SENTINEL);

    Ok(CleanOptions::new()
        .delimiter(parse_delimiter(delimiter)?)
        .sentinel(sentinel)
        .with_dedupe(!matches.get_flag("no-dedupe"))
        .with_fill(!matches.get_flag("no-fill")))
}

/// Handler for the clean pipeline (the default command)
fn clean_handler(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let input = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or("data.csv");
    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("cleaned_data.csv");
    let options = build_options(matches)?;
    let preview = matches.get_one::<usize>("preview").copied().unwrap_or(0);
    let json = matches.get_flag("json");

    let table = read_table(input, &options)?;
    let before = TableSummary::of(&table);

    if !json {
        println!("{}", render::section("Original Data"));
        print!("{}", render::render_table(&table, preview));
        println!();
    }

    let (cleaned, report) = clean_table(table, &options)?;
    let after = TableSummary::of(&cleaned);
    write_table(&cleaned, output, &options)?;

    if json {
        let doc = CleanOutput {
            input: input.to_string(),
            output: output.to_string(),
            before,
            after,
            report,
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{}", render::section("Cleaned Data"));
        print!("{}", render::render_table(&cleaned, preview));
        println!();
        print!("{}", render::render_report(&report));
        println!("Cleaned data saved to {output}");
    }

    Ok(())
}

/// Handler for the stats subcommand
fn stats_handler(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let input = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or("data.csv");
    let delimiter = matches
        .get_one::<String>("delimiter")
        .map(|s| s.as_str())
        .unwrap_or(",");
    let options = CleanOptions::new().delimiter(parse_delimiter(delimiter)?);
    let preview = matches.get_one::<usize>("preview").copied().unwrap_or(10);
    let json = matches.get_flag("json");

    let table = read_table(input, &options)?;
    let summary = TableSummary::of(&table);

    if json {
        let doc = StatsOutput {
            input: input.to_string(),
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print!("{}", render::render_summary(&summary));
        println!();
        print!("{}", render::render_table(&table, preview));
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let result = match matches.subcommand() {
        Some(("stats", sub)) => stats_handler(sub),
        _ => clean_handler(&matches),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<CleanError>() {
            // The one anticipated failure: report it and end the run
            // normally, leaving no output file behind.
            Some(CleanError::FileNotFound { path }) => {
                eprintln!(
                    "Error: make sure a file named '{}' exists in the current directory.",
                    path.display()
                );
                ExitCode::SUCCESS
            }
            _ => {
                eprintln!("Error: {err}");
                ExitCode::FAILURE
            }
        },
    }
}
