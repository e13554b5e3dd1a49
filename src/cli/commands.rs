use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::models::timestamp::format_timestamp;
use crate::parsers::{ParseOutcome, parse_clippings_file};
use crate::utils::{format_path_with_tilde, resolve_input_path, resolve_output_path};
use crate::writers::{OutputFormat, write_clippings};

#[derive(Parser)]
#[command(name = "kindle-clippings")]
#[command(version = "0.1.0")]
#[command(about = "CLI for reading data from Kindle MyClippings.txt file.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert Clippings file to one of supported formats.
    Convert {
        /// Output format
        #[arg(short = 'f', long = "format", value_enum)]
        format: OutputFormat,

        /// Clippings file [default: ./My Clippings.txt]
        #[arg(short = 'i', long = "input_path")]
        input_path: Option<PathBuf>,

        /// Output file [default: ./Clippings.json or ./Clippings.xlsx]
        #[arg(short = 'o', long = "output_path")]
        output_path: Option<PathBuf>,
    },
    /// Show statistics about a Clippings file
    Stats {
        /// Clippings file [default: ./My Clippings.txt]
        #[arg(short = 'i', long = "input_path")]
        input_path: Option<PathBuf>,
    },
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert { format, input_path, output_path }) => {
            let input_path = resolve_input_path(input_path)?;
            let output_path = resolve_output_path(output_path, format)?;
            convert(format, &input_path, &output_path)
        }
        Some(Commands::Stats { input_path }) => {
            show_stats(&resolve_input_path(input_path)?)?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("Use --help for usage information");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_clippings(input_path: &Path) -> Result<ParseOutcome> {
    let outcome = parse_clippings_file(input_path)
        .with_context(|| format!("Failed to parse clippings from {}", input_path.display()))?;

    if outcome.is_truncated() {
        eprintln!(
            "Warning: input ended mid-record, {} trailing line(s) ignored",
            outcome.trailing_lines
        );
    }
    let invalid = outcome.invalid_count();
    if invalid > 0 {
        eprintln!(
            "Warning: {} of {} clippings have missing fields",
            invalid,
            outcome.clippings.len()
        );
    }

    Ok(outcome)
}

fn convert(format: OutputFormat, input_path: &Path, output_path: &Path) -> Result<ExitCode> {
    println!("Output file generation started");
    println!("* Format [{}]", format);
    println!("* Input path [{}]", input_path.display());
    println!("* Output path [{}]", output_path.display());

    let outcome = load_clippings(input_path)?;

    match write_clippings(format, &outcome.clippings, output_path) {
        Ok(()) => {
            println!("Output file generation finished successfully.");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!(
                "Output file in [{}] format generation finished with error [{}].",
                format, e
            );
            Ok(ExitCode::FAILURE)
        }
    }
}

fn show_stats(input_path: &Path) -> Result<()> {
    let outcome = load_clippings(input_path)?;
    let clippings = &outcome.clippings;

    let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
    for clipping in clippings {
        *by_type.entry(clipping.clipping_type.as_deref().unwrap_or("Unknown")).or_default() += 1;
    }
    let books: HashSet<_> = clippings.iter().filter_map(|c| c.book.as_ref()).collect();

    println!("Kindle Clippings Statistics");
    println!("===========================");
    println!("Total clippings: {}", clippings.len());
    for (clipping_type, count) in &by_type {
        println!("  {}: {}", clipping_type, count);
    }
    println!("Books: {}", books.len());
    println!("Clippings with missing fields: {}", outcome.invalid_count());
    println!();
    println!("Clippings file: {}", format_path_with_tilde(input_path));

    let timestamps = clippings.iter().filter_map(|c| c.created_at.as_ref());
    if let Some(oldest) = timestamps.clone().min() {
        println!("Oldest clipping: {}", format_timestamp(oldest));
    }
    if let Some(newest) = timestamps.max() {
        println!("Newest clipping: {}", format_timestamp(newest));
    }

    Ok(())
}
