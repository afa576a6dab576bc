//! `cigar` CLI — expand, compress, and inspect CIGAR strings from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Expand a CIGAR given as an argument
//! cigar expand 1M1D6M1I4M
//!
//! # Compress edit strings, one per line, from a file to a file
//! cigar compress -i edits.txt -o cigars.txt
//!
//! # Show parsed runs as JSON, accepting malformed input the lenient way
//! echo '1MM2D9' | cigar tokenize --lenient --json
//!
//! # Split an edit string into blocks
//! cigar blocks MDMMMMMMIMMMM
//!
//! # Show size statistics for a file of CIGARs
//! cigar stats -i cigars.txt
//! ```

use anyhow::{Context, Result};
use cigar_core::{Policy, Run};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "cigar",
    version,
    about = "CIGAR string <-> edit string converter"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where to read input from and write output to.
///
/// `VALUE` wins over `--input`; with neither, stdin is read. Input is handled
/// line by line.
#[derive(Args)]
struct IoArgs {
    /// Value to convert (reads --input or stdin if omitted)
    value: Option<String>,
    /// Input file, one value per line
    #[arg(short, long, conflicts_with = "value")]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand CIGAR strings into edit strings
    Expand {
        #[command(flatten)]
        io: IoArgs,
        /// Drop unparseable segments instead of failing
        #[arg(long)]
        lenient: bool,
        /// Print the parsed runs to stderr
        #[arg(short, long)]
        verbose: bool,
    },
    /// Compress edit strings into CIGAR strings
    Compress {
        #[command(flatten)]
        io: IoArgs,
        /// Emit the runs as a JSON array instead of a CIGAR string
        #[arg(long)]
        json: bool,
    },
    /// Show the (count, op) runs of CIGAR strings
    Tokenize {
        #[command(flatten)]
        io: IoArgs,
        /// Drop unparseable segments instead of failing
        #[arg(long)]
        lenient: bool,
        /// Emit the runs as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Split edit strings into maximal same-character blocks
    Blocks {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Show size statistics for CIGAR strings (runs, lengths, reduction)
    Stats {
        #[command(flatten)]
        io: IoArgs,
        /// Drop unparseable segments instead of failing
        #[arg(long)]
        lenient: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Expand {
            io,
            lenient,
            verbose,
        } => {
            let policy = policy_for(lenient);
            let mut out = Vec::new();
            for (n, line) in read_lines(&io)?.iter().enumerate() {
                if verbose {
                    eprintln!("{}", format_runs(&parse_line(line, n, policy)?));
                }
                let edits = cigar_core::expand_with(line, policy)
                    .with_context(|| format!("Failed to expand CIGAR on line {}", n + 1))?;
                out.push(edits);
            }
            write_output(io.output.as_deref(), &out)?;
        }
        Commands::Compress { io, json } => {
            let mut out = Vec::new();
            for line in read_lines(&io)? {
                let encoded = if json {
                    serde_json::to_string(&cigar_core::compress_to_runs(&line))?
                } else {
                    cigar_core::compress(&line)
                };
                out.push(encoded);
            }
            write_output(io.output.as_deref(), &out)?;
        }
        Commands::Tokenize { io, lenient, json } => {
            let policy = policy_for(lenient);
            let mut out = Vec::new();
            for (n, line) in read_lines(&io)?.iter().enumerate() {
                let runs = parse_line(line, n, policy)?;
                let rendered = if json {
                    serde_json::to_string(&runs)?
                } else {
                    format_runs(&runs)
                };
                out.push(rendered);
            }
            write_output(io.output.as_deref(), &out)?;
        }
        Commands::Blocks { io } => {
            let out: Vec<String> = read_lines(&io)?
                .iter()
                .map(|line| cigar_core::split_blocks(line).join(" "))
                .collect();
            write_output(io.output.as_deref(), &out)?;
        }
        Commands::Stats { io, lenient } => {
            let policy = policy_for(lenient);
            let lines = read_lines(&io)?;
            let mut runs_total = 0usize;
            let mut cigar_bytes = 0usize;
            let mut edit_len = 0usize;
            for (n, line) in lines.iter().enumerate() {
                let runs = parse_line(line, n, policy)?;
                runs_total += runs.len();
                cigar_bytes += line.len();
                edit_len = runs.iter().fold(edit_len, |acc, r| acc.saturating_add(r.len()));
            }
            let ratio = if edit_len > 0 {
                (1.0 - (cigar_bytes as f64 / edit_len as f64)) * 100.0
            } else {
                0.0
            };
            let report = vec![
                format!("CIGARs:       {}", lines.len()),
                format!("Runs:         {}", runs_total),
                format!("CIGAR size:   {} bytes", cigar_bytes),
                format!("Edit length:  {} ops", edit_len),
                format!("Reduction:    {:.1}%", ratio),
            ];
            write_output(io.output.as_deref(), &report)?;
        }
    }

    Ok(())
}

fn policy_for(lenient: bool) -> Policy {
    if lenient {
        Policy::Lenient
    } else {
        Policy::Strict
    }
}

/// Tokenize one input line, attaching its 1-based line number to any error.
fn parse_line(line: &str, index: usize, policy: Policy) -> Result<Vec<Run>> {
    cigar_core::tokenize_with(line, policy)
        .with_context(|| format!("Failed to parse CIGAR on line {}", index + 1))
}

/// Render runs as `(count,op)` pairs separated by spaces.
fn format_runs(runs: &[Run]) -> String {
    runs.iter()
        .map(|r| format!("({},{})", r.count, r.op))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collect the input values: the positional value as a single line, or the
/// lines of the input file / stdin with any trailing `\r` removed.
fn read_lines(io_args: &IoArgs) -> Result<Vec<String>> {
    if let Some(value) = &io_args.value {
        return Ok(vec![value.clone()]);
    }
    let content = match io_args.input.as_deref() {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    Ok(content
        .lines()
        .map(|l| l.trim_end_matches('\r').to_string())
        .collect())
}

fn write_output(path: Option<&str>, lines: &[String]) -> Result<()> {
    let mut content = lines.join("\n");
    if !lines.is_empty() {
        content.push('\n');
    }
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
