//! `deadline` — parse and render deadline expressions from the command line.
//!
//! The binary is a thin shell over `deadline-engine`: it reads the clock
//! once at startup (or takes a pinned `--now` anchor for reproducible
//! output) and hands everything else to the library's pure functions.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use deadline_engine::{
    format_deadline_display, format_deadline_verbose, parse_expression, predefined_expressions,
};

#[derive(Parser)]
#[command(
    name = "deadline",
    version,
    about = "Parse and render natural-language deadline expressions"
)]
struct Cli {
    /// Anchor instant to resolve against (RFC 3339); defaults to now.
    #[arg(long, global = true, value_name = "DATETIME")]
    now: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse an expression like "2 дня" into an absolute deadline.
    Parse {
        /// The expression to parse.
        expression: String,
    },
    /// Render a stored ISO deadline as the compact list label.
    Display {
        /// RFC 3339 datetime, e.g. 2026-01-15T12:00:00.000Z.
        iso: String,
    },
    /// Render a stored ISO deadline as the verbose preview.
    Verbose {
        /// RFC 3339 datetime, e.g. 2026-01-15T12:00:00.000Z.
        iso: String,
    },
    /// List the predefined quick-pick expressions.
    Presets,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // The single clock read in the whole workspace.
    let anchor = match &cli.now {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("invalid --now anchor: '{s}'"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    log::debug!("anchor instant: {anchor}");

    match cli.command {
        Command::Parse { expression } => {
            let parsed = parse_expression(&expression, anchor)
                .ok_or_else(|| anyhow!("unrecognized expression: '{expression}'"))?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Command::Display { iso } => {
            println!("{}", format_deadline_display(&iso, anchor)?);
        }
        Command::Verbose { iso } => {
            let date = DateTime::parse_from_rfc3339(&iso)
                .with_context(|| format!("invalid datetime: '{iso}'"))?
                .with_timezone(&Utc);
            println!("{}", format_deadline_verbose(date, anchor));
        }
        Command::Presets => {
            for preset in predefined_expressions() {
                println!("{}", preset.value);
            }
        }
    }

    Ok(())
}
