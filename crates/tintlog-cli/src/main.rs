//! tintlog CLI
//!
//! Thin wrapper around tintlog-core for trying the logger from a shell.
//!
//! ## Usage
//!
//! ```bash
//! # Print a line through the console façade
//! tintlog emit warn "disk almost full" '{"free_mb": 12}'
//!
//! # Record entries for an identifier and print its history
//! tintlog record --id job-1 --entry info=started --entry error=failed
//!
//! # Same, as JSON
//! tintlog record --id job-1 --entry 'log={"step": 2}' --json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tintlog_core::{console, InstanceLogger, LogHistory, LogLevel, Value};

/// tintlog - colorized leveled logging
#[derive(Parser)]
#[command(name = "tintlog")]
#[command(version)]
#[command(about = "tintlog - colorized leveled logging")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// When to color the level tag
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    color: ColorChoice,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one line through the console façade
    Emit {
        /// Level: debug, log, info, warn or error
        level: LogLevel,
        /// Values to print (parsed as JSON when possible, otherwise text)
        values: Vec<String>,
    },

    /// Record entries for an identifier and print the resulting history
    Record {
        /// Identifier of the history
        #[arg(long)]
        id: String,
        /// Entry as `<level>=<value>` (repeatable)
        #[arg(short, long = "entry")]
        entries: Vec<String>,
        /// Print the history as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn apply_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Auto => colored::control::unset_override(),
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
    }
}

/// Parse a CLI value: JSON if it parses, otherwise plain text
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parse an `--entry` argument of the form `<level>=<value>`
fn parse_entry(raw: &str) -> Result<(LogLevel, Value)> {
    let (level, value) = raw
        .split_once('=')
        .with_context(|| format!("Invalid entry '{}': expected <level>=<value>", raw))?;
    let level = level
        .parse::<LogLevel>()
        .with_context(|| format!("Invalid entry '{}'", raw))?;
    Ok((level, parse_value(value)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    apply_color(cli.color);

    match cli.command {
        Commands::Emit { level, values } => {
            let args: Vec<Value> = values.iter().map(|v| parse_value(v)).collect();
            tracing::debug!(%level, count = args.len(), "Emitting console line");

            match level {
                LogLevel::Debug => console::debug(&args),
                LogLevel::Log => console::log(&args),
                LogLevel::Info => console::info(&args),
                LogLevel::Warn => console::warn(&args),
                LogLevel::Error => console::error(&args),
            }
        }

        Commands::Record { id, entries, json } => {
            let parsed = entries
                .iter()
                .map(|raw| parse_entry(raw))
                .collect::<Result<Vec<_>>>()?;

            let logger = InstanceLogger::with_history(id, LogHistory::new());
            for (level, value) in parsed {
                logger.record(level, &[value]);
            }
            tracing::info!(id = logger.id(), "Recorded {} entries", entries.len());

            match logger.get() {
                Some(history) if json => {
                    println!("{}", serde_json::to_string_pretty(&history)?);
                }
                Some(history) => {
                    for entry in history {
                        println!(
                            "[{}] {}: {}",
                            entry.timestamp(),
                            entry.level(),
                            entry.message()
                        );
                    }
                }
                None => println!("no history for '{}'", logger.id()),
            }
        }
    }

    Ok(())
}
