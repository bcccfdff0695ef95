//! jec CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use jec_core::Event;

mod summary;

#[derive(Parser)]
#[command(name = "jec")]
#[command(about = "jec - inspect and pack jet/MET record streams")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a record stream to JSON
    Dump {
        /// Input record stream
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Event and jet counts for a record stream
    Summary {
        /// Input record stream
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Encode a JSON array of events into a record stream
    Pack {
        /// Input JSON (array of events, as produced by `dump`)
        #[arg(short, long)]
        input: PathBuf,

        /// Output record stream
        #[arg(short, long)]
        output: PathBuf,

        /// Skip domain checks (pt, mass, area >= 0; finite JEC factor)
        #[arg(long)]
        no_validate: bool,
    },

    /// Decode and domain-check every event in a record stream
    Check {
        /// Input record stream
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Dump { input, output } => cmd_dump(&input, output.as_ref()),
        Commands::Summary { input, output } => cmd_summary(&input, output.as_ref()),
        Commands::Pack { input, output, no_validate } => cmd_pack(&input, &output, !no_validate),
        Commands::Check { input } => cmd_check(&input),
    }
}

fn load_events(input: &Path) -> Result<Vec<Event>> {
    tracing::info!(path = %input.display(), "reading record stream");
    let events = jec_io::read_events(input)
        .with_context(|| format!("failed to read record stream {}", input.display()))?;
    tracing::info!(n_events = events.len(), "record stream loaded");
    Ok(events)
}

fn cmd_dump(input: &Path, output: Option<&PathBuf>) -> Result<()> {
    let events = load_events(input)?;
    ensure_finite(&events)?;
    write_json(output, serde_json::to_value(&events)?)
}

/// JSON has no NaN or infinity; refuse rather than emit `null`.
fn ensure_finite(events: &[Event]) -> Result<()> {
    for (i, ev) in events.iter().enumerate() {
        for (j, jet) in ev.jets.iter().enumerate() {
            if let Some(field) = jet.non_finite_field() {
                anyhow::bail!("event {i} jet {j}: `{field}` is not finite and cannot be written as JSON");
            }
        }
        if let Some(field) = ev.met.non_finite_field() {
            anyhow::bail!("event {i} met: `{field}` is not finite and cannot be written as JSON");
        }
    }
    Ok(())
}

fn cmd_summary(input: &Path, output: Option<&PathBuf>) -> Result<()> {
    let events = load_events(input)?;
    let s = summary::Summary::from_events(&events);
    tracing::debug!(n_jets = s.n_jets, n_good_jets = s.n_good_jets, "summary computed");
    write_json(output, serde_json::to_value(&s)?)
}

fn cmd_pack(input: &Path, output: &Path, validate: bool) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let events: Vec<Event> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse events from {}", input.display()))?;

    if validate {
        for (i, ev) in events.iter().enumerate() {
            ev.validate().with_context(|| format!("event {i} failed validation"))?;
        }
    } else {
        tracing::warn!("domain validation disabled");
    }

    let n = jec_io::write_events(output, &events)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!(n_events = n, path = %output.display(), "record stream written");
    Ok(())
}

fn cmd_check(input: &Path) -> Result<()> {
    let events = load_events(input)?;
    for (i, ev) in events.iter().enumerate() {
        ev.validate().with_context(|| format!("event {i} failed validation"))?;
    }
    println!("ok: {} events", events.len());
    Ok(())
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
