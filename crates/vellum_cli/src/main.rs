//! Vellum CLI
//!
//! Replays view events against a headless host and prints what the scroll
//! decoration committed on each frame.
//!
//! Run with: cargo run -p vellum_cli -- replay crates/vellum_cli/scenarios/scroll_shadow.json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vellum_core::EditorOptions;

mod runner;
mod scenario;

use runner::{run_scenario, FrameRecord};
use scenario::Scenario;

#[derive(Parser)]
#[command(name = "vellum", version, about = "Headless view-part replay tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON scenario and print each rendered frame
    Replay {
        /// Scenario file
        scenario: PathBuf,

        /// Editor options (TOML)
        #[arg(long)]
        options: Option<PathBuf>,

        /// Print one JSON object per frame
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            scenario,
            options,
            json,
        } => replay(&scenario, options.as_deref(), json),
    }
}

fn replay(path: &std::path::Path, options: Option<&std::path::Path>, json: bool) -> Result<()> {
    let options = match options {
        Some(path) => EditorOptions::from_path(path)
            .with_context(|| format!("failed to load options {}", path.display()))?,
        None => EditorOptions::default(),
    };
    let scenario = Scenario::from_path(path)?;
    tracing::info!(steps = scenario.steps.len(), "replaying scenario");

    for record in run_scenario(&scenario, options)? {
        if json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            print_record(&record);
        }
    }
    Ok(())
}

fn print_record(record: &FrameRecord) {
    let node = &record.decoration;
    let width = node
        .width
        .map(|w| format!("{w}px"))
        .unwrap_or_else(|| "unset".to_string());
    let classes = if node.classes.is_empty() {
        "-".to_string()
    } else {
        node.classes.join(" ")
    };
    println!(
        "frame {:>3}  commits {}  width {:<8}  class {}",
        record.frame, record.commits, width, classes
    );
}
