//! buffline-replay - replay a recorded pull through the status tracker.
//!
//! Usage: buffline-replay <RUN_FILE> [--config PATH] [--format json|text]
//!
//! Output: the resulting status timeline on stdout.

mod render;
mod run_file;

use std::path::PathBuf;

use buffline_core::config::default_config_path;
use buffline_core::{TrackerConfig, load_config};
use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::EnvFilter;

use run_file::{ReplayError, load_run_file, replay};

#[derive(Parser)]
#[command(version, about = "Replay a recorded pull and print its status timeline")]
struct Cli {
    /// Run file (JSON) with roster, catalog and events
    run_file: PathBuf,

    /// Tracker config (TOML). Defaults to the user config file if present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Initialize logging, writing to BUFFLINE_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("BUFFLINE_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(explicit: Option<&PathBuf>) -> Result<TrackerConfig, ReplayError> {
    if let Some(path) = explicit {
        return Ok(load_config(path)?);
    }
    match default_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "Using default tracker config");
            Ok(load_config(&path)?)
        }
        _ => Ok(TrackerConfig::default()),
    }
}

fn run(cli: &Cli) -> Result<(), ReplayError> {
    let config = resolve_config(cli.config.as_ref())?;
    let run = load_run_file(&cli.run_file)?;
    let (timeline, _report) = replay(run, &config);

    match cli.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&timeline.to_tree()).map_err(ReplayError::Output)?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{}", render::render_text(&timeline)),
    }
    Ok(())
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "Replay failed");
        std::process::exit(1);
    }
}
