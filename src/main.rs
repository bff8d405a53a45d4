//! Lithopanel batch CLI.
//!
//! Loads a depth-ordered well-log CSV, runs the windowed ensemble over
//! it, and appends one JSON record per window to the output log. Re-run
//! with the same output path to resume after an interruption.
//!
//! # Usage
//!
//! ```bash
//! LITHOPANEL_API_KEY=sk-... lithopanel --input well.csv --output results.jsonl
//! ```
//!
//! # Environment Variables
//!
//! - `LITHOPANEL_API_KEY`: API key for the reasoning-model endpoint (required)
//! - `LITHOPANEL_CONFIG`: Path to a TOML config file
//! - `RUST_LOG`: Logging level (default: info)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use lithopanel::{acquisition, pipeline, OpenAiCompatBackend, ResultLog, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "lithopanel")]
#[command(about = "Windowed-ensemble lithofacies classification for well logs")]
#[command(version)]
struct CliArgs {
    /// Depth-ordered well-log CSV to classify
    #[arg(long, short)]
    input: PathBuf,

    /// Output JSONL path; existing valid records are skipped on resume
    #[arg(long, short)]
    output: PathBuf,

    /// Override the configured window size
    #[arg(long)]
    window_size: Option<usize>,

    /// Override the configured stride
    #[arg(long)]
    stride: Option<usize>,

    /// Config file path (overrides LITHOPANEL_CONFIG and ./lithopanel.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let mut run_config = match &args.config {
        Some(path) => RunConfig::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RunConfig::load(),
    };
    if let Some(window_size) = args.window_size {
        run_config.windowing.window_size = window_size;
    }
    if let Some(stride) = args.stride {
        run_config.windowing.stride = stride;
    }
    run_config.validate()?;

    info!("Lithopanel - windowed-ensemble facies classification");
    info!(
        window_size = run_config.windowing.window_size,
        stride = run_config.windowing.stride,
        model = %run_config.model.model,
        "Run configuration"
    );

    let rows = acquisition::load_table(&args.input)
        .with_context(|| format!("failed to load log table {}", args.input.display()))?;
    info!(rows = rows.len(), path = %args.input.display(), "Log table loaded");

    let backend = OpenAiCompatBackend::from_config(&run_config.model)?;
    let mut log = ResultLog::open(&args.output)?;

    let summary = pipeline::run_batch(&backend, &rows, &mut log, &run_config).await?;

    info!(
        processed = summary.windows_processed,
        skipped = summary.windows_skipped,
        total = summary.total_windows,
        "Done"
    );
    Ok(())
}
