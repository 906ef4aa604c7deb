//! cost-plot CLI

use anyhow::{Context, Result};
use clap::Parser;
use cost_plot::{run, RunConfig, DEFAULT_DIR, DEFAULT_PATH};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cost-plot")]
#[command(about = "Fit cost = slope * log2(count) + intercept and plot it")]
#[command(version)]
struct Cli {
    /// Directory holding the input CSV; plot.png and plot.html are written here
    #[arg(long, default_value = DEFAULT_DIR)]
    dir: PathBuf,

    /// Input CSV file, relative to --dir
    #[arg(long, default_value = DEFAULT_PATH)]
    path: PathBuf,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::new(cli.dir, cli.path);
    run(&config).with_context(|| format!("failed to plot {}", config.input_path().display()))?;
    Ok(())
}
