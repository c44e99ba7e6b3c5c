//! tickertape CLI — build the indicator dataset and inspect the universe.
//!
//! Commands:
//! - `run` — fetch bars and fundamentals, compute indicators, write the CSV
//! - `universe` — print the ticker universe that a run would use

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tickertape_core::data::{StdoutProgress, Universe, YahooProvider};
use tickertape_core::{run_pipeline, RunConfig};

#[derive(Parser)]
#[command(
    name = "tickertape",
    about = "tickertape — daily equity indicator dataset builder"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and write the output CSV.
    Run {
        /// Path to a TOML config file. Defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Fetch start date (YYYY-MM-DD); overrides the config.
        #[arg(long)]
        start: Option<String>,

        /// Fetch end date (YYYY-MM-DD); overrides the config.
        #[arg(long)]
        end: Option<String>,

        /// Retention cutoff (YYYY-MM-DD); overrides the config.
        #[arg(long)]
        cutoff: Option<String>,

        /// Universe TOML file; overrides the config.
        #[arg(long)]
        universe: Option<PathBuf>,

        /// Output CSV path; overrides the config.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the ticker universe a run would use.
    Universe {
        /// Universe TOML file. Defaults to the built-in US universe.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            start,
            end,
            cutoff,
            universe,
            output,
        } => cmd_run(config, start, end, cutoff, universe, output),
        Commands::Universe { file } => cmd_universe(file),
    }
}

fn cmd_run(
    config_path: Option<PathBuf>,
    start: Option<String>,
    end: Option<String>,
    cutoff: Option<String>,
    universe: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => RunConfig::from_file(&path)
            .with_context(|| format!("load config from {}", path.display()))?,
        None => RunConfig::default_run(),
    };

    if let Some(start) = start {
        config.start_date = start;
    }
    if let Some(end) = end {
        config.end_date = end;
    }
    if let Some(cutoff) = cutoff {
        config.retention_cutoff = cutoff;
    }
    if let Some(universe) = universe {
        config.universe_file = Some(universe);
    }
    if let Some(output) = output {
        config.output_path = output;
    }

    let provider = YahooProvider::new().context("build Yahoo Finance client")?;

    // YahooProvider serves both call shapes: bars and fundamentals.
    let summary = run_pipeline(&config, &provider, &provider, &StdoutProgress)
        .context("pipeline run failed")?;

    println!();
    println!("=== Run Summary ===");
    println!("Tickers:   {} requested, {} with data", summary.tickers_requested, summary.tickers_with_data);
    println!("Rows:      {} fetched, {} retained", summary.rows_total, summary.rows_retained);
    println!("Output:    {}", summary.output_path.display());

    Ok(())
}

fn cmd_universe(file: Option<PathBuf>) -> Result<()> {
    let universe = match file {
        Some(path) => Universe::from_file(&path)
            .map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("load universe from {}", path.display()))?,
        None => Universe::default_us(),
    };

    for sector in universe.sector_names() {
        let tickers = universe.sector_tickers(sector).unwrap_or(&[]);
        println!("{sector} ({}):", tickers.len());
        println!("  {}", tickers.join(" "));
    }
    println!("\nTotal: {} tickers", universe.ticker_count());

    Ok(())
}
