//! # Route Preview
//!
//! Command-line tool that batches a JSON export of a driver's pickups and prints
//! the resulting route, the way the driver's list screen would show it.

use clap::{Parser, ValueEnum};
use pickup_batching::batching::{batch_pickups, format_pickup_time_with_config, get_batch_summary};
use pickup_batching::logging::{init_with_config, log_batch_operation};
use pickup_batching::models::{decode_pickups, PickupFields};
use pickup_batching::{BatchingConfig, BatchingError};
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use std::process;
use tracing::error;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "route-preview")]
#[command(about = "Batch a driver's pickups by ZIP code and print the day's route")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// JSON file holding an array of pickup documents (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Configuration file (defaults to config/pickup_batching.* when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Driver the pickups belong to, for log context
    #[arg(short, long)]
    driver: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!(error = %e, "route preview failed");
        eprintln!("❌ {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), BatchingError> {
    let config = match &cli.config {
        Some(path) => BatchingConfig::load_from_path(path)?,
        None => BatchingConfig::load()?,
    };
    init_with_config(&config)?;

    let input = read_input(cli.input.as_ref())?;
    let route = batch_pickups(decode_pickups(&input)?);
    let summary = get_batch_summary(&route);

    log_batch_operation(
        "route_preview",
        cli.driver.as_deref(),
        summary.total_pickups,
        summary.total_batches,
        None,
    );

    match cli.format {
        OutputFormat::Json => {
            let output = json!({ "route": route, "summary": summary });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table => {
            let Some(headline) = summary.headline() else {
                println!("No pickups scheduled.");
                return Ok(());
            };
            println!("{headline}");
            for batch in &summary.batch_breakdown {
                println!("  {} ZIP {}: {}", batch.color, batch.zip_code, batch.count);
            }
            println!();
            for stop in &route {
                println!(
                    "{:>8}  {:<20}  {:<8}  {}",
                    format_pickup_time_with_config(stop, &config),
                    stop.indicator_label(),
                    stop.batch_color,
                    stop.pickup_id()
                );
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String, BatchingError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
