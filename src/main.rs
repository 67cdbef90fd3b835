//! Car Sales Charts - per-model sales totals with static and interactive charts
//!
//! Loads a car sales CSV, sums sales per model and shows a bar chart, a pie
//! chart of the top models and an interactive bar chart.

mod charts;
mod data;
mod gui;
mod presenter;

use clap::Parser;
use data::{LoaderError, ProcessorError, ValidationError};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

const MODEL_COL: &str = "Model";
const SALES_COL: &str = "Sales_in_thousands";

/// Aggregate car sales per model and chart the totals.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// CSV file with `Model` and `Sales_in_thousands` columns
    #[arg(default_value = "car_sales.csv")]
    csv_path: PathBuf,

    /// Render the charts without opening the chart window
    #[arg(long)]
    no_window: bool,
}

/// Hard stops. Each one ends the run with a failure status.
#[derive(Error, Debug)]
enum AnalysisError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Processing(#[from] ProcessorError),
}

fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "analysis stopped");
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AnalysisError> {
    info!(path = %cli.csv_path.display(), "startup");

    let df = data::load_csv(&cli.csv_path)?;
    println!("✅ Dataset loaded successfully!\n");

    data::require_columns(&df, &[MODEL_COL, SALES_COL])?;

    let (cleaned, sales) = data::prepare_sales(df, MODEL_COL, SALES_COL)?;

    println!("🔍 Data Preview:");
    match presenter::preview(&cleaned) {
        Ok(preview) => {
            println!("{}\n", preview.table);
            if !preview.missing.is_empty() {
                println!("(columns not in dataset: {:?})\n", preview.missing);
            }
        }
        Err(e) => println!("⚠️ Preview unavailable: {e}\n"),
    }

    for warning in presenter::present_charts(&sales, !cli.no_window) {
        println!("⚠️ Plotting Error: {warning}");
    }

    println!("\n✅ Analysis completed successfully!");
    Ok(())
}

/// Print a hard stop the way a user should read it.
fn report(err: &AnalysisError) {
    match err {
        AnalysisError::Load(e @ LoaderError::FileNotFound(_)) => {
            println!("❌ Error: {e}");
            println!("Please make sure it's in the same directory as this program.");
        }
        AnalysisError::Load(e) => println!("❌ Error: {e}"),
        AnalysisError::Validation(e) => {
            let ValidationError::MissingColumn { available, .. } = e;
            println!("❌ {e}");
            println!("👉 Please check column names in the CSV file.");
            println!("Available columns: {available:?}");
        }
        AnalysisError::Processing(e @ ProcessorError::EmptyAfterAggregation) => {
            println!("❌ ValueError: {e}");
        }
        AnalysisError::Processing(e) => println!("❌ {e}"),
    }
}
