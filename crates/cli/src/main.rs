//! Fertilizer Predictor CLI
//!
//! Recommends a fertilizer from eight soil and crop readings using a
//! pre-trained classifier and label encoder from the working directory.

mod config;
mod output;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use fertilizer_lib::{parse_features, PredictionService};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Fertilizer recommendation CLI
#[derive(Debug, Parser)]
#[command(name = "fertilizer-predict")]
#[command(author, version, about = "Fertilizer recommendation from soil and crop readings", long_about = None)]
#[command(after_help = r#"Readings (all required, in order):
    temperature   degrees Celsius, 0-50
    humidity      percent, 0-100
    moisture      percent, 0-100
    soil_type     0 Black, 1 Clayey, 2 Loamy, 3 Red, 4 Sandy
    crop_type     0-16, e.g. 0 Barley, 3 Maize, 10 Wheat, 15 rice
    nitrogen      any number
    potassium     any number
    phosphorus    any number

Examples:
    fertilizer-predict 25 80 40 1 5 10 15 20
    fertilizer-predict --format json --model-dir models/ 30 60 45 2 3 37 0 0"#)]
pub struct Cli {
    /// Directory containing classifier.onnx and fertilizer.json
    #[arg(long)]
    pub model_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "text")]
    pub format: output::OutputFormat,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// temperature humidity moisture soil_type crop_type nitrogen potassium phosphorus
    #[arg(
        value_name = "READINGS",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub readings: Vec<String>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            output::print_usage_error(&err);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(cli.verbose, cli.log_json);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let features = parse_features(&cli.readings)?;
    debug!(?features, "Readings validated");

    let config = config::PredictorConfig::load()?;
    let paths = config.artifact_paths(cli.model_dir.as_deref());
    let service = PredictionService::load(&paths)?;

    let outcome = service.predict(&features);
    info!(
        fertilizer = outcome.label(),
        degraded = outcome.is_degraded(),
        "Prediction complete"
    );

    output::print_outcome(&outcome, &features, cli.format)
}

/// Logs go to stderr so stdout carries only the prediction
fn init_tracing(verbose: bool, json: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
