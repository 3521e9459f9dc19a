//! Output formatting utilities
//!
//! Predictions and diagnostics both go to stdout, one line each.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use fertilizer_lib::{catalog, ArtifactError, FeatureVector, FertilizerInfo, InputError, PredictionOutcome};
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Fertilizer name only (default)
    #[default]
    Text,
    /// JSON object with inputs, confidence and fertilizer notes
    Json,
}

/// JSON view of one prediction
#[derive(Debug, Serialize)]
pub struct PredictionReport<'a> {
    pub fertilizer: &'a str,
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    pub soil_type: &'static str,
    pub crop_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'static FertilizerInfo>,
}

impl<'a> PredictionReport<'a> {
    pub fn new(outcome: &'a PredictionOutcome, features: &FeatureVector) -> Self {
        Self {
            fertilizer: outcome.label(),
            degraded: outcome.is_degraded(),
            cause: outcome.cause(),
            confidence: outcome.confidence(),
            soil_type: features.soil_type.name(),
            crop_type: features.crop_type.name(),
            details: catalog::lookup(outcome.label()),
        }
    }
}

/// Print a prediction in the requested format
pub fn print_outcome(
    outcome: &PredictionOutcome,
    features: &FeatureVector,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if let Some(cause) = outcome.cause() {
                print_error("Error during prediction:", cause);
            }
            println!("{}", outcome.label());
        }
        OutputFormat::Json => {
            let report = PredictionReport::new(outcome, features);
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(())
}

/// Print the single terminal message for a failed run
pub fn print_failure(err: &anyhow::Error) {
    if let Some(input) = err.downcast_ref::<InputError>() {
        match input {
            InputError::ArgumentCount { .. } => print_error("Error:", input),
            InputError::Parse { .. } => print_error("Unexpected error:", input),
            InputError::Validation(v) => print_error("Input validation error:", v),
        }
    } else if let Some(artifact) = err.downcast_ref::<ArtifactError>() {
        if artifact.is_not_found() {
            print_error("Error:", artifact);
        } else {
            print_error("Error loading models:", artifact);
        }
    } else {
        print_error("Unexpected error:", format!("{err:#}"));
    }
}

/// Command-line usage errors are reported like conversion failures
pub fn print_usage_error(err: &clap::Error) {
    print_error("Unexpected error:", usage_message(err));
}

/// First line of clap's rendering, without its own `error:` prefix
fn usage_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default().trim();
    line.strip_prefix("error:").unwrap_or(line).trim().to_string()
}

/// Print an error message
fn print_error(prefix: &str, message: impl std::fmt::Display) {
    println!("{} {}", prefix.red().bold(), message);
}
