//! Fertilizer recommendation library
//!
//! This crate provides the core functionality for:
//! - Parsing and range-checking soil and crop readings
//! - Loading the classifier and label encoder artifacts
//! - ML-based fertilizer prediction with a fixed fallback label
//! - Reference notes for the recommended fertilizers

pub mod catalog;
pub mod input;
pub mod models;
pub mod predictor;

pub use catalog::FertilizerInfo;
pub use input::{parse_features, InputError, SoilReading, ValidationError};
pub use models::*;
pub use predictor::{
    ArtifactError, ArtifactPaths, PredictionOutcome, PredictionService, FALLBACK_LABEL,
};
