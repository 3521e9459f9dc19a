//! Configuration management for the CLI

use anyhow::{Context, Result};
use fertilizer_lib::predictor::{ArtifactPaths, DEFAULT_CLASSIFIER_FILE, DEFAULT_ENCODER_FILE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `FERTILIZER_MODEL_DIR`
const ENV_PREFIX: &str = "FERTILIZER";

/// Predictor configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PredictorConfig {
    /// Directory holding the artifacts
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,

    /// Classifier file name, relative to `model_dir`
    #[serde(default = "default_classifier_file")]
    pub classifier_file: String,

    /// Label encoder file name, relative to `model_dir`
    #[serde(default = "default_encoder_file")]
    pub encoder_file: String,
}

fn default_model_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_classifier_file() -> String {
    DEFAULT_CLASSIFIER_FILE.to_string()
}

fn default_encoder_file() -> String {
    DEFAULT_ENCODER_FILE.to_string()
}

impl PredictorConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        Self::from_env(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(env)
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Failed to parse configuration")
    }

    /// Artifact locations, with `model_dir_override` taking precedence
    pub fn artifact_paths(&self, model_dir_override: Option<&Path>) -> ArtifactPaths {
        let dir = model_dir_override.unwrap_or(self.model_dir.as_path());
        if dir == Path::new(".") {
            return ArtifactPaths::new(&self.classifier_file, &self.encoder_file);
        }
        ArtifactPaths::new(dir.join(&self.classifier_file), dir.join(&self.encoder_file))
    }
}
