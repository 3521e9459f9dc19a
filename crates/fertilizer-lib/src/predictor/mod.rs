//! ML prediction engine

mod artifacts;
mod encoder;
mod inference;
mod service;

pub use artifacts::{
    compute_checksum, load_artifacts, load_classifier, load_encoder, ArtifactError, ArtifactPaths,
    DEFAULT_CLASSIFIER_FILE, DEFAULT_ENCODER_FILE,
};
pub use encoder::LabelEncoder;
pub use inference::OnnxClassifier;
pub use service::{PredictionOutcome, PredictionService, FALLBACK_LABEL};

use crate::models::FeatureVector;
use thiserror::Error;

/// Class chosen by a classifier for one feature vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassPrediction {
    pub index: usize,
    /// Probability of `index`, when the model exposes one
    pub confidence: Option<f32>,
}

impl ClassPrediction {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            confidence: None,
        }
    }
}

/// Failures after artifacts are loaded
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("model execution failed: {0}")]
    Model(String),

    #[error("unusable model output: {0}")]
    Output(String),

    #[error("class index {index} out of range for {known} known labels")]
    UnknownClass { index: usize, known: usize },
}

/// Trait for classifier implementations
pub trait Classifier: Send + Sync {
    /// Predict the class index for a single feature vector
    fn predict(&self, features: &FeatureVector) -> Result<ClassPrediction, InferenceError>;
}

/// Trait for mapping class indices back to labels
pub trait LabelDecoder: Send + Sync {
    /// Known labels in class-index order
    fn classes(&self) -> &[String];

    fn decode(&self, index: usize) -> Result<&str, InferenceError> {
        let classes = self.classes();
        classes
            .get(index)
            .map(String::as_str)
            .ok_or(InferenceError::UnknownClass {
                index,
                known: classes.len(),
            })
    }
}
