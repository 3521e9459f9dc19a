//! Prediction service with fallback on inference failure
//!
//! Artifacts are loaded once when the service is built and reused for every
//! call. Any failure after that point degrades to [`FALLBACK_LABEL`] instead
//! of propagating.

use super::artifacts::{load_artifacts, ArtifactError, ArtifactPaths};
use super::encoder::LabelEncoder;
use super::inference::OnnxClassifier;
use super::{Classifier, InferenceError, LabelDecoder};
use crate::models::FeatureVector;
use serde::Serialize;
use tracing::{debug, warn};

/// Label returned when inference fails after artifacts are loaded
pub const FALLBACK_LABEL: &str = "Urea";

/// Result of a single prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PredictionOutcome {
    /// Label decoded from the classifier output
    Predicted {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        confidence: Option<f32>,
    },
    /// Fallback label substituted after an inference failure
    Degraded { label: String, cause: String },
}

impl PredictionOutcome {
    fn degraded(cause: &InferenceError) -> Self {
        Self::Degraded {
            label: FALLBACK_LABEL.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Predicted { label, .. } | Self::Degraded { label, .. } => label,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::Degraded { cause, .. } => Some(cause),
            Self::Predicted { .. } => None,
        }
    }

    pub fn confidence(&self) -> Option<f32> {
        match self {
            Self::Predicted { confidence, .. } => *confidence,
            Self::Degraded { .. } => None,
        }
    }
}

/// Owns a loaded classifier and label decoder
pub struct PredictionService<C = OnnxClassifier, D = LabelEncoder> {
    classifier: C,
    decoder: D,
}

impl PredictionService {
    /// Load both artifacts; failures here are fatal to the caller
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let (classifier, decoder) = load_artifacts(paths)?;
        Ok(Self::new(classifier, decoder))
    }
}

impl<C: Classifier, D: LabelDecoder> PredictionService<C, D> {
    pub fn new(classifier: C, decoder: D) -> Self {
        Self {
            classifier,
            decoder,
        }
    }

    /// Labels the service can produce
    pub fn classes(&self) -> &[String] {
        self.decoder.classes()
    }

    /// Predict without the fallback
    pub fn try_predict(&self, features: &FeatureVector) -> Result<PredictionOutcome, InferenceError> {
        let prediction = self.classifier.predict(features)?;
        let label = self.decoder.decode(prediction.index)?;
        debug!(index = prediction.index, label, "Decoded prediction");
        Ok(PredictionOutcome::Predicted {
            label: label.to_string(),
            confidence: prediction.confidence,
        })
    }

    /// Predict, substituting the fallback label on any inference failure
    pub fn predict(&self, features: &FeatureVector) -> PredictionOutcome {
        self.try_predict(features).unwrap_or_else(|e| {
            warn!(error = %e, fallback = FALLBACK_LABEL, "Prediction failed, using fallback");
            PredictionOutcome::degraded(&e)
        })
    }
}
