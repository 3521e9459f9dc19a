//! Artifact loading for the classifier and label encoder
//!
//! Both files are read fully into memory and closed before any
//! inference runs.

use super::encoder::LabelEncoder;
use super::inference::OnnxClassifier;
use sha2::{Digest, Sha256};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_CLASSIFIER_FILE: &str = "classifier.onnx";
pub const DEFAULT_ENCODER_FILE: &str = "fertilizer.json";

/// Errors loading artifacts; all of them are fatal to the caller
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Model file not found - {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to load {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },
}

impl ArtifactError {
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Read { path, .. } | Self::Load { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Locations of the two artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub classifier: PathBuf,
    pub encoder: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            classifier: PathBuf::from(DEFAULT_CLASSIFIER_FILE),
            encoder: PathBuf::from(DEFAULT_ENCODER_FILE),
        }
    }
}

impl ArtifactPaths {
    pub fn new(classifier: impl Into<PathBuf>, encoder: impl Into<PathBuf>) -> Self {
        Self {
            classifier: classifier.into(),
            encoder: encoder.into(),
        }
    }

    /// Default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(DEFAULT_CLASSIFIER_FILE),
            dir.join(DEFAULT_ENCODER_FILE),
        )
    }
}

/// Load the classifier, then the encoder
pub fn load_artifacts(paths: &ArtifactPaths) -> Result<(OnnxClassifier, LabelEncoder), ArtifactError> {
    let classifier = load_classifier(&paths.classifier)?;
    let encoder = load_encoder(&paths.encoder)?;
    info!(
        classifier = %paths.classifier.display(),
        encoder = %paths.encoder.display(),
        classes = encoder.len(),
        "Artifacts loaded"
    );
    Ok((classifier, encoder))
}

pub fn load_classifier(path: &Path) -> Result<OnnxClassifier, ArtifactError> {
    let bytes = read_artifact(path)?;
    OnnxClassifier::from_bytes(&bytes).map_err(|e| ArtifactError::Load {
        path: path.to_path_buf(),
        reason: format!("{e:#}"),
    })
}

pub fn load_encoder(path: &Path) -> Result<LabelEncoder, ArtifactError> {
    let bytes = read_artifact(path)?;
    LabelEncoder::from_json(&bytes).map_err(|e| ArtifactError::Load {
        path: path.to_path_buf(),
        reason: format!("{e:#}"),
    })
}

fn read_artifact(path: &Path) -> Result<Vec<u8>, ArtifactError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ArtifactError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ArtifactError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!(
        path = %path.display(),
        size = bytes.len(),
        checksum = %compute_checksum(&bytes),
        "Artifact read"
    );
    Ok(bytes)
}

/// Compute SHA256 checksum of data
pub fn compute_checksum(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
