//! Label encoder mapping class indices to fertilizer names

use super::LabelDecoder;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum EncoderFile {
    Wrapped { classes: Vec<String> },
    Bare(Vec<String>),
}

/// Ordered set of known class labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Parse `{"classes": [...]}` or a bare JSON array of labels
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let file: EncoderFile =
            serde_json::from_slice(bytes).context("Failed to parse label encoder JSON")?;
        let classes = match file {
            EncoderFile::Wrapped { classes } | EncoderFile::Bare(classes) => classes,
        };
        if classes.is_empty() {
            anyhow::bail!("Label encoder has no classes");
        }
        Ok(Self { classes })
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.classes.iter().any(|c| c == label)
    }
}

impl LabelDecoder for LabelEncoder {
    fn classes(&self) -> &[String] {
        &self.classes
    }
}
