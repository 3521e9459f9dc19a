//! ONNX inference using tract
//!
//! Runs an exported classifier on a single `[1, 8]` float row. Output 0 is
//! read either as an integer label (scikit-learn style export) or as a row
//! of class scores; an optional float output 1 carries class probabilities.

use super::{ClassPrediction, Classifier, InferenceError};
use crate::models::{FeatureVector, NUM_FEATURES};
use anyhow::{Context, Result};
use std::fmt;
use std::time::Instant;
use tract_onnx::prelude::*;
use tracing::debug;

type TractModel = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// ONNX-based classifier using tract for lightweight inference
pub struct OnnxClassifier {
    model: TractModel,
}

impl OnnxClassifier {
    /// Load and optimize an ONNX model from bytes
    pub fn from_bytes(model_bytes: &[u8]) -> Result<Self> {
        let model = tract_onnx::onnx()
            .model_for_read(&mut std::io::Cursor::new(model_bytes))
            .context("Failed to parse ONNX model")?
            .with_input_fact(0, f32::fact([1, NUM_FEATURES]).into())
            .context("Failed to set input shape")?
            .into_optimized()
            .context("Failed to optimize model")?
            .into_runnable()
            .context("Failed to create runnable model")?;
        Ok(Self { model })
    }

    /// Convert feature vector to tensor input
    fn features_to_tensor(features: &FeatureVector) -> Result<Tensor, InferenceError> {
        let data: Vec<f32> = features.to_array().iter().map(|&v| v as f32).collect();
        tract_ndarray::Array2::from_shape_vec((1, NUM_FEATURES), data)
            .map(Tensor::from)
            .map_err(|e| InferenceError::Model(e.to_string()))
    }
}

impl fmt::Debug for OnnxClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnnxClassifier").finish_non_exhaustive()
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<ClassPrediction, InferenceError> {
        let start = Instant::now();
        let input = Self::features_to_tensor(features)?;

        let outputs = self
            .model
            .run(tvec!(input.into()))
            .map_err(|e| InferenceError::Model(format!("{e:#}")))?;
        let label = outputs
            .first()
            .ok_or_else(|| InferenceError::Output("no output from model".to_string()))?;

        let index = class_index(label)?;
        let confidence = outputs.get(1).and_then(|probs| class_probability(probs, index));

        debug!(
            elapsed_us = start.elapsed().as_micros(),
            index,
            ?confidence,
            "Inference completed"
        );
        Ok(ClassPrediction { index, confidence })
    }
}

/// Read the predicted class index from the model's first output
pub(crate) fn class_index(output: &Tensor) -> Result<usize, InferenceError> {
    let dt = output.datum_type();
    if dt.is_signed() || dt.is_unsigned() {
        let labels = output
            .cast_to::<i64>()
            .map_err(|e| InferenceError::Output(e.to_string()))?;
        let labels = labels
            .as_slice::<i64>()
            .map_err(|e| InferenceError::Output(e.to_string()))?;
        let first = *labels
            .first()
            .ok_or_else(|| InferenceError::Output("empty label tensor".to_string()))?;
        return usize::try_from(first)
            .map_err(|_| InferenceError::Output(format!("negative class index {first}")));
    }

    if dt.is_float() {
        let scores = output
            .cast_to::<f32>()
            .map_err(|e| InferenceError::Output(e.to_string()))?;
        let scores = scores
            .as_slice::<f32>()
            .map_err(|e| InferenceError::Output(e.to_string()))?;
        return match scores {
            [] => Err(InferenceError::Output("empty score tensor".to_string())),
            [value] => integral_index(*value),
            _ => argmax(scores),
        };
    }

    Err(InferenceError::Output(format!("unsupported output type {dt:?}")))
}

fn integral_index(value: f32) -> Result<usize, InferenceError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Ok(value as usize)
    } else {
        Err(InferenceError::Output(format!("{value} is not a class index")))
    }
}

fn argmax(scores: &[f32]) -> Result<usize, InferenceError> {
    if scores.iter().any(|s| s.is_nan()) {
        return Err(InferenceError::Output("NaN in class scores".to_string()));
    }
    scores
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(idx, _)| idx)
        .ok_or_else(|| InferenceError::Output("empty score tensor".to_string()))
}

fn class_probability(probs: &Tensor, index: usize) -> Option<f32> {
    if !probs.datum_type().is_float() {
        return None;
    }
    let probs = probs.cast_to::<f32>().ok()?;
    probs.as_slice::<f32>().ok()?.get(index).copied()
}
