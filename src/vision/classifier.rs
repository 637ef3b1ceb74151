// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gesture classification over a fixed label set

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use ndarray::Array4;
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use tracing::info;

use crate::vision::preprocessing::CLASSIFIER_INPUT_SIZE;

/// Fixed, ordered mapping from classifier output index to gesture name.
///
/// Loaded once at startup and immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Load labels from a JSON array file (`["hello", "yes", ...]`).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open label file {}", path.display()))?;
        let labels: Vec<String> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse label file {}", path.display()))?;
        Self::from_labels(labels)
    }

    /// Build a label set from an in-memory list.
    pub fn from_labels(labels: Vec<String>) -> Result<Self> {
        if labels.is_empty() {
            anyhow::bail!("label set is empty");
        }
        Ok(Self { labels })
    }

    /// Decode an output index to its gesture name.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// A model scoring a preprocessed hand crop against the label set.
pub trait ClassifierModel: Send + Sync {
    /// One score per label for a `[1, 128, 128, 3]` input tensor.
    fn scores(&self, input: &Array4<f32>) -> Result<Vec<f32>>;
}

/// ONNX gesture classifier.
///
/// Runs a forward pass over the pretrained classifier and returns the raw
/// probability vector; decoding to a label happens against the [`LabelSet`].
/// The output width is validated against the label count at load time with a
/// throwaway inference, so a mismatched model/label pairing fails at startup
/// instead of on the first request.
///
/// # Thread Safety
/// The session is shared behind a mutex, same as the hand detector.
pub struct OnnxClassifier {
    session: Arc<Mutex<Session>>,
    input_name: String,
    num_labels: usize,
}

impl OnnxClassifier {
    /// Load the classifier from an ONNX file and validate its output width.
    pub fn load<P: AsRef<Path>>(model_path: P, num_labels: usize) -> Result<Self> {
        let model_path = model_path.as_ref();
        if !model_path.exists() {
            anyhow::bail!("gesture classifier not found: {}", model_path.display());
        }

        let mut session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("Failed to set optimization level")?
            .with_intra_threads(4)
            .context("Failed to set intra threads")?
            .commit_from_file(model_path)
            .context(format!(
                "Failed to load gesture classifier from {}",
                model_path.display()
            ))?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .context("gesture classifier declares no inputs")?;

        // Validation inference: one score row, one entry per label.
        {
            let side = CLASSIFIER_INPUT_SIZE as usize;
            let probe = Array4::<f32>::zeros((1, side, side, 3));
            let outputs = session.run(ort::inputs![
                input_name.as_str() => Value::from_array(probe)?
            ])?;

            let scores = outputs[0]
                .try_extract_array::<f32>()
                .context("Failed to extract classifier output")?;
            let shape = scores.shape();
            if shape.len() != 2 || shape[0] != 1 || shape[1] != num_labels {
                anyhow::bail!(
                    "classifier output shape {:?} does not match {} labels (expected [1, {}])",
                    shape,
                    num_labels,
                    num_labels
                );
            }
        }

        info!("✅ Gesture classifier validated against {} labels", num_labels);

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            input_name,
            num_labels,
        })
    }
}

impl ClassifierModel for OnnxClassifier {
    fn scores(&self, input: &Array4<f32>) -> Result<Vec<f32>> {
        let mut session = self.session.lock().unwrap();
        let outputs = session.run(ort::inputs![
            self.input_name.as_str() => Value::from_array(input.clone())?
        ])?;

        let scores = outputs[0]
            .try_extract_array::<f32>()
            .context("Failed to extract classifier output")?;
        if scores.len() != self.num_labels {
            anyhow::bail!(
                "classifier produced {} scores (expected {})",
                scores.len(),
                self.num_labels
            );
        }

        Ok(scores.iter().copied().collect())
    }
}

/// Index and value of the highest score; `None` for an empty slice.
///
/// Ties resolve to the earliest index, matching how the label artifact was
/// produced.
pub fn argmax(scores: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (index, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }
    best
}
