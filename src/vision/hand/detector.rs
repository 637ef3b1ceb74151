// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! ONNX hand landmark detector

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use image::DynamicImage;
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use tracing::debug;

use super::{HandDetector, LandmarkSet, HAND_LANDMARK_COUNT};
use crate::vision::preprocessing::to_unit_tensor;

/// Input resolution of the landmark network.
pub const DETECTOR_INPUT_SIZE: u32 = 224;

/// Hand landmark network (MediaPipe-style hand landmark export).
///
/// Expects a `[1, 224, 224, 3]` frame scaled to 0..1 and produces screen
/// landmarks `[1, 63]` (x, y, z per landmark, in input pixels) plus a
/// `[1, 1]` presence score. Candidates below the configured presence
/// threshold are discarded.
///
/// # Thread Safety
/// The session is not assumed reentrant; it is shared behind a mutex so a
/// single detector instance can serve concurrent requests.
pub struct OnnxHandDetector {
    session: Arc<Mutex<Session>>,
    input_name: String,
    min_confidence: f32,
    max_hands: usize,
}

impl OnnxHandDetector {
    /// Load the landmark network from an ONNX file.
    ///
    /// # Arguments
    /// * `model_path` - Path to the ONNX model file
    /// * `min_confidence` - Presence score below which detections are dropped
    /// * `max_hands` - Upper bound on landmark sets returned per frame
    pub fn load<P: AsRef<Path>>(
        model_path: P,
        min_confidence: f32,
        max_hands: usize,
    ) -> Result<Self> {
        let model_path = model_path.as_ref();
        if !model_path.exists() {
            anyhow::bail!("hand landmark model not found: {}", model_path.display());
        }

        let session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("Failed to set optimization level")?
            .with_intra_threads(4)
            .context("Failed to set intra threads")?
            .commit_from_file(model_path)
            .context(format!(
                "Failed to load hand landmark model from {}",
                model_path.display()
            ))?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .context("hand landmark model declares no inputs")?;

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            input_name,
            min_confidence,
            max_hands,
        })
    }
}

impl HandDetector for OnnxHandDetector {
    fn detect(&self, image: &DynamicImage) -> Result<Vec<LandmarkSet>> {
        let tensor = to_unit_tensor(image, DETECTOR_INPUT_SIZE);

        let mut session = self.session.lock().unwrap();
        let outputs = session.run(ort::inputs![
            self.input_name.as_str() => Value::from_array(tensor)?
        ])?;

        // Output order follows the hand landmark export: [0] screen
        // landmarks, [1] presence flag.
        let landmarks = outputs[0]
            .try_extract_array::<f32>()
            .context("Failed to extract landmark tensor")?;
        let presence = outputs[1]
            .try_extract_array::<f32>()
            .context("Failed to extract presence tensor")?;

        let expected = HAND_LANDMARK_COUNT * 3;
        if landmarks.len() != expected {
            anyhow::bail!(
                "landmark output has {} values (expected {})",
                landmarks.len(),
                expected
            );
        }

        let score = presence
            .iter()
            .next()
            .copied()
            .context("presence output is empty")?;
        if score < self.min_confidence {
            debug!(
                "hand presence {:.3} below threshold {:.2}",
                score, self.min_confidence
            );
            return Ok(Vec::new());
        }

        // Screen landmarks are in detector-input pixels; normalize to [0, 1].
        let scale = DETECTOR_INPUT_SIZE as f32;
        let flat: Vec<f32> = landmarks.iter().copied().collect();
        let points: Vec<[f32; 2]> = flat
            .chunks_exact(3)
            .map(|xyz| [xyz[0] / scale, xyz[1] / scale])
            .collect();

        let mut hands = vec![LandmarkSet::new(points, score)];
        hands.truncate(self.max_hands);
        Ok(hands)
    }
}
