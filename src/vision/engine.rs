// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gesture recognition pipeline: detect, crop, preprocess, classify

use anyhow::{Context, Result};
use image::DynamicImage;
use tracing::debug;

use super::classifier::{argmax, ClassifierModel, LabelSet, OnnxClassifier};
use super::hand::{crop_hand, HandDetector, OnnxHandDetector};
use super::preprocessing::preprocess_hand_crop;

/// Configuration for loading the gesture models
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Path to the hand landmark ONNX model
    pub hand_model_path: String,
    /// Path to the gesture classifier ONNX model
    pub classifier_model_path: String,
    /// Path to the JSON label artifact
    pub labels_path: String,
    /// Presence score below which a hand candidate is discarded
    pub min_detection_confidence: f32,
    /// Upper bound on hands considered per frame
    pub max_hands: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hand_model_path: "./models/hand_landmark.onnx".to_string(),
            classifier_model_path: "./models/gesture_classifier.onnx".to_string(),
            labels_path: "./models/gesture_labels.json".to_string(),
            min_detection_confidence: 0.6,
            max_hands: 2,
        }
    }
}

/// A classified gesture with the classifier's score for it.
#[derive(Debug, Clone, PartialEq)]
pub struct GesturePrediction {
    pub label: String,
    pub confidence: f32,
}

/// The loaded gesture pipeline, shared read-only across all requests.
pub struct GestureEngine {
    detector: Box<dyn HandDetector>,
    classifier: Box<dyn ClassifierModel>,
    labels: LabelSet,
}

impl GestureEngine {
    /// Load detector, classifier and labels from the configured artifacts.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let labels = LabelSet::from_file(&config.labels_path)?;
        let detector = OnnxHandDetector::load(
            &config.hand_model_path,
            config.min_detection_confidence,
            config.max_hands,
        )
        .context("Failed to load hand landmark model")?;
        let classifier = OnnxClassifier::load(&config.classifier_model_path, labels.len())
            .context("Failed to load gesture classifier")?;

        Ok(Self::from_parts(
            Box::new(detector),
            Box::new(classifier),
            labels,
        ))
    }

    /// Assemble an engine from already-built parts.
    pub fn from_parts(
        detector: Box<dyn HandDetector>,
        classifier: Box<dyn ClassifierModel>,
        labels: LabelSet,
    ) -> Self {
        Self {
            detector,
            classifier,
            labels,
        }
    }

    /// Classify the gesture in `image`.
    ///
    /// Returns `Ok(None)` when no hand is found or every candidate box is
    /// degenerate. When several hands are detected, the first one yielding a
    /// valid crop is classified.
    pub fn classify(&self, image: &DynamicImage) -> Result<Option<GesturePrediction>> {
        let hands = self.detector.detect(image)?;
        if hands.is_empty() {
            debug!("no hand landmarks detected");
            return Ok(None);
        }

        for hand in &hands {
            let Some(crop) = crop_hand(image, hand) else {
                debug!(
                    "skipping degenerate hand box (presence {:.3})",
                    hand.presence()
                );
                continue;
            };

            let tensor = preprocess_hand_crop(&crop);
            let scores = self.classifier.scores(&tensor)?;
            let (index, confidence) = argmax(&scores).context("classifier produced no scores")?;
            let label = self
                .labels
                .get(index)
                .with_context(|| format!("classifier index {index} outside label set"))?;

            return Ok(Some(GesturePrediction {
                label: label.to_string(),
                confidence,
            }));
        }

        Ok(None)
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }
}
