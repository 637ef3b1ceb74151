// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Pipeline tests exercising GestureEngine through its trait seams
//!
//! Stub detector/classifier implementations stand in for the ONNX sessions
//! so the detect -> crop -> preprocess -> decode flow is tested without
//! model artifacts.

use anyhow::Result;
use gesture_node::vision::{
    ClassifierModel, EngineConfig, GestureEngine, HandDetector, LabelSet, LandmarkSet,
};
use image::DynamicImage;
use ndarray::Array4;

/// Detector returning a fixed set of hands for every frame.
struct StubDetector {
    hands: Vec<LandmarkSet>,
}

impl HandDetector for StubDetector {
    fn detect(&self, _image: &DynamicImage) -> Result<Vec<LandmarkSet>> {
        Ok(self.hands.clone())
    }
}

/// Classifier returning fixed scores.
struct StubClassifier {
    scores: Vec<f32>,
}

impl ClassifierModel for StubClassifier {
    fn scores(&self, _input: &Array4<f32>) -> Result<Vec<f32>> {
        Ok(self.scores.clone())
    }
}

fn labels() -> LabelSet {
    LabelSet::from_labels(vec![
        "hello".to_string(),
        "yes".to_string(),
        "no".to_string(),
    ])
    .unwrap()
}

fn engine(hands: Vec<LandmarkSet>, scores: Vec<f32>) -> GestureEngine {
    GestureEngine::from_parts(
        Box::new(StubDetector { hands }),
        Box::new(StubClassifier { scores }),
        labels(),
    )
}

fn frame() -> DynamicImage {
    DynamicImage::new_rgb8(200, 200)
}

/// 21 points spread around the frame center.
fn centered_hand() -> LandmarkSet {
    let points = (0..21)
        .map(|i| {
            let offset = i as f32 / 100.0;
            [0.4 + offset, 0.4 + offset]
        })
        .collect();
    LandmarkSet::new(points, 0.9)
}

/// All landmarks beyond the right edge: clamping collapses the box.
fn out_of_frame_hand() -> LandmarkSet {
    LandmarkSet::new(vec![[1.5, 0.5]; 21], 0.9)
}

#[test]
fn test_no_hands_yields_none() {
    let engine = engine(vec![], vec![0.1, 0.8, 0.1]);
    assert!(engine.classify(&frame()).unwrap().is_none());
}

#[test]
fn test_detected_hand_yields_label_from_label_set() {
    let engine = engine(vec![centered_hand()], vec![0.1, 0.8, 0.1]);
    let prediction = engine.classify(&frame()).unwrap().expect("prediction");
    assert_eq!(prediction.label, "yes");
    assert!(engine.labels().contains(&prediction.label));
    assert!((prediction.confidence - 0.8).abs() < 1e-6);
}

#[test]
fn test_degenerate_box_is_treated_as_no_hand() {
    let engine = engine(vec![out_of_frame_hand()], vec![0.1, 0.8, 0.1]);
    assert!(engine.classify(&frame()).unwrap().is_none());
}

#[test]
fn test_first_valid_crop_wins() {
    // A degenerate candidate first, then a usable one.
    let engine = engine(
        vec![out_of_frame_hand(), centered_hand()],
        vec![0.7, 0.2, 0.1],
    );
    let prediction = engine.classify(&frame()).unwrap().expect("prediction");
    assert_eq!(prediction.label, "hello");
}

#[test]
fn test_repeated_classification_is_stable() {
    let engine = engine(vec![centered_hand()], vec![0.2, 0.3, 0.5]);
    let first = engine.classify(&frame()).unwrap().expect("prediction");
    let second = engine.classify(&frame()).unwrap().expect("prediction");
    assert_eq!(first, second);
}

#[test]
fn test_hand_touching_frame_edge_is_classified() {
    // Landmarks hugging the bottom-right corner: the box clamps to the
    // frame instead of indexing outside it.
    let edge_hand = LandmarkSet::new(vec![[0.95, 0.95]; 21], 0.9);
    let engine = engine(vec![edge_hand], vec![0.9, 0.05, 0.05]);
    let prediction = engine.classify(&frame()).unwrap().expect("prediction");
    assert_eq!(prediction.label, "hello");
}

#[test]
fn test_engine_without_artifacts_fails_to_load() {
    let config = EngineConfig {
        hand_model_path: "/nonexistent/hand_landmark.onnx".to_string(),
        classifier_model_path: "/nonexistent/gesture_classifier.onnx".to_string(),
        labels_path: "/nonexistent/gesture_labels.json".to_string(),
        ..EngineConfig::default()
    };
    assert!(GestureEngine::new(&config).is_err());
}
