// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gesture vision pipeline: hand detection, cropping, classification
//!
//! All models run on CPU via ONNX Runtime and are loaded once at startup.

pub mod classifier;
pub mod engine;
pub mod hand;
pub mod image_utils;
pub mod preprocessing;

pub use classifier::{argmax, ClassifierModel, LabelSet, OnnxClassifier};
pub use engine::{EngineConfig, GestureEngine, GesturePrediction};
pub use hand::{crop_hand, BoundingBox, HandDetector, LandmarkSet, OnnxHandDetector};
pub use image_utils::{decode_upload, sniff_format, UploadError, MAX_UPLOAD_BYTES};
pub use preprocessing::{preprocess_hand_crop, to_unit_tensor, CLASSIFIER_INPUT_SIZE};
