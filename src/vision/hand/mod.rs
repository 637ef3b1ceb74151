// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Hand landmark detection and crop geometry

pub mod crop;
pub mod detector;

pub use crop::{crop_hand, BoundingBox, HAND_CROP_PADDING};
pub use detector::{OnnxHandDetector, DETECTOR_INPUT_SIZE};

use anyhow::Result;
use image::DynamicImage;

/// Number of landmarks the hand network predicts.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// One detected hand: 21 landmark points plus the network's presence score.
///
/// Coordinates are normalized to `[0, 1]` relative to the analyzed frame.
/// Points may fall slightly outside that range when the network extrapolates
/// joints beyond the frame edge; box computation clamps them.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: Vec<[f32; 2]>,
    presence: f32,
}

impl LandmarkSet {
    pub fn new(points: Vec<[f32; 2]>, presence: f32) -> Self {
        Self { points, presence }
    }

    /// Normalized landmark coordinates, wrist first.
    pub fn points(&self) -> &[[f32; 2]] {
        &self.points
    }

    /// The network's confidence that a hand is actually present.
    pub fn presence(&self) -> f32 {
        self.presence
    }
}

/// Per-frame hand detection.
///
/// Finding no hand is a normal outcome and yields an empty vector, not an
/// error. Implementations must be safe to share across concurrent requests.
pub trait HandDetector: Send + Sync {
    fn detect(&self, image: &DynamicImage) -> Result<Vec<LandmarkSet>>;
}
