// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Bounding-box extraction around detected hand landmarks

use image::DynamicImage;

use super::LandmarkSet;

/// Padding applied outward around the landmark extent, in pixels.
pub const HAND_CROP_PADDING: u32 = 20;

/// Axis-aligned pixel-space box around a set of landmarks.
///
/// `x_max`/`y_max` are exclusive. The box is clamped to the image at
/// construction, so `x_min <= x_max <= width` and `y_min <= y_max <= height`
/// always hold; a box may still be empty when every landmark sits outside
/// the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x_min: u32,
    pub y_min: u32,
    pub x_max: u32,
    pub y_max: u32,
}

impl BoundingBox {
    /// Compute the padded, clamped box around `landmarks` for an image of
    /// the given dimensions.
    pub fn around_landmarks(
        landmarks: &LandmarkSet,
        width: u32,
        height: u32,
        padding: u32,
    ) -> Self {
        if landmarks.points().is_empty() {
            return Self {
                x_min: 0,
                y_min: 0,
                x_max: 0,
                y_max: 0,
            };
        }

        let mut x_min = i64::from(width);
        let mut y_min = i64::from(height);
        let mut x_max: i64 = 0;
        let mut y_max: i64 = 0;

        for point in landmarks.points() {
            let x = (point[0] * width as f32) as i64;
            let y = (point[1] * height as f32) as i64;
            x_min = x_min.min(x);
            y_min = y_min.min(y);
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }

        let padding = i64::from(padding);
        Self {
            x_min: (x_min - padding).clamp(0, i64::from(width)) as u32,
            y_min: (y_min - padding).clamp(0, i64::from(height)) as u32,
            x_max: (x_max + padding).clamp(0, i64::from(width)) as u32,
            y_max: (y_max + padding).clamp(0, i64::from(height)) as u32,
        }
    }

    pub fn width(&self) -> u32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> u32 {
        self.y_max - self.y_min
    }

    /// A box with zero width or height cannot produce a crop.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Extract the padded hand region from `image`.
///
/// Returns `None` when the clamped box is degenerate, which callers treat
/// the same as not having found a hand at all.
pub fn crop_hand(image: &DynamicImage, landmarks: &LandmarkSet) -> Option<DynamicImage> {
    let bbox = BoundingBox::around_landmarks(
        landmarks,
        image.width(),
        image.height(),
        HAND_CROP_PADDING,
    );
    if bbox.is_empty() {
        return None;
    }

    Some(image.crop_imm(bbox.x_min, bbox.y_min, bbox.width(), bbox.height()))
}
