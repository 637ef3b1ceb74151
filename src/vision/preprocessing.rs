// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image-to-tensor preparation for the gesture models

use image::{imageops::FilterType, DynamicImage};
use ndarray::Array4;

/// Input resolution of the gesture classifier.
pub const CLASSIFIER_INPUT_SIZE: u32 = 128;

/// Resize `image` to `size`x`size` and scale its RGB bytes into a
/// `[1, size, size, 3]` batch tensor of 0..1 floats.
///
/// Steps:
/// 1. Exact resize to the target square (bilinear, consistent with how the
///    training crops were resized)
/// 2. Convert to RGB
/// 3. Scale pixel values: pixel / 255.0
/// 4. NHWC layout, batch dimension of 1
pub fn to_unit_tensor(image: &DynamicImage, size: u32) -> Array4<f32> {
    let resized = image.resize_exact(size, size, FilterType::Triangle);
    let rgb = resized.to_rgb8();

    let side = size as usize;
    let mut tensor = Array4::zeros((1, side, side, 3));

    for y in 0..side {
        for x in 0..side {
            let pixel = rgb.get_pixel(x as u32, y as u32);
            for c in 0..3 {
                tensor[[0, y, x, c]] = pixel[c] as f32 / 255.0;
            }
        }
    }

    tensor
}

/// Prepare a cropped hand region for classification.
pub fn preprocess_hand_crop(image: &DynamicImage) -> Array4<f32> {
    to_unit_tensor(image, CLASSIFIER_INPUT_SIZE)
}
