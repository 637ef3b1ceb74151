// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gesture prediction response types

use serde::{Deserialize, Serialize};

/// Sentinel returned when no hand (or no usable hand crop) is found.
pub const NO_HAND_DETECTED: &str = "No hand detected";

/// Response body for gesture prediction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictResponse {
    /// Decoded gesture label, or the "No hand detected" sentinel.
    pub gesture: String,
}

impl PredictResponse {
    pub fn gesture(label: impl Into<String>) -> Self {
        Self {
            gesture: label.into(),
        }
    }

    pub fn no_hand() -> Self {
        Self {
            gesture: NO_HAND_DETECTED.to_string(),
        }
    }
}
