// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Sentence composition request types

use serde::{Deserialize, Serialize};

/// Request body for sentence composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceRequest {
    /// Recognized gesture words, in the order they were signed.
    #[serde(default)]
    pub gestures: Vec<String>,
}

impl SentenceRequest {
    /// A request with no words cannot be composed.
    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }
}
