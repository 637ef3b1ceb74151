// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Sentence composition response types

use serde::{Deserialize, Serialize};

/// Error payload text for an empty word list.
pub const NO_GESTURES_ERROR: &str = "No gestures provided.";

/// Response body for sentence composition.
///
/// The empty-input case is a structured payload at HTTP 200, which is what
/// existing callers of the endpoint expect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SentenceResponse {
    Sentence { sentence: String },
    Error { error: String },
}

impl SentenceResponse {
    pub fn sentence(sentence: impl Into<String>) -> Self {
        Self::Sentence {
            sentence: sentence.into(),
        }
    }

    pub fn no_gestures() -> Self {
        Self::Error {
            error: NO_GESTURES_ERROR.to_string(),
        }
    }
}
