// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod http_server;
pub mod predict;
pub mod sentence;

pub use http_server::{router, start_server, AppState};
pub use predict::{predict_handler, PredictResponse, NO_HAND_DETECTED};
pub use sentence::{
    generate_sentence_handler, SentenceRequest, SentenceResponse, NO_GESTURES_ERROR,
};
