// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gesture prediction endpoint

pub mod handler;
pub mod response;

pub use handler::predict_handler;
pub use response::{PredictResponse, NO_HAND_DETECTED};
