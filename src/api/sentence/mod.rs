// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Sentence composition endpoint

pub mod handler;
pub mod request;
pub mod response;

pub use handler::generate_sentence_handler;
pub use request::SentenceRequest;
pub use response::{SentenceResponse, NO_GESTURES_ERROR};
