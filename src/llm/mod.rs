// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Sentence composition via an external generative text service

pub mod gemini;

pub use gemini::{GeminiClient, DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL, FALLBACK_SENTENCE};
