// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Environment-driven node configuration

use std::env;
use std::net::SocketAddr;

use crate::llm::gemini::{DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL};
use crate::vision::EngineConfig;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// Gesture model configuration
    pub engine: EngineConfig,
    /// Base endpoint of the generative language API
    pub gemini_endpoint: String,
    /// Model used for sentence composition
    pub gemini_model: String,
    /// API credential; sentence composition is disabled when unset
    pub gemini_api_key: Option<String>,
}

impl NodeConfig {
    /// Build the configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8000);
        let bind_addr = format!("{host}:{port}")
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], port)));

        let defaults = EngineConfig::default();
        let engine = EngineConfig {
            hand_model_path: env::var("HAND_MODEL_PATH").unwrap_or(defaults.hand_model_path),
            classifier_model_path: env::var("GESTURE_MODEL_PATH")
                .unwrap_or(defaults.classifier_model_path),
            labels_path: env::var("GESTURE_LABELS_PATH").unwrap_or(defaults.labels_path),
            min_detection_confidence: env::var("MIN_DETECTION_CONFIDENCE")
                .ok()
                .and_then(|v| v.parse::<f32>().ok())
                .unwrap_or(defaults.min_detection_confidence),
            max_hands: env::var("MAX_HANDS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(defaults.max_hands),
        };

        Self {
            bind_addr,
            engine,
            gemini_endpoint: env::var("GEMINI_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_GEMINI_ENDPOINT.to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty()),
        }
    }
}
