// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod llm;
pub mod version;
pub mod vision;

// Re-export the types most callers need
pub use api::{router, start_server, AppState};
pub use config::NodeConfig;
pub use llm::{GeminiClient, FALLBACK_SENTENCE};
pub use vision::{EngineConfig, GestureEngine, GesturePrediction, LabelSet};
