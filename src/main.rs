// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use gesture_node::{
    api::{start_server, AppState},
    config::NodeConfig,
    llm::GeminiClient,
    vision::GestureEngine,
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting Gesture Inference Node...\n");
    println!("📦 BUILD VERSION: {}", gesture_node::version::VERSION);
    println!("📅 Build Date: {}", gesture_node::version::BUILD_DATE);
    println!();

    let config = NodeConfig::from_env();

    let engine = match GestureEngine::new(&config.engine) {
        Ok(engine) => {
            tracing::info!("✅ Gesture models loaded ({} labels)", engine.labels().len());
            Some(Arc::new(engine))
        }
        Err(e) => {
            tracing::warn!("⚠️ Failed to load gesture models: {e:#}");
            tracing::warn!("   /predict/ will answer 503 until the model artifacts are provided");
            None
        }
    };

    let composer = match config.gemini_api_key.as_deref() {
        Some(key) => match GeminiClient::new(&config.gemini_endpoint, &config.gemini_model, key) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::warn!("⚠️ Failed to build Gemini client: {e:#}");
                None
            }
        },
        None => {
            tracing::warn!("⚠️ GEMINI_API_KEY not set; /generate_sentence/ will answer 503");
            None
        }
    };

    let state = AppState::new(engine, composer);
    start_server(state, config.bind_addr).await
}
