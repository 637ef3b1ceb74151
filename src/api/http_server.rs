// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server wiring for the gesture node

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::{
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::predict::predict_handler;
use crate::api::sentence::generate_sentence_handler;
use crate::llm::GeminiClient;
use crate::vision::{GestureEngine, MAX_UPLOAD_BYTES};

/// Process-wide read-only state handed to every request handler.
///
/// Built once at startup; nothing in it mutates afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Loaded gesture pipeline; `None` when the model artifacts are missing.
    pub engine: Option<Arc<GestureEngine>>,
    /// Sentence composer; `None` when no API credential is configured.
    pub composer: Option<Arc<GeminiClient>>,
}

impl AppState {
    pub fn new(engine: Option<Arc<GestureEngine>>, composer: Option<Arc<GeminiClient>>) -> Self {
        Self { engine, composer }
    }

    /// Empty state for handler tests.
    pub fn new_for_test() -> Self {
        Self {
            engine: None,
            composer: None,
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Gesture prediction from an image upload
        .route("/predict/", post(predict_handler))
        // Sentence composition from gesture words
        .route("/generate_sentence/", post(generate_sentence_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::response::Json(json!({
        "status": "ok",
        "version": crate::version::VERSION,
        "models_loaded": state.engine.is_some(),
        "composer_configured": state.composer.is_some(),
    }))
}
