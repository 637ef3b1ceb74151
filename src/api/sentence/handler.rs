// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Sentence composition endpoint handler

use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info, warn};

use super::request::SentenceRequest;
use super::response::SentenceResponse;
use crate::api::http_server::AppState;

/// POST /generate_sentence/ - Compose a sentence from gesture words
///
/// # Request
/// - `gestures`: ordered list of recognized gesture words
///
/// # Response
/// - `{"sentence": ...}` on success; the fixed fallback text when the
///   service returns nothing
/// - `{"error": "No gestures provided."}` for an empty or missing list,
///   still at HTTP 200 and without any external call
///
/// # Errors
/// - 503 Service Unavailable: no API credential configured
/// - 500 Internal Server Error: the external service kept failing
pub async fn generate_sentence_handler(
    State(state): State<AppState>,
    Json(request): Json<SentenceRequest>,
) -> Result<Json<SentenceResponse>, (StatusCode, String)> {
    debug!("sentence request received: {:?}", request.gestures);

    if request.is_empty() {
        warn!("sentence request rejected: no gestures provided");
        return Ok(Json(SentenceResponse::no_gestures()));
    }

    let composer = state.composer.as_ref().ok_or_else(|| {
        warn!("sentence composer not configured");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "Sentence composer not configured".to_string(),
        )
    })?;

    let sentence = composer.compose(&request.gestures).await.map_err(|e| {
        warn!("sentence generation failed: {e:#}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Sentence generation failed: {e}"),
        )
    })?;

    info!("sentence composed for {} gesture(s)", request.gestures.len());
    Ok(Json(SentenceResponse::Sentence { sentence }))
}
