// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gesture prediction endpoint handler

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::Multipart;
use tracing::{debug, info, warn};

use super::response::PredictResponse;
use crate::api::http_server::AppState;
use crate::vision::decode_upload;

/// POST /predict/ - Classify the hand gesture in an uploaded image
///
/// Accepts a multipart form upload with the image under the `file` field.
///
/// # Response
/// - `gesture`: the decoded label, or "No hand detected" when no hand (or
///   no usable hand crop) is found in the frame
///
/// # Errors
/// - 400 Bad Request: missing `file` field or undecodable image
/// - 503 Service Unavailable: gesture models not loaded
/// - 500 Internal Server Error: inference failed
pub async fn predict_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PredictResponse>, (StatusCode, String)> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("malformed multipart body: {e}");
        (
            StatusCode::BAD_REQUEST,
            format!("Malformed multipart body: {e}"),
        )
    })? {
        if field.name() == Some("file") {
            let bytes = field.bytes().await.map_err(|e| {
                warn!("failed to read upload: {e}");
                (StatusCode::BAD_REQUEST, format!("Failed to read upload: {e}"))
            })?;
            upload = Some(bytes);
            break;
        }
    }

    let upload = upload.ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            "Multipart field 'file' is required".to_string(),
        )
    })?;

    let image = decode_upload(&upload).map_err(|e| {
        warn!("failed to decode upload: {e}");
        (StatusCode::BAD_REQUEST, format!("Invalid image: {e}"))
    })?;
    debug!(
        "decoded upload: {}x{}, {} bytes",
        image.width(),
        image.height(),
        upload.len()
    );

    let engine = state.engine.as_ref().ok_or_else(|| {
        warn!("gesture models not loaded");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "Gesture models not loaded".to_string(),
        )
    })?;

    let prediction = engine.classify(&image).map_err(|e| {
        warn!("gesture classification failed: {e:#}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Gesture classification failed: {e}"),
        )
    })?;

    let response = match prediction {
        Some(prediction) => {
            info!(
                "gesture classified: {} ({:.2})",
                prediction.label, prediction.confidence
            );
            PredictResponse::gesture(prediction.label)
        }
        None => {
            info!("no hand detected in upload");
            PredictResponse::no_hand()
        }
    };

    Ok(Json(response))
}
