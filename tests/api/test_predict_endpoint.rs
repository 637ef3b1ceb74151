// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Endpoint tests for POST /predict/
//!
//! These run against the full router without model artifacts: they cover
//! upload validation and the service-unavailable path. Anything needing the
//! real ONNX models belongs in an #[ignore]d test with the artifacts staged
//! under ./models.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use gesture_node::api::{router, AppState};
use tower::ServiceExt;

// 1x1 red PNG - minimal valid image
const TINY_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==";

const BOUNDARY: &str = "gesture-node-test-boundary";

fn multipart_body(field: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"hand.png\"\r\nContent-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn predict_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict/")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_predict_rejects_missing_file_field() {
    let app = router(AppState::new_for_test());
    let body = multipart_body("image", b"whatever");

    let response = app.oneshot(predict_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let message = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(message.contains("file"), "unexpected message: {message}");
}

#[tokio::test]
async fn test_predict_rejects_undecodable_upload() {
    let app = router(AppState::new_for_test());
    let body = multipart_body("file", &[0x00, 0x01, 0x02, 0x03, 0x04]);

    let response = app.oneshot(predict_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let message = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(
        message.contains("Invalid image"),
        "unexpected message: {message}"
    );
}

#[tokio::test]
async fn test_predict_rejects_truncated_png() {
    // Valid PNG magic bytes, then nothing.
    let app = router(AppState::new_for_test());
    let body = multipart_body("file", &[0x89, 0x50, 0x4E, 0x47, 0x00, 0x00]);

    let response = app.oneshot(predict_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_predict_without_models_is_service_unavailable() {
    let app = router(AppState::new_for_test());
    let png = STANDARD.decode(TINY_PNG_BASE64).unwrap();
    let body = multipart_body("file", &png);

    let response = app.oneshot(predict_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_predict_requires_multipart_content_type() {
    let app = router(AppState::new_for_test());
    let request = Request::builder()
        .method("POST")
        .uri("/predict/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
