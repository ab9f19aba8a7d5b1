//! Router-level validation tests.
//!
//! Run with: `cargo test -p photostore-api --test validation_test`
//! No external services required: every request here must be rejected
//! (or answered) before the app touches the database or writes a blob.

mod helpers;

use axum::http::StatusCode;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use helpers::{fixtures, setup_test_app};

#[tokio::test]
async fn test_health_reports_running_with_disconnected_db() {
    let app = setup_test_app().await;

    let (status, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["dbConnection"], "disconnected");
    assert!(body["uptime-in-secs"].is_u64());
}

#[tokio::test]
async fn test_upload_with_non_numeric_dimensions_is_rejected_without_side_effects() {
    let app = setup_test_app().await;
    let png = fixtures::create_test_png(400, 300);

    let (status, body) = app
        .post_json(
            "/image",
            serde_json::json!({
                "assetname": "cat",
                "data": BASE64.encode(&png),
                "width": "abc",
                "height": 100,
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Height and width must be valid integers.");
    assert_eq!(body["assetid"], -1);
    assert_eq!(app.stored_file_count(), 0);
}

#[tokio::test]
async fn test_upload_with_missing_dimensions_is_rejected() {
    let app = setup_test_app().await;
    let png = fixtures::create_test_png(40, 30);

    let (status, body) = app
        .post_json(
            "/image",
            serde_json::json!({
                "assetname": "cat",
                "data": BASE64.encode(&png),
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Height and width must be valid integers.");
    assert_eq!(body["assetid"], -1);
    assert_eq!(app.stored_file_count(), 0);
}

#[tokio::test]
async fn test_upload_with_undecodable_image_is_rejected() {
    let app = setup_test_app().await;

    let (status, body) = app
        .post_json(
            "/image",
            serde_json::json!({
                "assetname": "cat",
                "data": BASE64.encode(b"not an image"),
                "width": 100,
                "height": 100,
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Unreadable image data.");
    assert_eq!(body["assetid"], -1);
    assert_eq!(app.stored_file_count(), 0);
}

#[tokio::test]
async fn test_upload_with_invalid_base64_is_rejected() {
    let app = setup_test_app().await;

    let (status, body) = app
        .post_json(
            "/image",
            serde_json::json!({
                "assetname": "cat",
                "data": "%%% not base64 %%%",
                "width": 100,
                "height": 100,
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Image data must be valid base64.");
    assert_eq!(body["assetid"], -1);
    assert_eq!(app.stored_file_count(), 0);
}

#[tokio::test]
async fn test_get_image_with_non_integer_id_is_bad_request() {
    let app = setup_test_app().await;

    let (status, body) = app.get("/image/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid asset ID.");
}

#[tokio::test]
async fn test_image_to_pdf_with_empty_list_is_rejected_before_any_network_call() {
    let app = setup_test_app().await;

    let (status, body) = app
        .post_json(
            "/image-to-pdf",
            serde_json::json!({ "images": [], "pdfName": "x" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "At least one image is required to create a PDF."
    );
    assert_eq!(body["pdfId"], -1);
    assert_eq!(app.stored_file_count(), 0);
}

#[tokio::test]
async fn test_image_to_pdf_with_missing_list_is_rejected() {
    let app = setup_test_app().await;

    let (status, body) = app
        .post_json("/image-to-pdf", serde_json::json!({ "pdfName": "x" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["pdfId"], -1);
}

#[tokio::test]
async fn test_extract_text_without_assetid_is_rejected() {
    let app = setup_test_app().await;

    let (status, body) = app
        .post_json("/extract-text-from-image", serde_json::json!({}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing 'assetid' in request body.");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app().await;

    let (status, body) = app.get("/api/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/image").is_some());
    assert!(body["paths"].get("/image-to-pdf").is_some());
}
