// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for GET /api/v1/logo/:id/download/:format

use axum::body::Body;
use axum::http::{Request, StatusCode};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use tower::ServiceExt;

use logoai_node::api::{build_router, AppState};
use logoai_node::generation::store::LogoArtifact;

fn get_download(logo_id: &str, format: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/v1/logo/{}/download/{}", logo_id, format))
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn sample_png() -> Vec<u8> {
    let img = RgbaImage::from_pixel(8, 8, Rgba([30, 60, 90, 255]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let router = build_router(AppState::new_for_test());
    let response = router
        .oneshot(get_download("no-such-logo", "png"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response).await;
    assert_eq!(json["error_type"], "not_found");
    assert!(json["message"].as_str().unwrap().contains("no-such-logo"));
}

#[tokio::test]
async fn test_unknown_format_is_rejected() {
    let state = AppState::new_for_test();
    state
        .store
        .put("abc_1", "Acme", &LogoArtifact::Svg("<svg/>".to_string()))
        .await
        .unwrap();
    let router = build_router(state);

    let response = router.oneshot(get_download("abc_1", "webp")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error_type"], "invalid_request");
}

#[tokio::test]
async fn test_svg_artifact_downloads_as_svg() {
    let state = AppState::new_for_test();
    state
        .store
        .put(
            "abc_1",
            "Acme - Concept 1",
            &LogoArtifact::Svg("<svg xmlns=\"http://www.w3.org/2000/svg\"/>".to_string()),
        )
        .await
        .unwrap();
    let router = build_router(state);

    let response = router.oneshot(get_download("abc_1", "svg")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "image/svg+xml");
    assert!(response.headers()["content-disposition"]
        .to_str()
        .unwrap()
        .contains("abc_1.svg"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.starts_with(b"<svg"));
}

#[tokio::test]
async fn test_svg_artifact_has_no_raster_form() {
    let state = AppState::new_for_test();
    state
        .store
        .put("abc_1", "Acme", &LogoArtifact::Svg("<svg/>".to_string()))
        .await
        .unwrap();
    let router = build_router(state);

    for format in ["png", "jpg"] {
        let response = router
            .clone()
            .oneshot(get_download("abc_1", format))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "format {}", format);
    }
}

#[tokio::test]
async fn test_stored_png_served_directly() {
    let png = sample_png();
    let state = AppState::new_for_test();
    state
        .store
        .put("img_1", "Acme", &LogoArtifact::Png(png.clone()))
        .await
        .unwrap();
    let router = build_router(state);

    let response = router.oneshot(get_download("img_1", "png")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "image/png");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(bytes.to_vec(), png);
}

#[tokio::test]
async fn test_stored_png_transcodes_to_jpeg() {
    let state = AppState::new_for_test();
    state
        .store
        .put("img_1", "Acme", &LogoArtifact::Png(sample_png()))
        .await
        .unwrap();
    let router = build_router(state);

    let response = router.oneshot(get_download("img_1", "jpg")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "image/jpeg");

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.width(), 8);
}

#[tokio::test]
async fn test_png_has_no_svg_form() {
    let state = AppState::new_for_test();
    state
        .store
        .put("img_1", "Acme", &LogoArtifact::Png(sample_png()))
        .await
        .unwrap();
    let router = build_router(state);

    let response = router.oneshot(get_download("img_1", "svg")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
