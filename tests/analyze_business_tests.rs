// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for POST /api/v1/analyze-business

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use logoai_node::api::{build_router, AppState};

fn post_analyze(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/analyze-business")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_analysis_returns_recommendation() {
    let router = build_router(AppState::new_for_test());
    let response = router
        .oneshot(post_analyze(serde_json::json!({
            "name": "Digital Software App Studio",
            "industry": "Technology",
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["cached"], false);
    assert_eq!(json["data"]["recommended_style"], "modern");
    assert_eq!(json["data"]["recommended_colors"][0], "#007acc");
    assert!(json["data"]["confidence"].as_f64().unwrap() > 0.5);
}

#[tokio::test]
async fn test_second_call_is_cached() {
    let router = build_router(AppState::new_for_test());
    let body = serde_json::json!({ "name": "Acme", "industry": "Finance" });

    let first = json_body(
        router
            .clone()
            .oneshot(post_analyze(body.clone()))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(first["cached"], false);

    let second = json_body(router.oneshot(post_analyze(body)).await.unwrap()).await;
    assert_eq!(second["cached"], true);
    assert_eq!(
        first["data"]["recommended_style"],
        second["data"]["recommended_style"]
    );
}

#[tokio::test]
async fn test_invalid_business_rejected() {
    let router = build_router(AppState::new_for_test());
    let response = router
        .oneshot(post_analyze(serde_json::json!({
            "name": "A",
            "industry": "Technology",
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error_type"], "validation_error");
}

#[tokio::test]
async fn test_keywords_drive_style() {
    let router = build_router(AppState::new_for_test());
    let response = router
        .oneshot(post_analyze(serde_json::json!({
            "name": "Heritage Craft Workshop",
            "industry": "Creative",
            "description": "artisan goods made with traditional methods",
        })))
        .await
        .unwrap();
    let json = json_body(response).await;
    assert_eq!(json["data"]["recommended_style"], "vintage");
}
