// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for the small status surface: root probe, health, stubbed
//! history, statistics, and progress WebSocket route registration

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use logoai_node::api::{build_router, AppState};

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_root_probe_reports_healthy() {
    let router = build_router(AppState::new_for_test());
    let response = router.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["provider"], "template-svg-v1");
    assert!(json["version"].as_str().is_some());
    assert!(json["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_health_endpoint_lists_features() {
    let router = build_router(AppState::new_for_test());
    let response = router.oneshot(get("/api/v1/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
    let features = json["features"].as_array().unwrap();
    assert!(features.iter().any(|f| f == "template-svg-generation"));
    assert!(json["cache_entries"].as_u64().is_some());
}

#[tokio::test]
async fn test_user_logos_is_a_stubbed_empty_list() {
    let router = build_router(AppState::new_for_test());
    let response = router.oneshot(get("/api/v1/user/logos")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["logos"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["total_count"], 0);
}

#[tokio::test]
async fn test_statistics_returns_fixed_numbers() {
    let router = build_router(AppState::new_for_test());
    let response = router.oneshot(get("/api/v1/statistics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["total_logos_generated"], 15_847);
    assert!(json["data"]["popular_styles"]["modern"].as_u64().is_some());
}

#[tokio::test]
async fn test_progress_websocket_route_is_registered() {
    let router = build_router(AppState::new_for_test());
    // A plain GET is not a valid upgrade, but the route must exist
    let response = router.oneshot(get("/ws/generation-progress")).await.unwrap();
    assert_ne!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let router = build_router(AppState::new_for_test());
    let response = router.oneshot(get("/api/v1/does-not-exist")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
