// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for POST /api/v1/feedback

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use logoai_node::api::{build_router, AppState};

fn post_feedback(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/feedback")
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
async fn test_feedback_is_acknowledged() {
    let router = build_router(AppState::new_for_test());
    let response = router
        .oneshot(post_feedback(serde_json::json!({
            "logo_id": "abc_1",
            "rating": 4,
            "feedback_text": "clean lines, good colors",
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["feedback"]["logo_id"], "abc_1");
    assert_eq!(json["feedback"]["rating"], 4);
    assert_eq!(json["feedback"]["feedback_text"], "clean lines, good colors");
}

#[tokio::test]
async fn test_feedback_text_is_optional() {
    let router = build_router(AppState::new_for_test());
    let response = router
        .oneshot(post_feedback(serde_json::json!({
            "logo_id": "abc_1",
            "rating": 5,
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_rating_out_of_range_is_rejected() {
    let router = build_router(AppState::new_for_test());
    for rating in [0, 6] {
        let response = router
            .clone()
            .oneshot(post_feedback(serde_json::json!({
                "logo_id": "abc_1",
                "rating": rating,
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "rating {}", rating);
        let json = json_body(response).await;
        assert_eq!(json["error_type"], "validation_error");
        assert_eq!(json["details"]["field"], "rating");
    }
}

#[tokio::test]
async fn test_empty_logo_id_is_rejected() {
    let router = build_router(AppState::new_for_test());
    let response = router
        .oneshot(post_feedback(serde_json::json!({
            "logo_id": "  ",
            "rating": 3,
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["details"]["field"], "logo_id");
}

#[tokio::test]
async fn test_feedback_lands_in_the_cache() {
    let state = AppState::new_for_test();
    let router = build_router(state.clone());

    router
        .oneshot(post_feedback(serde_json::json!({
            "logo_id": "abc_9",
            "rating": 2,
        })))
        .await
        .unwrap();

    let stored: serde_json::Value = state.cache.get_json("feedback:abc_9").await.unwrap();
    assert_eq!(stored["rating"], 2);
}
