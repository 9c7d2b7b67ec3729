// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo feedback endpoint: validates and records a rating, nothing more

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

use super::errors::ApiError;
use super::http_server::AppState;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoFeedback {
    pub logo_id: String,
    pub rating: u8,
    #[serde(default)]
    pub feedback_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFeedback {
    pub logo_id: String,
    pub rating: u8,
    pub feedback_text: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub success: bool,
    pub message: String,
    pub feedback: StoredFeedback,
}

/// POST /api/v1/feedback
pub async fn feedback_handler(
    State(state): State<AppState>,
    Json(feedback): Json<LogoFeedback>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    if feedback.logo_id.trim().is_empty() {
        return Err(ApiError::ValidationError {
            field: "logo_id".to_string(),
            message: "logo_id is required".to_string(),
        });
    }
    if feedback.rating < MIN_RATING || feedback.rating > MAX_RATING {
        return Err(ApiError::ValidationError {
            field: "rating".to_string(),
            message: format!(
                "rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            ),
        });
    }

    let stored = StoredFeedback {
        logo_id: feedback.logo_id.clone(),
        rating: feedback.rating,
        feedback_text: feedback.feedback_text,
        timestamp: Utc::now(),
    };

    let key = format!("feedback:{}", feedback.logo_id);
    let ttl = Duration::from_secs(state.config.cache.feedback_ttl_secs);
    if let Err(e) = state.cache.set_json(&key, &stored, ttl).await {
        warn!("Failed to store feedback for {}: {}", feedback.logo_id, e);
    }

    info!(
        "Feedback for {}: rating {}/{}",
        stored.logo_id, stored.rating, MAX_RATING
    );

    Ok(Json(FeedbackResponse {
        success: true,
        message: "Feedback recorded successfully".to_string(),
        feedback: stored,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_deserialization() {
        let json = r#"{"logo_id": "abc_1", "rating": 4}"#;
        let feedback: LogoFeedback = serde_json::from_str(json).unwrap();
        assert_eq!(feedback.logo_id, "abc_1");
        assert_eq!(feedback.rating, 4);
        assert!(feedback.feedback_text.is_none());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(MIN_RATING <= MAX_RATING);
        assert_eq!(MIN_RATING, 1);
        assert_eq!(MAX_RATING, 5);
    }
}
