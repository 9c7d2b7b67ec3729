// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Business analysis endpoint with name-keyed result caching

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::time::Duration;
use tracing::{debug, warn};

use super::errors::ApiError;
use super::http_server::AppState;
use crate::analyzer::BusinessAnalysis;
use crate::generation::types::BusinessInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub data: BusinessAnalysis,
    pub cached: bool,
}

/// Cache key derived from the business name only; the same name always
/// maps to the same analysis within the TTL.
fn cache_key(business_name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(business_name.trim().to_lowercase().as_bytes());
    let digest = hasher.finalize();
    format!("analysis:{}", hex::encode(&digest[..8]))
}

/// POST /api/v1/analyze-business
pub async fn analyze_business_handler(
    State(state): State<AppState>,
    Json(business): Json<BusinessInfo>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    business.validate().map_err(ApiError::from)?;

    let key = cache_key(&business.name);
    if let Some(analysis) = state.cache.get_json::<BusinessAnalysis>(&key).await {
        debug!("Analysis cache hit for '{}'", business.name);
        return Ok(Json(AnalyzeResponse {
            success: true,
            data: analysis,
            cached: true,
        }));
    }

    let analysis = state.analyzer.analyze(&business);
    let ttl = Duration::from_secs(state.config.cache.analysis_ttl_secs);
    if let Err(e) = state.cache.set_json(&key, &analysis, ttl).await {
        warn!("Failed to cache analysis for '{}': {}", business.name, e);
    }

    Ok(Json(AnalyzeResponse {
        success: true,
        data: analysis,
        cached: false,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_normalizes_name() {
        assert_eq!(cache_key("Acme"), cache_key("  acme "));
        assert_ne!(cache_key("Acme"), cache_key("Acme Corp"));
    }

    #[test]
    fn test_cache_key_shape() {
        let key = cache_key("Acme");
        assert!(key.starts_with("analysis:"));
        assert_eq!(key.len(), "analysis:".len() + 16);
    }
}
