// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo generation endpoint handler

use axum::{extract::State, Json};
use std::time::Instant;
use tracing::{debug, info, warn};

use super::response::{GenerateLogosResponse, GenerationData};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::generation::provider::GenerationJob;
use crate::generation::types::{GenerationStats, LogoGenerationRequest};
use crate::throttle::DEFAULT_CLIENT_ID;

/// POST /api/v1/generate-logos
///
/// Pipeline:
/// 1. Validate the payload
/// 2. Fixed-window throttle check (429 on exhaustion)
/// 3. Call the configured provider
/// 4. Record each logo in the store for later downloads
/// 5. Wrap in the success envelope with generation statistics
pub async fn generate_logos_handler(
    State(state): State<AppState>,
    Json(request): Json<LogoGenerationRequest>,
) -> Result<Json<GenerateLogosResponse>, ApiError> {
    debug!(
        "Generation request received: business='{}', style={}, variations={}",
        request.business_info.name, request.style.style_type, request.variations
    );

    if let Err(failure) = request.validate() {
        warn!(
            "Generation validation failed: {}: {}",
            failure.field, failure.message
        );
        return Err(failure.into());
    }

    let remaining = state
        .throttle
        .check_and_record(DEFAULT_CLIENT_ID)
        .map_err(|retry_after| {
            warn!("Generation request throttled, retry after {}s", retry_after);
            ApiError::RateLimitExceeded { retry_after }
        })?;

    let start = Instant::now();
    let job = GenerationJob::new(request);

    let output = state.provider.generate(&job).await.map_err(|e| {
        warn!("Logo generation failed: {}", e);
        ApiError::from(e)
    })?;

    for (logo, artifact) in output.logos.iter().zip(output.artifacts.iter()) {
        if let Err(e) = state.store.put(&logo.id, &logo.name, artifact).await {
            warn!("Failed to record logo {}: {}", logo.id, e);
        }
    }

    let total_time = start.elapsed().as_secs_f64();
    let total_cost = output.cost_per_image * output.logos.len() as f64;
    let stats = GenerationStats {
        total_time,
        logos_generated: output.logos.len() as u32,
        ai_model: output.model,
        approximate_cost: format!("${:.3}", total_cost),
        real_ai_generated: output.real_ai_generated,
    };

    info!(
        "Generated {} logo(s) for '{}' in {:.2}s (model={}, cost={})",
        stats.logos_generated,
        job.request.business_info.name,
        total_time,
        stats.ai_model,
        stats.approximate_cost
    );

    Ok(Json(GenerateLogosResponse {
        success: true,
        data: GenerationData {
            logos: output.logos,
            generation_stats: stats,
        },
        remaining_requests: remaining,
    }))
}
