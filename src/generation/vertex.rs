// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Google Vertex AI Imagen client (`:predict` endpoint)

use anyhow::Result;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::prompt::build_prompts;
use super::provider::{GenerationJob, LogoProvider, ProviderError, ProviderOutput};
use super::store::LogoArtifact;
use super::types::{GeneratedLogo, LogoImage, StyleInfo};

pub const DEFAULT_VERTEX_MODEL: &str = "imagegeneration@006";
pub const DEFAULT_VERTEX_LOCATION: &str = "us-central1";

/// Supported Imagen models and their per-image cost
const VERTEX_MODELS: &[(&str, f64)] = &[
    ("imagegeneration@006", 0.03),
    ("imagegeneration@005", 0.025),
];

const REPORTED_COLORS: usize = 2;

/// Per-image cost for a supported model, or None if the model is unknown
pub fn model_cost(model: &str) -> Option<f64> {
    VERTEX_MODELS
        .iter()
        .find(|(m, _)| *m == model)
        .map(|(_, cost)| *cost)
}

#[derive(Debug, Deserialize)]
struct VertexPredictResponse {
    #[serde(default)]
    predictions: Vec<VertexPrediction>,
}

#[derive(Debug, Deserialize)]
struct VertexPrediction {
    #[serde(rename = "bytesBase64Encoded")]
    bytes_base64_encoded: Option<String>,
}

/// Client for Vertex AI Imagen. The access token is minted externally
/// (service account or gcloud ADC) and supplied via configuration.
pub struct VertexImagenClient {
    client: Client,
    endpoint_base: String,
    project: String,
    location: String,
    access_token: String,
    model_name: String,
}

impl VertexImagenClient {
    pub fn new(
        project: &str,
        location: &str,
        access_token: &str,
        model_name: &str,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        let endpoint_base = format!("https://{}-aiplatform.googleapis.com", location);
        info!(
            "Vertex Imagen client configured: project={}, location={}, model={}",
            project, location, model_name
        );

        Ok(Self {
            client,
            endpoint_base,
            project,
            location: location.to_string(),
            access_token: access_token.to_string(),
            model_name: model_name.to_string(),
        })
    }

    /// Override the endpoint base (for tests against a local server)
    pub fn with_endpoint_base(mut self, endpoint_base: &str) -> Self {
        self.endpoint_base = endpoint_base.trim_end_matches('/').to_string();
        self
    }

    fn predict_url(&self, model: &str) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:predict",
            self.endpoint_base, self.project, self.location, model
        )
    }

    async fn predict(&self, prompt: &str, model: &str) -> Result<Vec<u8>, ProviderError> {
        let url = self.predict_url(model);
        debug!("Vertex Imagen POST {}", url);

        let body = serde_json::json!({
            "instances": [{ "prompt": prompt }],
            "parameters": {
                "sampleCount": 1,
                "aspectRatio": "1:1",
                "safetyFilterLevel": "block_some",
                "personGeneration": "dont_allow",
            }
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status, text));
        }

        let api_response: VertexPredictResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::UnexpectedResponse(e.to_string()))?;

        let prediction = api_response.predictions.into_iter().next().ok_or_else(|| {
            ProviderError::UnexpectedResponse("no predictions in response".to_string())
        })?;

        let encoded = prediction.bytes_base64_encoded.ok_or_else(|| {
            ProviderError::UnexpectedResponse("no bytesBase64Encoded in prediction".to_string())
        })?;

        BASE64
            .decode(encoded)
            .map_err(|e| ProviderError::UnexpectedResponse(format!("invalid image payload: {}", e)))
    }
}

#[async_trait]
impl LogoProvider for VertexImagenClient {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn generate(&self, job: &GenerationJob) -> Result<ProviderOutput, ProviderError> {
        let request = &job.request;
        let model = request.model.as_deref().unwrap_or(&self.model_name);
        let cost_per_image =
            model_cost(model).ok_or_else(|| ProviderError::UnsupportedModel(model.to_string()))?;

        let start = Instant::now();
        let prompts = build_prompts(&request.business_info, &request.style, request.variations);

        let mut logos = Vec::with_capacity(prompts.len());
        let mut artifacts = Vec::with_capacity(prompts.len());
        for (i, prompt) in prompts.iter().enumerate() {
            let variation = (i + 1) as u32;
            debug!(
                "Generating Imagen logo {}/{} for '{}'",
                variation,
                prompts.len(),
                request.business_info.name
            );

            let png = self.predict(prompt, model).await?;
            let id = job.logo_id(variation);

            // The PNG lives in the logo store; the URL points back at our
            // own download route.
            artifacts.push(LogoArtifact::Png(png));
            logos.push(GeneratedLogo {
                id: id.clone(),
                name: format!(
                    "{} Logo (Imagen {})",
                    request.business_info.name, variation
                ),
                image: LogoImage::Remote {
                    image_url: format!("/api/v1/logo/{}/download/png", id),
                },
                style_info: StyleInfo {
                    style: request.style.style_type.clone(),
                    variation,
                    ai_model: format!("Google Vertex AI {}", model),
                    industry: request.business_info.industry.clone(),
                    generation_method: "Vertex AI Imagen generation".to_string(),
                },
                colors_used: request
                    .style
                    .color_palette
                    .iter()
                    .take(REPORTED_COLORS)
                    .cloned()
                    .collect(),
                generation_time: start.elapsed().as_secs_f64(),
                confidence_score: 0.95,
                prompt_used: Some(prompt.clone()),
            });
        }

        info!(
            "Generated {} Imagen logo(s) for '{}' in {:.1}s",
            logos.len(),
            request.business_info.name,
            start.elapsed().as_secs_f64()
        );

        Ok(ProviderOutput {
            logos,
            artifacts,
            model: format!("Google Vertex AI {}", model),
            cost_per_image,
            real_ai_generated: true,
        })
    }
}
