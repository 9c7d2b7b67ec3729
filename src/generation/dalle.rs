// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OpenAI DALL-E client for logo generation via the images API

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::prompt::build_prompts;
use super::provider::{GenerationJob, LogoProvider, ProviderError, ProviderOutput};
use super::store::LogoArtifact;
use super::types::{GeneratedLogo, LogoImage, StyleInfo};

pub const DEFAULT_DALLE_MODEL: &str = "dall-e-3";
pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com";

/// Standard-quality 1024x1024 image price
const DALLE_COST_PER_IMAGE: f64 = 0.04;

const IMAGE_SIZE: &str = "1024x1024";

/// Prompt colors are echoed back as the logo's color list
const REPORTED_COLORS: usize = 2;

#[derive(Debug, Deserialize)]
struct OpenAiImageResponse {
    data: Vec<OpenAiImageData>,
}

#[derive(Debug, Deserialize)]
struct OpenAiImageData {
    url: Option<String>,
    revised_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
}

/// Client for the OpenAI images endpoint. DALL-E 3 returns a single image
/// per call, so each variation is its own request.
pub struct DalleClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model_name: String,
}

impl DalleClient {
    pub fn new(endpoint: &str, api_key: &str, model_name: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!(
            "DALL-E client configured: endpoint={}, model={}",
            endpoint, model_name
        );

        Ok(Self {
            client,
            endpoint,
            api_key,
            model_name: model_name.to_string(),
        })
    }

    async fn generate_one(&self, prompt: &str) -> Result<OpenAiImageData, ProviderError> {
        let url = format!("{}/v1/images/generations", self.endpoint);
        debug!("DALL-E generate POST {}", url);

        let body = serde_json::json!({
            "model": self.model_name,
            "prompt": prompt,
            "n": 1,
            "size": IMAGE_SIZE,
            "response_format": "url",
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OpenAiErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or(text);
            return Err(ProviderError::from_status(status, message));
        }

        let api_response: OpenAiImageResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::UnexpectedResponse(e.to_string()))?;

        api_response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::UnexpectedResponse("empty image list".to_string()))
    }
}

#[async_trait]
impl LogoProvider for DalleClient {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn generate(&self, job: &GenerationJob) -> Result<ProviderOutput, ProviderError> {
        let request = &job.request;
        if let Some(ref model) = request.model {
            if model != &self.model_name {
                return Err(ProviderError::UnsupportedModel(model.clone()));
            }
        }

        let start = Instant::now();
        let prompts = build_prompts(&request.business_info, &request.style, request.variations);

        let mut logos = Vec::with_capacity(prompts.len());
        let mut artifacts = Vec::with_capacity(prompts.len());
        for (i, prompt) in prompts.iter().enumerate() {
            let variation = (i + 1) as u32;
            debug!(
                "Generating DALL-E logo {}/{} for '{}'",
                variation,
                prompts.len(),
                request.business_info.name
            );

            let data = self.generate_one(prompt).await?;
            let image_url = data.url.ok_or_else(|| {
                ProviderError::UnexpectedResponse("no url in image data".to_string())
            })?;

            artifacts.push(LogoArtifact::RemoteUrl(image_url.clone()));
            logos.push(GeneratedLogo {
                id: job.logo_id(variation),
                name: format!(
                    "{} Logo (DALL-E {})",
                    request.business_info.name, variation
                ),
                image: LogoImage::Remote { image_url },
                style_info: StyleInfo {
                    style: request.style.style_type.clone(),
                    variation,
                    ai_model: self.model_name.clone(),
                    industry: request.business_info.industry.clone(),
                    generation_method: "OpenAI DALL-E generation".to_string(),
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
                prompt_used: Some(data.revised_prompt.unwrap_or_else(|| prompt.clone())),
            });
        }

        info!(
            "Generated {} DALL-E logo(s) for '{}' in {:.1}s",
            logos.len(),
            request.business_info.name,
            start.elapsed().as_secs_f64()
        );

        Ok(ProviderOutput {
            logos,
            artifacts,
            model: self.model_name.clone(),
            cost_per_image: DALLE_COST_PER_IMAGE,
            real_ai_generated: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::test_request;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = DalleClient::new("https://api.openai.com/", "sk-test", DEFAULT_DALLE_MODEL)
            .unwrap();
        assert_eq!(client.endpoint, "https://api.openai.com");
        assert_eq!(client.model_name(), "dall-e-3");
    }

    #[tokio::test]
    async fn test_foreign_model_rejected_before_any_call() {
        let client =
            DalleClient::new("http://127.0.0.1:1", "sk-test", DEFAULT_DALLE_MODEL).unwrap();
        let mut request = test_request();
        request.model = Some("imagegeneration@006".to_string());
        let job = GenerationJob::new(request);
        let result = client.generate(&job).await;
        assert!(matches!(result, Err(ProviderError::UnsupportedModel(_))));
    }

    #[test]
    fn test_error_body_message_extracted() {
        let body = r#"{"error": {"message": "Billing hard limit has been reached", "type": "insufficient_quota"}}"#;
        let parsed: OpenAiErrorBody = serde_json::from_str(body).unwrap();
        assert!(parsed.error.message.contains("Billing"));
    }
}
