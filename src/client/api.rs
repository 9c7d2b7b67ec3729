// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP client for the LogoAI node API. One call per user action; no
//! retries here (the session layer owns recovery policy).

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::api::analyze::AnalyzeResponse;
use crate::api::errors::ErrorResponse;
use crate::api::feedback::LogoFeedback;
use crate::api::generate_logos::GenerateLogosResponse;
use crate::generation::types::{BusinessInfo, LogoGenerationRequest};

#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx reply; the display form leads with the status code so the
    /// session's substring classifier can see it
    #[error("{status} {message}")]
    Http { status: u16, message: String },

    /// Transport failure; phrased like the browser's fetch error
    #[error("Failed to fetch: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid base url '{0}'")]
    BaseUrl(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Status payload from GET /
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
    pub version: String,
    pub status: String,
    pub provider: String,
    pub timestamp: String,
}

impl ServiceStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Client SDK for the node's HTTP surface
pub struct LogoClient {
    http: Client,
    base_url: Url,
}

impl LogoClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ClientError::BaseUrl(base_url.to_string()))?;
        let http = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;
        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|_| ClientError::BaseUrl(path.to_string()))
    }

    /// Turn a non-2xx reply into [`ClientError::Http`], pulling the message
    /// out of the standard error body when possible
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|body| body.message)
            .unwrap_or(text);
        Err(ClientError::Http {
            status: status.as_u16(),
            message,
        })
    }

    /// GET / — used to toggle the connected indicator
    pub async fn health(&self) -> Result<ServiceStatus, ClientError> {
        let response = self.http.get(self.url("/")?).send().await?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// POST /api/v1/analyze-business
    pub async fn analyze_business(
        &self,
        business: &BusinessInfo,
    ) -> Result<AnalyzeResponse, ClientError> {
        let response = self
            .http
            .post(self.url("/api/v1/analyze-business")?)
            .json(business)
            .send()
            .await?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// POST /api/v1/generate-logos — the single generation call
    pub async fn generate_logos(
        &self,
        request: &LogoGenerationRequest,
    ) -> Result<GenerateLogosResponse, ClientError> {
        debug!(
            "Submitting generation request for '{}'",
            request.business_info.name
        );
        let response = self
            .http
            .post(self.url("/api/v1/generate-logos")?)
            .json(request)
            .send()
            .await?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// GET /api/v1/logo/{id}/download/{format}
    pub async fn download_logo(&self, logo_id: &str, format: &str) -> Result<Vec<u8>, ClientError> {
        let path = format!("/api/v1/logo/{}/download/{}", logo_id, format);
        let response = self.http.get(self.url(&path)?).send().await?;
        let response = Self::check(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Raw fetch of a provider-hosted image, for the client-side
    /// PNG→JPEG conversion fallback
    pub async fn fetch_image(&self, image_url: &str) -> Result<Vec<u8>, ClientError> {
        let url =
            Url::parse(image_url).map_err(|_| ClientError::BaseUrl(image_url.to_string()))?;
        let response = self.http.get(url).send().await?;
        let response = Self::check(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// POST /api/v1/feedback — fire-and-forget: a failure is logged and
    /// otherwise ignored
    pub async fn submit_feedback(&self, feedback: &LogoFeedback) {
        let url = match self.url("/api/v1/feedback") {
            Ok(url) => url,
            Err(e) => {
                warn!("Feedback submission skipped: {}", e);
                return;
            }
        };
        match self.http.post(url).json(feedback).send().await {
            Ok(response) if response.status().is_success() => {
                debug!("Feedback submitted for {}", feedback.logo_id);
            }
            Ok(response) => {
                warn!(
                    "Feedback submission for {} returned {}",
                    feedback.logo_id,
                    response.status()
                );
            }
            Err(e) => {
                warn!("Feedback submission for {} failed: {}", feedback.logo_id, e);
            }
        }
    }

    /// GET /api/v1/user/logos
    pub async fn user_logos(&self) -> Result<serde_json::Value, ClientError> {
        let response = self.http.get(self.url("/api/v1/user/logos")?).send().await?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// GET /api/v1/statistics
    pub async fn statistics(&self) -> Result<serde_json::Value, ClientError> {
        let response = self.http.get(self.url("/api/v1/statistics")?).send().await?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
