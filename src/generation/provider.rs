// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! The provider seam: one narrow interface over DALL-E, Vertex Imagen
//! and the local SVG template strategy

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use super::palette::PaletteError;
use super::store::LogoArtifact;
use super::types::{GeneratedLogo, LogoGenerationRequest};

/// Which generation strategy a deployment runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Template,
    Dalle,
    Vertex,
}

impl ProviderKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "template" | "svg" => Some(Self::Template),
            "dalle" | "dall-e" | "openai" => Some(Self::Dalle),
            "vertex" | "imagen" => Some(Self::Vertex),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Template => "template",
            Self::Dalle => "dalle",
            Self::Vertex => "vertex",
        }
    }
}

/// Errors surfaced by a provider call. The message text is passed through
/// to the API error body.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("provider quota exceeded: {0}")]
    Quota(String),

    #[error("provider returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected provider response: {0}")]
    UnexpectedResponse(String),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error("unsupported model '{0}'")]
    UnsupportedModel(String),
}

impl ProviderError {
    /// Classify an upstream HTTP status into the matching variant
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::Auth(message),
            429 => Self::Quota(message),
            _ => Self::Upstream { status, message },
        }
    }
}

/// One generation job: the validated request plus the hash-derived id
/// prefix shared by its variations.
#[derive(Debug, Clone)]
pub struct GenerationJob {
    pub request: LogoGenerationRequest,
    pub base_id: String,
}

impl GenerationJob {
    pub fn new(request: LogoGenerationRequest) -> Self {
        let base_id = new_base_id(&request.business_info.name);
        Self { request, base_id }
    }

    /// Id of the `variation`-th logo (1-based)
    pub fn logo_id(&self, variation: u32) -> String {
        format!("{}_{}", self.base_id, variation)
    }
}

/// What a provider hands back: the logos, the artifact behind each logo
/// (same order), and the inputs the handler needs to build generation
/// statistics.
#[derive(Debug, Clone)]
pub struct ProviderOutput {
    pub logos: Vec<GeneratedLogo>,
    pub artifacts: Vec<LogoArtifact>,
    pub model: String,
    pub cost_per_image: f64,
    pub real_ai_generated: bool,
}

/// A logo generation strategy. Implementations produce exactly
/// `request.variations` logos or fail the whole job.
#[async_trait]
pub trait LogoProvider: Send + Sync {
    /// Default model identifier, reported in health payloads
    fn model_name(&self) -> &str;

    async fn generate(&self, job: &GenerationJob) -> Result<ProviderOutput, ProviderError>;
}

/// Derive an opaque id prefix from the business name and the current time
pub fn new_base_id(business_name: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let mut hasher = Sha256::new();
    hasher.update(business_name.as_bytes());
    hasher.update(nanos.to_le_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..6])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!(ProviderKind::parse("template"), Some(ProviderKind::Template));
        assert_eq!(ProviderKind::parse("DALL-E"), Some(ProviderKind::Dalle));
        assert_eq!(ProviderKind::parse("imagen"), Some(ProviderKind::Vertex));
        assert_eq!(ProviderKind::parse("stable-diffusion"), None);
    }

    #[test]
    fn test_error_classification_by_status() {
        assert!(matches!(
            ProviderError::from_status(401, "bad key".into()),
            ProviderError::Auth(_)
        ));
        assert!(matches!(
            ProviderError::from_status(429, "quota".into()),
            ProviderError::Quota(_)
        ));
        assert!(matches!(
            ProviderError::from_status(500, "boom".into()),
            ProviderError::Upstream { status: 500, .. }
        ));
    }

    #[test]
    fn test_base_id_is_short_hex() {
        let id = new_base_id("Acme");
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_logo_id_combines_base_and_variation() {
        let job = GenerationJob {
            request: crate::generation::test_request(),
            base_id: "abcdef012345".to_string(),
        };
        assert_eq!(job.logo_id(1), "abcdef012345_1");
    }
}
