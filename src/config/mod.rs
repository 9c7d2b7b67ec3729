// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Node configuration: environment variables with defaults, an optional
//! TOML file, and CLI overrides layered on top

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;

use crate::generation::provider::ProviderKind;
use crate::generation::{
    DEFAULT_DALLE_MODEL, DEFAULT_OPENAI_ENDPOINT, DEFAULT_VERTEX_LOCATION, DEFAULT_VERTEX_MODEL,
};

fn default_api_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}

fn default_provider() -> String {
    "template".to_string()
}

fn default_openai_endpoint() -> String {
    DEFAULT_OPENAI_ENDPOINT.to_string()
}

fn default_dalle_model() -> String {
    DEFAULT_DALLE_MODEL.to_string()
}

fn default_vertex_location() -> String {
    DEFAULT_VERTEX_LOCATION.to_string()
}

fn default_vertex_model() -> String {
    DEFAULT_VERTEX_MODEL.to_string()
}

fn default_max_requests() -> u32 {
    10
}

fn default_window_secs() -> u64 {
    3600
}

fn default_analysis_ttl_secs() -> u64 {
    3600
}

fn default_feedback_ttl_secs() -> u64 {
    86_400
}

fn default_logo_ttl_secs() -> u64 {
    86_400
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_openai_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_dalle_model")]
    pub model: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_openai_endpoint(),
            model: default_dalle_model(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VertexConfig {
    #[serde(default)]
    pub project: String,
    #[serde(default = "default_vertex_location")]
    pub location: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default = "default_vertex_model")]
    pub model: String,
}

impl Default for VertexConfig {
    fn default() -> Self {
        Self {
            project: String::new(),
            location: default_vertex_location(),
            access_token: String::new(),
            model: default_vertex_model(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThrottleConfig {
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheTtlConfig {
    #[serde(default = "default_analysis_ttl_secs")]
    pub analysis_ttl_secs: u64,
    #[serde(default = "default_feedback_ttl_secs")]
    pub feedback_ttl_secs: u64,
    #[serde(default = "default_logo_ttl_secs")]
    pub logo_ttl_secs: u64,
}

impl Default for CacheTtlConfig {
    fn default() -> Self {
        Self {
            analysis_ttl_secs: default_analysis_ttl_secs(),
            feedback_ttl_secs: default_feedback_ttl_secs(),
            logo_ttl_secs: default_logo_ttl_secs(),
        }
    }
}

/// Complete node configuration. Handlers receive this through `AppState`
/// rather than reading process globals.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    #[serde(default = "default_api_addr")]
    pub api_addr: String,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub vertex: VertexConfig,
    #[serde(default)]
    pub throttle: ThrottleConfig,
    #[serde(default)]
    pub cache: CacheTtlConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            api_addr: default_api_addr(),
            cors_origins: default_cors_origins(),
            provider: default_provider(),
            openai: OpenAiConfig::default(),
            vertex: VertexConfig::default(),
            throttle: ThrottleConfig::default(),
            cache: CacheTtlConfig::default(),
        }
    }
}

fn env_or<F: FnOnce() -> String>(key: &str, fallback: F) -> String {
    env::var(key).unwrap_or_else(|_| fallback())
}

fn env_parse<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

impl NodeConfig {
    /// Build configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let cors_origins = env::var("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| default_cors_origins());

        Self {
            api_addr: env_or("API_ADDR", default_api_addr),
            cors_origins,
            provider: env_or("LOGO_PROVIDER", default_provider),
            openai: OpenAiConfig {
                api_key: env_or("OPENAI_API_KEY", String::new),
                endpoint: env_or("OPENAI_ENDPOINT", default_openai_endpoint),
                model: env_or("DALLE_MODEL", default_dalle_model),
            },
            vertex: VertexConfig {
                project: env_or("GOOGLE_CLOUD_PROJECT", String::new),
                location: env_or("VERTEX_LOCATION", default_vertex_location),
                access_token: env_or("VERTEX_ACCESS_TOKEN", String::new),
                model: env_or("VERTEX_MODEL", default_vertex_model),
            },
            throttle: ThrottleConfig {
                max_requests: env_parse("RATE_LIMIT_MAX_REQUESTS", default_max_requests()),
                window_secs: env_parse("RATE_LIMIT_WINDOW_SECS", default_window_secs()),
            },
            cache: CacheTtlConfig {
                analysis_ttl_secs: env_parse("ANALYSIS_TTL_SECS", default_analysis_ttl_secs()),
                feedback_ttl_secs: env_parse("FEEDBACK_TTL_SECS", default_feedback_ttl_secs()),
                logo_ttl_secs: env_parse("LOGO_TTL_SECS", default_logo_ttl_secs()),
            },
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// The parsed provider kind
    pub fn provider_kind(&self) -> Result<ProviderKind> {
        ProviderKind::parse(&self.provider)
            .ok_or_else(|| anyhow::anyhow!("unknown provider '{}'", self.provider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NodeConfig::default();
        assert_eq!(config.api_addr, "0.0.0.0:8000");
        assert_eq!(config.provider, "template");
        assert_eq!(config.throttle.max_requests, 10);
        assert_eq!(config.throttle.window_secs, 3600);
        assert_eq!(config.cache.feedback_ttl_secs, 86_400);
        assert_eq!(config.openai.model, "dall-e-3");
        assert_eq!(config.vertex.model, "imagegeneration@006");
    }

    #[test]
    fn test_provider_kind_parsing() {
        let mut config = NodeConfig::default();
        assert_eq!(config.provider_kind().unwrap(), ProviderKind::Template);
        config.provider = "vertex".to_string();
        assert_eq!(config.provider_kind().unwrap(), ProviderKind::Vertex);
        config.provider = "stable-diffusion".to_string();
        assert!(config.provider_kind().is_err());
    }

    #[test]
    fn test_from_toml_file() {
        let toml = r#"
            api_addr = "127.0.0.1:9000"
            provider = "dalle"

            [openai]
            api_key = "sk-test"

            [throttle]
            max_requests = 3
        "#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("node.toml");
        std::fs::write(&path, toml).unwrap();

        let config = NodeConfig::from_file(&path).unwrap();
        assert_eq!(config.api_addr, "127.0.0.1:9000");
        assert_eq!(config.openai.api_key, "sk-test");
        assert_eq!(config.throttle.max_requests, 3);
        // Unset sections keep their defaults
        assert_eq!(config.throttle.window_secs, 3600);
        assert_eq!(config.vertex.location, "us-central1");
    }
}
