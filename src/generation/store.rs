// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo records kept for the download endpoint, with a fixed TTL

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::cache::MemoryCache;

/// The stored image payload behind a logo id
#[derive(Debug, Clone, PartialEq)]
pub enum LogoArtifact {
    /// Remote URL reported by an AI provider
    RemoteUrl(String),
    /// PNG bytes decoded from a provider response
    Png(Vec<u8>),
    /// Inline SVG markup from the template strategy
    Svg(String),
}

/// Wire form of [`LogoArtifact`]; PNG bytes are base64 in the record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ArtifactRecord {
    RemoteUrl { url: String },
    Png { base64: String },
    Svg { markup: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LogoRecord {
    id: String,
    name: String,
    artifact: ArtifactRecord,
    created_at: DateTime<Utc>,
}

/// A stored logo as handed back to the download endpoint
#[derive(Debug, Clone)]
pub struct StoredLogo {
    pub id: String,
    pub name: String,
    pub artifact: LogoArtifact,
    pub created_at: DateTime<Utc>,
}

/// TTL'd logo records on top of the shared key-value cache
pub struct LogoStore {
    cache: Arc<MemoryCache>,
    ttl: Duration,
}

impl LogoStore {
    pub fn new(cache: Arc<MemoryCache>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    fn key(id: &str) -> String {
        format!("logo:{}", id)
    }

    pub async fn put(
        &self,
        id: &str,
        name: &str,
        artifact: &LogoArtifact,
    ) -> Result<(), serde_json::Error> {
        let record = LogoRecord {
            id: id.to_string(),
            name: name.to_string(),
            artifact: match artifact {
                LogoArtifact::RemoteUrl(url) => ArtifactRecord::RemoteUrl { url: url.clone() },
                LogoArtifact::Png(bytes) => ArtifactRecord::Png {
                    base64: BASE64.encode(bytes),
                },
                LogoArtifact::Svg(markup) => ArtifactRecord::Svg {
                    markup: markup.clone(),
                },
            },
            created_at: Utc::now(),
        };
        self.cache.set_json(&Self::key(id), &record, self.ttl).await
    }

    pub async fn get(&self, id: &str) -> Option<StoredLogo> {
        let record: LogoRecord = self.cache.get_json(&Self::key(id)).await?;
        let artifact = match record.artifact {
            ArtifactRecord::RemoteUrl { url } => LogoArtifact::RemoteUrl(url),
            ArtifactRecord::Png { base64 } => LogoArtifact::Png(BASE64.decode(base64).ok()?),
            ArtifactRecord::Svg { markup } => LogoArtifact::Svg(markup),
        };
        Some(StoredLogo {
            id: record.id,
            name: record.name,
            artifact,
            created_at: record.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> LogoStore {
        LogoStore::new(Arc::new(MemoryCache::new()), Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_put_get_svg() {
        let store = store();
        store
            .put("abc_1", "Acme - Concept 1", &LogoArtifact::Svg("<svg/>".to_string()))
            .await
            .unwrap();
        let logo = store.get("abc_1").await.unwrap();
        assert_eq!(logo.name, "Acme - Concept 1");
        assert_eq!(logo.artifact, LogoArtifact::Svg("<svg/>".to_string()));
    }

    #[tokio::test]
    async fn test_png_bytes_roundtrip() {
        let store = store();
        let bytes = vec![0x89, 0x50, 0x4e, 0x47, 0x00, 0xff];
        store
            .put("abc_2", "Acme", &LogoArtifact::Png(bytes.clone()))
            .await
            .unwrap();
        let logo = store.get("abc_2").await.unwrap();
        assert_eq!(logo.artifact, LogoArtifact::Png(bytes));
    }

    #[tokio::test]
    async fn test_missing_id_is_none() {
        assert!(store().get("missing").await.is_none());
    }
}
