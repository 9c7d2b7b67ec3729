// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fixed-TTL key-value store for JSON blobs (analysis results, feedback,
//! logo records)

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// In-memory expiring blob store. Entries are pruned lazily: expired keys
/// read as absent, and each write sweeps dead entries while it holds the
/// lock. No eviction policy beyond TTL.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Serialize `value` and store it under `key` for `ttl`
    pub async fn set_json<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> Result<(), serde_json::Error> {
        let serialized = serde_json::to_string(value)?;
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            key.to_string(),
            CacheEntry {
                value: serialized,
                expires_at: now + ttl,
            },
        );
        Ok(())
    }

    /// Fetch and deserialize the value under `key`, if present and fresh.
    /// A stored blob that no longer deserializes reads as absent.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if entry.expires_at <= Instant::now() {
            return None;
        }
        serde_json::from_str(&entry.value).ok()
    }

    pub async fn remove(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    /// Number of live (unexpired) entries
    pub async fn entry_count(&self) -> usize {
        let now = Instant::now();
        let entries = self.entries.read().await;
        entries.values().filter(|e| e.expires_at > now).count()
    }
}
