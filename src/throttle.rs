// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fixed-window request throttle for generation requests

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// The caller identifier used when no per-caller key exists. The limiter
/// is effectively a global throttle under this key.
pub const DEFAULT_CLIENT_ID: &str = "anonymous";

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    started: Instant,
}

/// Counter-based limiter: each key gets `max_requests` per window, and the
/// counter resets once the window elapses. Check-then-increment happens
/// under a single write lock.
pub struct RequestThrottle {
    windows: Arc<RwLock<HashMap<String, Window>>>,
    max_requests: u32,
    window: Duration,
}

impl RequestThrottle {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: Arc::new(RwLock::new(HashMap::new())),
            max_requests,
            window,
        }
    }

    /// Record a request for `key`. Returns the remaining allowance, or
    /// `Err(retry_after_secs)` when the window is exhausted.
    pub fn check_and_record(&self, key: &str) -> Result<u32, u64> {
        let now = Instant::now();
        let mut windows = self.windows.write().unwrap();
        let window = windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            started: now,
        });

        if now.duration_since(window.started) >= self.window {
            window.count = 0;
            window.started = now;
        }

        if window.count >= self.max_requests {
            let elapsed = now.duration_since(window.started);
            let retry_after = self.window.saturating_sub(elapsed).as_secs().max(1);
            return Err(retry_after);
        }

        window.count += 1;
        Ok(self.max_requests - window.count)
    }

    /// Current count for a key (diagnostics only)
    pub fn current_count(&self, key: &str) -> u32 {
        let windows = self.windows.read().unwrap();
        windows.get(key).map(|w| w.count).unwrap_or(0)
    }
}
