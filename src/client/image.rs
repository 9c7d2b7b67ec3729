// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-result image handling: retry-once load policy with a cache-busting
//! query parameter, a permanent placeholder after the second failure, and
//! the PNG→JPEG conversion fallback

use crate::imaging::{self, ImagingError};

/// Substituted permanently after the retry also fails
pub const PLACEHOLDER_SVG: &str = r##"<svg viewBox="0 0 300 120" xmlns="http://www.w3.org/2000/svg"><rect x="1" y="1" width="298" height="118" rx="8" fill="#f3f4f6" stroke="#d1d5db"/><circle cx="50" cy="60" r="22" fill="#d1d5db"/><text x="90" y="66" font-family="Arial, sans-serif" font-size="16" fill="#6b7280">Logo unavailable</text></svg>"##;

/// What the renderer should do after a load failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Try once more with this cache-busted URL
    Retry { url: String },
    /// Give up and render [`PLACEHOLDER_SVG`]
    Placeholder,
}

fn cache_busted(url: &str, attempt: u32) -> String {
    if url.contains('?') {
        format!("{}&retry={}", url, attempt)
    } else {
        format!("{}?retry={}", url, attempt)
    }
}

/// Load state for one displayed logo image
#[derive(Debug, Clone)]
pub struct ImageSlot {
    url: String,
    failures: u32,
}

impl ImageSlot {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            failures: 0,
        }
    }

    /// The URL to render from (reflects any retry rewrite)
    pub fn current_url(&self) -> &str {
        &self.url
    }

    pub fn failed_permanently(&self) -> bool {
        self.failures > 1
    }

    /// Record a load failure. The first failure earns exactly one retry;
    /// anything after that is the placeholder, permanently.
    pub fn on_load_failure(&mut self) -> LoadOutcome {
        self.failures += 1;
        if self.failures == 1 {
            self.url = cache_busted(&self.url, self.failures);
            LoadOutcome::Retry {
                url: self.url.clone(),
            }
        } else {
            LoadOutcome::Placeholder
        }
    }
}

/// Client-side PNG→JPEG conversion (white background fill), used when the
/// per-logo download endpoint is unavailable and the raw provider image
/// has to be converted locally
pub fn png_to_jpeg(png_bytes: &[u8]) -> Result<Vec<u8>, ImagingError> {
    imaging::to_jpeg(png_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_failure_retries_with_cache_buster() {
        let mut slot = ImageSlot::new("https://img.example.com/logo.png");
        let outcome = slot.on_load_failure();
        assert_eq!(
            outcome,
            LoadOutcome::Retry {
                url: "https://img.example.com/logo.png?retry=1".to_string()
            }
        );
        assert!(!slot.failed_permanently());
    }

    #[test]
    fn test_cache_buster_appends_to_existing_query() {
        let mut slot = ImageSlot::new("https://img.example.com/logo.png?sig=abc");
        let outcome = slot.on_load_failure();
        assert_eq!(
            outcome,
            LoadOutcome::Retry {
                url: "https://img.example.com/logo.png?sig=abc&retry=1".to_string()
            }
        );
    }

    #[test]
    fn test_second_failure_is_permanent_placeholder() {
        let mut slot = ImageSlot::new("https://img.example.com/logo.png");
        slot.on_load_failure();
        assert_eq!(slot.on_load_failure(), LoadOutcome::Placeholder);
        assert_eq!(slot.on_load_failure(), LoadOutcome::Placeholder);
        assert!(slot.failed_permanently());
    }

    #[test]
    fn test_placeholder_is_renderable_svg() {
        assert!(PLACEHOLDER_SVG.starts_with("<svg"));
        assert!(PLACEHOLDER_SVG.contains("Logo unavailable"));
    }
}
