// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the LogoAI Node

/// Full version string with feature description
pub const VERSION: &str = "v1.0.0-provider-unification-2025-08-05";

/// Semantic version number
pub const VERSION_NUMBER: &str = "1.0.0";

/// Build date
pub const BUILD_DATE: &str = "2025-08-05";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "business-analysis",
    "template-svg-generation",
    "dalle-generation",
    "vertex-imagen-generation",
    "palette-variations",
    "logo-downloads",
    "feedback",
    "rate-limiting",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("LogoAI Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}

/// Get full version info for API responses
pub fn get_version_info() -> serde_json::Value {
    serde_json::json!({
        "version": VERSION_NUMBER,
        "build": VERSION,
        "date": BUILD_DATE,
        "features": FEATURES,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert!(FEATURES.contains(&"template-svg-generation"));
        assert!(FEATURES.contains(&"rate-limiting"));
    }

    #[test]
    fn test_version_string() {
        let version = get_version_string();
        assert!(version.contains("1.0.0"));
        assert!(version.contains(BUILD_DATE));
    }
}
