// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Generation response envelope

use serde::{Deserialize, Serialize};

use crate::generation::types::{GeneratedLogo, GenerationStats};

/// `{success, data: {logos, generation_stats}, remaining_requests}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateLogosResponse {
    pub success: bool,
    pub data: GenerationData,
    pub remaining_requests: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationData {
    pub logos: Vec<GeneratedLogo>,
    pub generation_stats: GenerationStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::types::{LogoImage, StyleInfo};

    #[test]
    fn test_envelope_wire_shape() {
        let response = GenerateLogosResponse {
            success: true,
            data: GenerationData {
                logos: vec![GeneratedLogo {
                    id: "abc_1".to_string(),
                    name: "Acme - Concept 1".to_string(),
                    image: LogoImage::Inline {
                        svg_content: "<svg/>".to_string(),
                    },
                    style_info: StyleInfo {
                        style: "modern".to_string(),
                        variation: 1,
                        ai_model: "template-svg-v1".to_string(),
                        industry: "Technology".to_string(),
                        generation_method: "Local SVG template".to_string(),
                    },
                    colors_used: vec!["#3B82F6".to_string()],
                    generation_time: 0.01,
                    confidence_score: 0.85,
                    prompt_used: None,
                }],
                generation_stats: GenerationStats {
                    total_time: 0.02,
                    logos_generated: 1,
                    ai_model: "template-svg-v1".to_string(),
                    approximate_cost: "$0.000".to_string(),
                    real_ai_generated: false,
                },
            },
            remaining_requests: 9,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["logos"][0]["id"], "abc_1");
        assert_eq!(json["data"]["logos"][0]["svg_content"], "<svg/>");
        assert_eq!(json["data"]["logos"][0]["style_info"]["style"], "modern");
        assert_eq!(json["data"]["generation_stats"]["logos_generated"], 1);
        assert_eq!(json["remaining_requests"], 9);
    }
}
