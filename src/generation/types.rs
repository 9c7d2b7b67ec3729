// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo generation request/result types and validation

use serde::{Deserialize, Serialize};

/// Industries accepted by the generation and analysis endpoints.
/// Matching is case-insensitive.
pub const INDUSTRIES: &[&str] = &[
    "technology",
    "healthcare",
    "finance",
    "food",
    "education",
    "creative",
    "retail",
    "real estate",
    "consulting",
    "manufacturing",
];

/// Accepted logo styles
pub const STYLES: &[&str] = &[
    "modern",
    "vintage",
    "bold",
    "elegant",
    "playful",
    "professional",
];

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 200;
pub const MAX_AUDIENCE_LEN: usize = 100;
pub const MAX_COLORS: usize = 4;
pub const MAX_VARIATIONS: u32 = 4;

fn default_font() -> Option<String> {
    Some("sans-serif".to_string())
}

fn default_variations() -> u32 {
    2
}

/// A failed validation check: which field and why
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
}

impl ValidationFailure {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Business attributes collected from the form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub industry: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
}

impl BusinessInfo {
    /// Validate field presence, length bounds and the industry list
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        let name = self.name.trim();
        if name.len() < MIN_NAME_LEN || name.len() > MAX_NAME_LEN {
            return Err(ValidationFailure::new(
                "name",
                format!(
                    "name must be between {} and {} characters",
                    MIN_NAME_LEN, MAX_NAME_LEN
                ),
            ));
        }
        let industry = self.industry.trim().to_lowercase();
        if !INDUSTRIES.contains(&industry.as_str()) {
            return Err(ValidationFailure::new(
                "industry",
                format!("unknown industry '{}'", self.industry),
            ));
        }
        if let Some(ref description) = self.description {
            if description.len() > MAX_DESCRIPTION_LEN {
                return Err(ValidationFailure::new(
                    "description",
                    format!("description must be at most {} characters", MAX_DESCRIPTION_LEN),
                ));
            }
        }
        if let Some(ref audience) = self.target_audience {
            if audience.len() > MAX_AUDIENCE_LEN {
                return Err(ValidationFailure::new(
                    "target_audience",
                    format!(
                        "target_audience must be at most {} characters",
                        MAX_AUDIENCE_LEN
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Style selection made before submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoStyle {
    pub style_type: String,
    pub color_palette: Vec<String>,
    #[serde(default = "default_font")]
    pub font_preference: Option<String>,
}

impl LogoStyle {
    /// Validate the style name and the hex palette entries
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        if !STYLES.contains(&self.style_type.as_str()) {
            return Err(ValidationFailure::new(
                "style_type",
                format!(
                    "invalid style '{}'; allowed: {}",
                    self.style_type,
                    STYLES.join(", ")
                ),
            ));
        }
        if self.color_palette.is_empty() || self.color_palette.len() > MAX_COLORS {
            return Err(ValidationFailure::new(
                "color_palette",
                format!("color_palette must contain 1 to {} entries", MAX_COLORS),
            ));
        }
        for color in &self.color_palette {
            if super::palette::parse_hex(color).is_err() {
                return Err(ValidationFailure::new(
                    "color_palette",
                    format!("'{}' is not a #RRGGBB hex color", color),
                ));
            }
        }
        Ok(())
    }
}

/// Body of POST /api/v1/generate-logos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoGenerationRequest {
    pub business_info: BusinessInfo,
    pub style: LogoStyle,
    #[serde(default = "default_variations")]
    pub variations: u32,
    /// Optional provider model selector (e.g. "imagegeneration@005")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl LogoGenerationRequest {
    /// Validate the whole payload before any provider call
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        self.business_info.validate()?;
        self.style.validate()?;
        if self.variations == 0 || self.variations > MAX_VARIATIONS {
            return Err(ValidationFailure::new(
                "variations",
                format!("variations must be between 1 and {}", MAX_VARIATIONS),
            ));
        }
        Ok(())
    }
}

/// The image artifact carried by a generated logo: a remote URL from an
/// AI provider, or inline SVG markup from the template strategy. Exactly
/// one of `image_url` / `svg_content` appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogoImage {
    Remote { image_url: String },
    Inline { svg_content: String },
}

/// Style metadata echoed back on each result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleInfo {
    pub style: String,
    pub variation: u32,
    pub ai_model: String,
    pub industry: String,
    pub generation_method: String,
}

/// One generated logo candidate. Created once per generation call and
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedLogo {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub image: LogoImage,
    pub style_info: StyleInfo,
    pub colors_used: Vec<String>,
    pub generation_time: f64,
    pub confidence_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_used: Option<String>,
}

/// Aggregate statistics attached to the generation envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationStats {
    pub total_time: f64,
    pub logos_generated: u32,
    pub ai_model: String,
    pub approximate_cost: String,
    pub real_ai_generated: bool,
}
