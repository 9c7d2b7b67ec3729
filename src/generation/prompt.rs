// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Natural-language prompt assembly for the AI image providers

use super::palette::color_name;
use super::types::{BusinessInfo, LogoStyle};

/// Base prompt template per logo style
const STYLE_PROMPTS: &[(&str, &str)] = &[
    (
        "modern",
        "A clean, minimalist logo for {business_name}. Simple geometric design with {colors} colors on white background. Professional vector style, high contrast, crisp edges.",
    ),
    (
        "vintage",
        "A vintage-style logo for {business_name}. Classic retro design with {colors} colors on white background. Traditional typography, decorative elements.",
    ),
    (
        "bold",
        "A bold, impactful logo for {business_name}. Strong, powerful design with {colors} colors on white background. Thick lines, dramatic contrast.",
    ),
    (
        "elegant",
        "An elegant, sophisticated logo for {business_name}. Refined luxury design with {colors} colors on white background. Graceful curves, premium feel.",
    ),
    (
        "playful",
        "A fun, creative logo for {business_name}. Playful design with {colors} colors on white background. Friendly, approachable style.",
    ),
    (
        "professional",
        "A professional, corporate logo for {business_name}. Business-appropriate design with {colors} colors on white background. Trustworthy, reliable appearance.",
    ),
];

/// Description keyword groups and the context element each contributes
const DESCRIPTION_CONTEXTS: &[(&[&str], &str)] = &[
    (
        &["tech", "software", "digital", "app", "platform", "system"],
        "incorporating subtle tech-inspired elements",
    ),
    (
        &["food", "restaurant", "cafe", "kitchen", "dining"],
        "with food-related symbolic elements",
    ),
    (
        &["health", "medical", "wellness", "fitness", "care"],
        "featuring health and wellness symbolism",
    ),
    (
        &["finance", "money", "investment", "banking", "financial"],
        "with financial stability and trust symbols",
    ),
    (
        &["education", "school", "learning", "teaching", "training"],
        "incorporating educational and growth elements",
    ),
    (
        &["creative", "design", "art", "artistic", "studio"],
        "with creative and artistic flair",
    ),
    (
        &["service", "consulting", "professional", "expert"],
        "emphasizing professionalism and expertise",
    ),
    (
        &["eco", "green", "sustainable", "environment", "natural"],
        "with eco-friendly and natural elements",
    ),
    (
        &["luxury", "premium", "high-end", "exclusive"],
        "with luxury and premium aesthetics",
    ),
    (
        &["fun", "entertainment", "game", "play", "joy"],
        "with playful and entertaining elements",
    ),
];

/// Industry-specific prompt enhancements
const INDUSTRY_CONTEXTS: &[(&str, &str)] = &[
    ("technology", "with modern technology aesthetics"),
    ("healthcare", "conveying trust and care"),
    ("finance", "symbolizing stability and growth"),
    ("retail", "appealing to consumers with inviting design"),
    ("education", "inspiring learning and development"),
    ("real estate", "representing stability and home"),
    ("consulting", "projecting expertise and reliability"),
    ("food", "with appetizing and welcoming elements"),
    ("creative", "showcasing creativity and innovation"),
    ("manufacturing", "representing quality and precision"),
];

/// Target-audience keyword groups and their phrasing
const AUDIENCE_CONTEXTS: &[(&[&str], &str)] = &[
    (
        &["young", "millennial", "gen z", "youth"],
        "with contemporary appeal for younger demographics",
    ),
    (
        &["professional", "business", "corporate"],
        "tailored for professional audiences",
    ),
    (
        &["family", "parent", "children", "kids"],
        "family-friendly and approachable",
    ),
    (
        &["luxury", "affluent", "premium", "high-income"],
        "designed for discerning, upscale clientele",
    ),
];

/// Per-variation stylistic approaches, rotated across prompts. The first
/// entry is empty so variation 1 uses the base prompt unchanged.
const VARIATION_APPROACHES: &[&str] = &[
    "",
    "with subtle gradients and modern typography",
    "featuring clean geometric shapes and professional styling",
    "incorporating elegant design elements and premium finish",
    "with contemporary aesthetics and refined details",
    "emphasizing brand recognition and memorability",
    "with balanced composition and visual hierarchy",
    "featuring distinctive character and market appeal",
];

/// Providers reject prompts beyond this length
const MAX_PROMPT_LEN: usize = 400;

/// At most this many palette colors are described in the prompt
const MAX_PROMPT_COLORS: usize = 2;

/// Replace characters providers mangle and trim whitespace
fn sanitize_name(name: &str) -> String {
    name.replace('&', "and").trim().to_string()
}

fn base_template(style: &str) -> &'static str {
    STYLE_PROMPTS
        .iter()
        .find(|(s, _)| *s == style)
        .or_else(|| STYLE_PROMPTS.first())
        .map(|(_, template)| *template)
        .unwrap_or_default()
}

fn color_text(palette: &[String]) -> String {
    let names: Vec<&str> = palette
        .iter()
        .take(MAX_PROMPT_COLORS)
        .map(|c| color_name(c))
        .collect();
    if names.is_empty() {
        "blue".to_string()
    } else {
        names.join(" and ")
    }
}

/// Collect context elements from the description, industry and audience
fn context_elements(business: &BusinessInfo) -> Vec<String> {
    let mut elements = Vec::new();

    if let Some(description) = business
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
    {
        let lower = description.to_lowercase();
        let matched = DESCRIPTION_CONTEXTS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(_, element)| element.to_string());
        match matched {
            Some(element) => elements.push(element),
            None => {
                let mut essence: String = lower.chars().take(50).collect();
                if lower.chars().count() > 50 {
                    essence.push_str("...");
                }
                elements.push(format!("reflecting the essence of {}", essence));
            }
        }
    }

    let industry = business.industry.to_lowercase();
    if let Some((_, element)) = INDUSTRY_CONTEXTS
        .iter()
        .find(|(key, _)| industry.contains(key))
    {
        if !elements.iter().any(|e| e == element) {
            elements.push(element.to_string());
        }
    }

    if let Some(audience) = business
        .target_audience
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
    {
        let lower = audience.to_lowercase();
        if let Some((_, element)) = AUDIENCE_CONTEXTS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        {
            elements.push(element.to_string());
        }
    }

    elements
}

/// Build one prompt per requested variation from the business and style
/// fields. Deterministic: the same input always yields the same prompts.
pub fn build_prompts(business: &BusinessInfo, style: &LogoStyle, variations: u32) -> Vec<String> {
    let safe_name = sanitize_name(&business.name);
    let colors = color_text(&style.color_palette);
    let base = base_template(&style.style_type)
        .replace("{business_name}", &safe_name)
        .replace("{colors}", &colors);
    let contexts = context_elements(business);

    (0..variations as usize)
        .map(|i| {
            let mut parts = vec![base.clone()];
            if !contexts.is_empty() {
                parts.push(contexts[i % contexts.len()].clone());
            }
            let approach = VARIATION_APPROACHES[i % VARIATION_APPROACHES.len()];
            if !approach.is_empty() {
                parts.push(approach.to_string());
            }
            let mut prompt = parts.join(" ").replace("  ", " ").trim().to_string();
            if prompt.len() > MAX_PROMPT_LEN {
                prompt.truncate(MAX_PROMPT_LEN);
                prompt.push_str("...");
            }
            prompt
        })
        .collect()
}
