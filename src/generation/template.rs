// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Local logo generation from fixed SVG layouts keyed by style

use async_trait::async_trait;
use std::time::Instant;
use tracing::debug;

use super::palette;
use super::provider::{GenerationJob, LogoProvider, ProviderError, ProviderOutput};
use super::store::LogoArtifact;
use super::types::{GeneratedLogo, LogoImage, StyleInfo};

pub const TEMPLATE_MODEL: &str = "template-svg-v1";

/// Synthetic confidence baseline; each later variation scores slightly higher
const BASE_CONFIDENCE: f64 = 0.85;
const CONFIDENCE_STEP: f64 = 0.05;

type SvgTemplate = fn(&str, &[String]) -> String;

fn first(colors: &[String]) -> &str {
    colors.first().map(String::as_str).unwrap_or("#3b82f6")
}

fn second_or(colors: &[String], fallback: &str) -> String {
    colors
        .get(1)
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

/// Escape the characters XML treats specially in text content
fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn modern_gradient(name: &str, colors: &[String]) -> String {
    let primary = first(colors);
    let secondary = second_or(colors, primary);
    format!(
        r##"<svg viewBox="0 0 300 120" xmlns="http://www.w3.org/2000/svg"><defs><linearGradient id="grad1" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" style="stop-color:{primary};stop-opacity:1"/><stop offset="100%" style="stop-color:{secondary};stop-opacity:1"/></linearGradient></defs><rect x="20" y="30" width="60" height="60" rx="15" fill="url(#grad1)"/><text x="100" y="70" font-family="Arial, sans-serif" font-size="32" font-weight="600" fill="{primary}">{name}</text></svg>"##
    )
}

fn modern_circles(name: &str, colors: &[String]) -> String {
    let primary = first(colors);
    let accent = second_or(colors, "#ffffff");
    format!(
        r##"<svg viewBox="0 0 300 120" xmlns="http://www.w3.org/2000/svg"><circle cx="50" cy="60" r="30" fill="{primary}"/><circle cx="60" cy="50" r="8" fill="{accent}"/><text x="100" y="70" font-family="Arial, sans-serif" font-size="28" font-weight="500" fill="{primary}">{name}</text></svg>"##
    )
}

fn vintage_badge(name: &str, colors: &[String]) -> String {
    let primary = first(colors);
    let accent = second_or(colors, primary);
    format!(
        r##"<svg viewBox="0 0 300 120" xmlns="http://www.w3.org/2000/svg"><circle cx="50" cy="60" r="32" fill="none" stroke="{primary}" stroke-width="3"/><circle cx="50" cy="60" r="24" fill="none" stroke="{accent}" stroke-width="1"/><text x="50" y="66" text-anchor="middle" font-family="Georgia, serif" font-size="18" fill="{primary}">{initial}</text><text x="95" y="70" font-family="Georgia, serif" font-size="26" fill="{primary}">{name}</text></svg>"##,
        initial = name.chars().next().unwrap_or('?'),
    )
}

fn bold_bars(name: &str, colors: &[String]) -> String {
    let primary = first(colors);
    let accent = second_or(colors, primary);
    format!(
        r##"<svg viewBox="0 0 300 120" xmlns="http://www.w3.org/2000/svg"><rect x="20" y="30" width="14" height="60" fill="{primary}"/><rect x="40" y="42" width="14" height="48" fill="{accent}"/><rect x="60" y="54" width="14" height="36" fill="{primary}"/><text x="90" y="72" font-family="Arial Black, sans-serif" font-size="30" font-weight="800" fill="{primary}">{name}</text></svg>"##
    )
}

fn elegant_monogram(name: &str, colors: &[String]) -> String {
    let primary = first(colors);
    let accent = second_or(colors, primary);
    format!(
        r##"<svg viewBox="0 0 300 120" xmlns="http://www.w3.org/2000/svg"><path d="M 30 80 Q 50 20 70 80" fill="none" stroke="{primary}" stroke-width="2"/><line x1="30" y1="86" x2="70" y2="86" stroke="{accent}" stroke-width="1"/><text x="90" y="70" font-family="Didot, serif" font-size="28" font-style="italic" fill="{primary}">{name}</text></svg>"##
    )
}

fn playful_polygon(name: &str, colors: &[String]) -> String {
    let primary = first(colors);
    let accent = second_or(colors, "#ffffff");
    format!(
        r##"<svg viewBox="0 0 300 120" xmlns="http://www.w3.org/2000/svg"><polygon points="50,20 80,40 70,80 30,80 20,40" fill="{primary}"/><circle cx="45" cy="45" r="8" fill="{accent}"/><text x="100" y="70" font-family="Comic Sans MS, cursive" font-size="28" font-weight="bold" fill="{primary}">{name}</text></svg>"##
    )
}

fn professional_frame(name: &str, colors: &[String]) -> String {
    let primary = first(colors);
    let accent = second_or(colors, primary);
    format!(
        r##"<svg viewBox="0 0 300 120" xmlns="http://www.w3.org/2000/svg"><rect x="20" y="40" width="50" height="40" fill="{primary}"/><rect x="25" y="35" width="50" height="40" fill="none" stroke="{accent}" stroke-width="2"/><text x="90" y="70" font-family="Times, serif" font-size="30" font-weight="bold" fill="{primary}">{name}</text></svg>"##
    )
}

/// Layout templates per style; variations rotate through a style's entries
const STYLE_TEMPLATES: &[(&str, &[SvgTemplate])] = &[
    ("modern", &[modern_gradient, modern_circles]),
    ("vintage", &[vintage_badge]),
    ("bold", &[bold_bars]),
    ("elegant", &[elegant_monogram]),
    ("playful", &[playful_polygon]),
    ("professional", &[professional_frame]),
];

/// Render one SVG for the given style/variation. Unknown styles fall back
/// to the modern layouts.
pub fn render_svg(style: &str, business_name: &str, colors: &[String], variation: usize) -> String {
    let templates = STYLE_TEMPLATES
        .iter()
        .find(|(s, _)| *s == style)
        .map(|(_, t)| *t)
        .unwrap_or(STYLE_TEMPLATES[0].1);
    let template = templates[variation % templates.len()];
    template(&xml_escape(business_name), colors)
}

/// Generation strategy that synthesizes inline SVG markup locally
pub struct TemplateSvgProvider;

impl TemplateSvgProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TemplateSvgProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogoProvider for TemplateSvgProvider {
    fn model_name(&self) -> &str {
        TEMPLATE_MODEL
    }

    async fn generate(&self, job: &GenerationJob) -> Result<ProviderOutput, ProviderError> {
        if let Some(ref model) = job.request.model {
            if model != TEMPLATE_MODEL {
                return Err(ProviderError::UnsupportedModel(model.clone()));
            }
        }

        let request = &job.request;
        let start = Instant::now();
        let count = request.variations as usize;
        let palettes = palette::variations(&request.style.color_palette, count)?;

        debug!(
            "Rendering {} template logo(s) for '{}' ({})",
            count, request.business_info.name, request.style.style_type
        );

        let mut logos = Vec::with_capacity(count);
        let mut artifacts = Vec::with_capacity(count);
        for i in 0..count {
            let colors = palettes[i % palettes.len()].clone();
            let svg = render_svg(
                &request.style.style_type,
                &request.business_info.name,
                &colors,
                i,
            );
            let variation = (i + 1) as u32;
            artifacts.push(LogoArtifact::Svg(svg.clone()));
            logos.push(GeneratedLogo {
                id: job.logo_id(variation),
                name: format!("{} - Concept {}", request.business_info.name, variation),
                image: LogoImage::Inline { svg_content: svg },
                style_info: StyleInfo {
                    style: request.style.style_type.clone(),
                    variation,
                    ai_model: TEMPLATE_MODEL.to_string(),
                    industry: request.business_info.industry.clone(),
                    generation_method: "Local SVG template".to_string(),
                },
                colors_used: colors,
                generation_time: start.elapsed().as_secs_f64(),
                confidence_score: (BASE_CONFIDENCE + CONFIDENCE_STEP * i as f64).min(0.99),
                prompt_used: None,
            });
        }

        Ok(ProviderOutput {
            logos,
            artifacts,
            model: TEMPLATE_MODEL.to_string(),
            cost_per_image: 0.0,
            real_ai_generated: false,
        })
    }
}
