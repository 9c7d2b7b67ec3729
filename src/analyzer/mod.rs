// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Business analysis: deterministic keyword scoring against explicit
//! industry→palette and style→keyword tables

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::generation::types::BusinessInfo;

/// Colors suggested when no industry table entry matches
const FALLBACK_COLORS: &[&str] = &["#3b82f6", "#1e40af", "#10b981"];

/// Style recommended when no keyword scores
const FALLBACK_STYLE: &str = "modern";

/// How many extracted words are echoed back
const MAX_KEYWORDS: usize = 10;

/// Recommended palette per industry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryPalette {
    pub industry: String,
    pub colors: Vec<String>,
}

/// Keywords that vote for a style
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleKeywords {
    pub style: String,
    pub keywords: Vec<String>,
}

/// The scoring tables, held as an explicit configuration structure rather
/// than literals scattered through the scoring code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerTables {
    pub industry_palettes: Vec<IndustryPalette>,
    pub style_keywords: Vec<StyleKeywords>,
}

impl Default for AnalyzerTables {
    fn default() -> Self {
        fn palette(industry: &str, colors: &[&str]) -> IndustryPalette {
            IndustryPalette {
                industry: industry.to_string(),
                colors: colors.iter().map(|c| c.to_string()).collect(),
            }
        }
        fn keywords(style: &str, words: &[&str]) -> StyleKeywords {
            StyleKeywords {
                style: style.to_string(),
                keywords: words.iter().map(|w| w.to_string()).collect(),
            }
        }

        Self {
            industry_palettes: vec![
                palette("technology", &["#007acc", "#0066cc", "#4a90e2", "#5cb3cc"]),
                palette("healthcare", &["#00a86b", "#228b22", "#32cd32", "#87ceeb"]),
                palette("finance", &["#1e3a5f", "#2c5f2d", "#8b4513", "#708090"]),
                palette("food", &["#ff6347", "#ffa500", "#ffd700", "#32cd32"]),
                palette("education", &["#4169e1", "#8a2be2", "#dc143c", "#228b22"]),
                palette("creative", &["#ff1493", "#ff4500", "#ffd700", "#9370db"]),
            ],
            style_keywords: vec![
                keywords("modern", &["tech", "digital", "software", "app", "innovation"]),
                keywords("professional", &["consulting", "finance", "law", "corporate"]),
                keywords("playful", &["kids", "games", "entertainment", "creative"]),
                keywords("elegant", &["luxury", "premium", "boutique", "fashion"]),
                keywords("bold", &["sports", "fitness", "energy", "power"]),
                keywords("vintage", &["craft", "artisan", "traditional", "heritage"]),
            ],
        }
    }
}

/// The recommendation returned by [`BusinessAnalyzer::analyze`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessAnalysis {
    pub recommended_colors: Vec<String>,
    pub recommended_style: String,
    pub style_confidence: BTreeMap<String, u32>,
    pub confidence: f64,
    pub business_keywords: Vec<String>,
}

/// Pure keyword-matching analyzer. No learning, no external calls.
pub struct BusinessAnalyzer {
    tables: AnalyzerTables,
    word_re: Regex,
}

impl BusinessAnalyzer {
    pub fn new(tables: AnalyzerTables) -> Self {
        Self {
            tables,
            word_re: Regex::new(r"\w+").expect("static word pattern"),
        }
    }

    fn words(&self, text: &str) -> Vec<String> {
        self.word_re
            .find_iter(&text.to_lowercase())
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Score every style against the name/description words and pick the
    /// industry palette. Ties go to the first-listed style; a zero-score
    /// result falls back to "modern".
    pub fn analyze(&self, business: &BusinessInfo) -> BusinessAnalysis {
        let industry = business.industry.to_lowercase();
        let recommended_colors = self
            .tables
            .industry_palettes
            .iter()
            .find(|entry| entry.industry == industry)
            .map(|entry| entry.colors.clone())
            .unwrap_or_else(|| FALLBACK_COLORS.iter().map(|c| c.to_string()).collect());

        let mut all_words = self.words(&business.name);
        if let Some(ref description) = business.description {
            all_words.extend(self.words(description));
        }

        let mut style_confidence = BTreeMap::new();
        let mut best: Option<(&str, u32)> = None;
        for entry in &self.tables.style_keywords {
            let score = entry
                .keywords
                .iter()
                .filter(|keyword| all_words.iter().any(|word| word == *keyword))
                .count() as u32;
            style_confidence.insert(entry.style.clone(), score);
            if best.map(|(_, s)| score > s).unwrap_or(true) {
                best = Some((&entry.style, score));
            }
        }

        let (recommended_style, top_score) = match best {
            Some((style, score)) if score > 0 => (style.to_string(), score),
            _ => (FALLBACK_STYLE.to_string(), 0),
        };

        // Plausibility value, not a calibrated probability
        let confidence = (0.5 + 0.1 * top_score as f64).min(0.95);

        all_words.truncate(MAX_KEYWORDS);
        BusinessAnalysis {
            recommended_colors,
            recommended_style,
            style_confidence,
            confidence,
            business_keywords: all_words,
        }
    }
}

impl Default for BusinessAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerTables::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(name: &str, industry: &str, description: Option<&str>) -> BusinessInfo {
        BusinessInfo {
            name: name.to_string(),
            industry: industry.to_string(),
            description: description.map(String::from),
            target_audience: None,
        }
    }

    #[test]
    fn test_industry_palette_lookup() {
        let analyzer = BusinessAnalyzer::default();
        let analysis = analyzer.analyze(&business("Acme", "Technology", None));
        assert_eq!(analysis.recommended_colors[0], "#007acc");
    }

    #[test]
    fn test_unknown_industry_falls_back() {
        let analyzer = BusinessAnalyzer::default();
        let analysis = analyzer.analyze(&business("Acme", "Retail", None));
        assert_eq!(analysis.recommended_colors[0], "#3b82f6");
    }

    #[test]
    fn test_keywords_pick_style() {
        let analyzer = BusinessAnalyzer::default();
        let analysis = analyzer.analyze(&business(
            "Luxury Boutique Fashion House",
            "Creative",
            None,
        ));
        assert_eq!(analysis.recommended_style, "elegant");
        assert_eq!(analysis.style_confidence["elegant"], 3);
    }

    #[test]
    fn test_description_words_count() {
        let analyzer = BusinessAnalyzer::default();
        let analysis = analyzer.analyze(&business(
            "Acme",
            "Technology",
            Some("digital software app innovation"),
        ));
        assert_eq!(analysis.recommended_style, "modern");
        assert_eq!(analysis.style_confidence["modern"], 4);
        assert!(analysis.confidence > 0.8);
    }

    #[test]
    fn test_zero_score_defaults_to_modern() {
        let analyzer = BusinessAnalyzer::default();
        let analysis = analyzer.analyze(&business("Plumbing", "Manufacturing", None));
        assert_eq!(analysis.recommended_style, "modern");
        assert!(analysis.style_confidence.values().all(|&s| s == 0));
    }

    #[test]
    fn test_analysis_deterministic() {
        let analyzer = BusinessAnalyzer::default();
        let info = business("Craft Games Studio", "Creative", Some("artisan heritage games"));
        let a = analyzer.analyze(&info);
        let b = analyzer.analyze(&info);
        assert_eq!(a.recommended_style, b.recommended_style);
        assert_eq!(a.style_confidence, b.style_confidence);
        assert_eq!(a.business_keywords, b.business_keywords);
    }
}
