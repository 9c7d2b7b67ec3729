// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo generation: provider strategies, prompt assembly, palette math,
//! SVG templates and the logo store

pub mod dalle;
pub mod palette;
pub mod prompt;
pub mod provider;
pub mod store;
pub mod template;
pub mod types;
pub mod vertex;

pub use dalle::{DalleClient, DEFAULT_DALLE_MODEL, DEFAULT_OPENAI_ENDPOINT};
pub use provider::{
    GenerationJob, LogoProvider, ProviderError, ProviderKind, ProviderOutput,
};
pub use store::{LogoArtifact, LogoStore, StoredLogo};
pub use template::{TemplateSvgProvider, TEMPLATE_MODEL};
pub use types::{
    BusinessInfo, GeneratedLogo, GenerationStats, LogoGenerationRequest, LogoImage, LogoStyle,
    StyleInfo, ValidationFailure,
};
pub use vertex::{VertexImagenClient, DEFAULT_VERTEX_LOCATION, DEFAULT_VERTEX_MODEL};

/// A minimal valid generation request shared by unit tests
#[cfg(test)]
pub fn test_request() -> LogoGenerationRequest {
    LogoGenerationRequest {
        business_info: BusinessInfo {
            name: "Acme".to_string(),
            industry: "Technology".to_string(),
            description: None,
            target_audience: None,
        },
        style: LogoStyle {
            style_type: "modern".to_string(),
            color_palette: vec!["#3B82F6".to_string(), "#1E40AF".to_string()],
            font_preference: Some("sans-serif".to_string()),
        },
        variations: 2,
        model: None,
    }
}
