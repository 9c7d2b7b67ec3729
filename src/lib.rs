// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analyzer;
pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod generation;
pub mod imaging;
pub mod throttle;
pub mod version;

// Re-export main types
pub use analyzer::{AnalyzerTables, BusinessAnalysis, BusinessAnalyzer};
pub use api::{build_router, start_server, ApiError, AppState, ErrorResponse};
pub use cache::MemoryCache;
pub use client::{FormSession, LogoClient, SessionPhase};
pub use config::NodeConfig;
pub use generation::{
    BusinessInfo, DalleClient, GeneratedLogo, GenerationJob, GenerationStats,
    LogoGenerationRequest, LogoProvider, LogoStore, LogoStyle, ProviderError, ProviderKind,
    ProviderOutput, TemplateSvgProvider, VertexImagenClient,
};
pub use throttle::RequestThrottle;
