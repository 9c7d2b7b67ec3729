// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server: router, CORS, and the small status endpoints

use axum::{
    extract::State,
    http::HeaderValue,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::analyze::analyze_business_handler;
use super::download::download_logo_handler;
use super::feedback::feedback_handler;
use super::generate_logos::generate_logos_handler;
use super::ws::progress_ws_handler;
use crate::analyzer::{AnalyzerTables, BusinessAnalyzer};
use crate::cache::MemoryCache;
use crate::config::NodeConfig;
use crate::generation::provider::LogoProvider;
use crate::generation::store::LogoStore;
use crate::generation::template::TemplateSvgProvider;
use crate::throttle::RequestThrottle;
use crate::version;

/// Shared handler dependencies. Everything is injected here explicitly;
/// no process-wide globals.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<NodeConfig>,
    pub provider: Arc<dyn LogoProvider>,
    pub cache: Arc<MemoryCache>,
    pub throttle: Arc<RequestThrottle>,
    pub store: Arc<LogoStore>,
    pub analyzer: Arc<BusinessAnalyzer>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: NodeConfig, provider: Arc<dyn LogoProvider>) -> Self {
        let cache = Arc::new(MemoryCache::new());
        let throttle = Arc::new(RequestThrottle::new(
            config.throttle.max_requests,
            Duration::from_secs(config.throttle.window_secs),
        ));
        let store = Arc::new(LogoStore::new(
            cache.clone(),
            Duration::from_secs(config.cache.logo_ttl_secs),
        ));
        let analyzer = Arc::new(BusinessAnalyzer::new(AnalyzerTables::default()));

        Self {
            config: Arc::new(config),
            provider,
            cache,
            throttle,
            store,
            analyzer,
            http: reqwest::Client::new(),
        }
    }

    /// State wired with the template provider and default configuration
    pub fn new_for_test() -> Self {
        Self::new(NodeConfig::default(), Arc::new(TemplateSvgProvider::new()))
    }
}

/// Assemble the full route table
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(root_handler))
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/analyze-business", post(analyze_business_handler))
        .route("/api/v1/generate-logos", post(generate_logos_handler))
        .route(
            "/api/v1/logo/:id/download/:format",
            get(download_logo_handler),
        )
        .route("/api/v1/feedback", post(feedback_handler))
        .route("/api/v1/user/logos", get(user_logos_handler))
        .route("/api/v1/statistics", get(statistics_handler))
        .route("/ws/generation-progress", get(progress_ws_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &NodeConfig) -> CorsLayer {
    if config.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring unparseable CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let addr: SocketAddr = state.config.api_addr.parse()?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}

/// GET / — the status probe the client's connected indicator polls
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "message": "LogoAI Node",
        "version": version::VERSION_NUMBER,
        "status": "healthy",
        "provider": state.provider.model_name(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// GET /api/v1/health — richer readiness payload
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "healthy",
        "version": version::VERSION_NUMBER,
        "build": version::VERSION,
        "provider": state.provider.model_name(),
        "features": version::FEATURES,
        "cache_entries": state.cache.entry_count().await,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// GET /api/v1/user/logos — history is not persisted; a stubbed empty
/// list keeps the contract shape
async fn user_logos_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "success": true,
        "data": {
            "logos": [],
            "total_count": 0,
        }
    }))
}

/// GET /api/v1/statistics — fixed platform usage numbers
async fn statistics_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "success": true,
        "data": {
            "total_logos_generated": 15_847,
            "active_users_today": 342,
            "average_generation_time": 2.3,
            "user_satisfaction": 4.6,
            "popular_styles": {
                "modern": 45,
                "professional": 28,
                "playful": 15,
                "elegant": 12,
            }
        }
    }))
}
