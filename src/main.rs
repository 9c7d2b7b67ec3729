// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use logoai_node::api::{start_server, AppState};
use logoai_node::config::NodeConfig;
use logoai_node::generation::provider::{LogoProvider, ProviderKind};
use logoai_node::generation::{DalleClient, TemplateSvgProvider, VertexImagenClient};
use logoai_node::version;

/// LogoAI Node: logo generation service
#[derive(Parser, Debug)]
#[command(name = "logoai-node")]
#[command(version = version::VERSION_NUMBER)]
#[command(about = "AI-backed logo generation service", long_about = None)]
struct Args {
    /// Optional TOML config file; environment variables are used otherwise
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the bind address (e.g. 127.0.0.1:9000)
    #[arg(long, env = "API_ADDR")]
    api_addr: Option<String>,

    /// Override the provider: template, dalle, or vertex
    #[arg(long, env = "LOGO_PROVIDER")]
    provider: Option<String>,
}

fn build_provider(config: &NodeConfig) -> Result<Arc<dyn LogoProvider>> {
    match config.provider_kind()? {
        ProviderKind::Template => Ok(Arc::new(TemplateSvgProvider::new())),
        ProviderKind::Dalle => {
            if config.openai.api_key.is_empty() {
                anyhow::bail!("OPENAI_API_KEY is required for the dalle provider");
            }
            let client = DalleClient::new(
                &config.openai.endpoint,
                &config.openai.api_key,
                &config.openai.model,
            )?;
            Ok(Arc::new(client))
        }
        ProviderKind::Vertex => {
            if config.vertex.project.is_empty() {
                anyhow::bail!("GOOGLE_CLOUD_PROJECT is required for the vertex provider");
            }
            if config.vertex.access_token.is_empty() {
                anyhow::bail!("VERTEX_ACCESS_TOKEN is required for the vertex provider");
            }
            let client = VertexImagenClient::new(
                &config.vertex.project,
                &config.vertex.location,
                &config.vertex.access_token,
                &config.vertex.model,
            )?;
            Ok(Arc::new(client))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => NodeConfig::from_file(path)?,
        None => NodeConfig::from_env(),
    };
    if let Some(api_addr) = args.api_addr {
        config.api_addr = api_addr;
    }
    if let Some(provider) = args.provider {
        config.provider = provider;
    }

    info!("Starting {}", version::get_version_string());
    info!(
        "Provider: {}, bind address: {}",
        config.provider, config.api_addr
    );

    let provider = build_provider(&config)?;
    let state = AppState::new(config, provider);

    start_server(state).await
}
