// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo download endpoint: re-serves stored artifacts, re-fetching and
//! transcoding remote images on demand

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use super::errors::ApiError;
use super::http_server::AppState;
use crate::generation::store::LogoArtifact;
use crate::imaging;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadFormat {
    Png,
    Jpg,
    Svg,
}

impl DownloadFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpg),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpg => "image/jpeg",
            Self::Svg => "image/svg+xml",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Svg => "svg",
        }
    }
}

fn file_response(logo_id: &str, format: DownloadFormat, bytes: Vec<u8>) -> Response {
    let filename = format!("{}.{}", logo_id, format.extension());
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format.media_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response()
}

fn transcode(bytes: &[u8], format: DownloadFormat) -> Result<Vec<u8>, ApiError> {
    let result = match format {
        DownloadFormat::Png => imaging::to_png(bytes),
        DownloadFormat::Jpg => imaging::to_jpeg(bytes),
        DownloadFormat::Svg => unreachable!("svg is never transcoded"),
    };
    result.map_err(|e| {
        warn!("Transcoding failed: {}", e);
        ApiError::InternalError(format!("could not convert image: {}", e))
    })
}

/// GET /api/v1/logo/:id/download/:format
pub async fn download_logo_handler(
    State(state): State<AppState>,
    Path((logo_id, format)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let format = DownloadFormat::parse(&format).ok_or_else(|| {
        ApiError::InvalidRequest(format!("format must be png, jpg, or svg, got '{}'", format))
    })?;

    let stored = state.store.get(&logo_id).await.ok_or_else(|| {
        ApiError::NotFound(format!(
            "logo '{}' not found; it may have expired or the id is incorrect",
            logo_id
        ))
    })?;

    debug!("Serving logo {} as {}", logo_id, format.extension());

    match (stored.artifact, format) {
        (LogoArtifact::Svg(markup), DownloadFormat::Svg) => {
            Ok(file_response(&logo_id, format, markup.into_bytes()))
        }
        (LogoArtifact::Svg(_), _) => Err(ApiError::InvalidRequest(
            "template logos are only available as svg".to_string(),
        )),
        (LogoArtifact::Png(bytes), DownloadFormat::Png) => {
            Ok(file_response(&logo_id, format, bytes))
        }
        (LogoArtifact::Png(bytes), DownloadFormat::Jpg) => {
            Ok(file_response(&logo_id, format, transcode(&bytes, format)?))
        }
        (LogoArtifact::Png(_), DownloadFormat::Svg) => Err(ApiError::InvalidRequest(
            "this logo has no svg form".to_string(),
        )),
        (LogoArtifact::RemoteUrl(_), DownloadFormat::Svg) => Err(ApiError::InvalidRequest(
            "this logo has no svg form".to_string(),
        )),
        (LogoArtifact::RemoteUrl(url), format) => {
            let bytes = fetch_remote(&state, &url).await?;
            Ok(file_response(&logo_id, format, transcode(&bytes, format)?))
        }
    }
}

/// Re-fetch a provider-hosted image for transcoding
async fn fetch_remote(state: &AppState, url: &str) -> Result<Vec<u8>, ApiError> {
    debug!("Re-fetching remote logo image {}", url);
    let response = state
        .http
        .get(url)
        .send()
        .await
        .map_err(|e| ApiError::ProviderError(format!("could not fetch image: {}", e)))?;

    if !response.status().is_success() {
        return Err(ApiError::ProviderError(format!(
            "image host returned {}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::ProviderError(format!("could not read image: {}", e)))?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!(DownloadFormat::parse("png"), Some(DownloadFormat::Png));
        assert_eq!(DownloadFormat::parse("JPG"), Some(DownloadFormat::Jpg));
        assert_eq!(DownloadFormat::parse("jpeg"), Some(DownloadFormat::Jpg));
        assert_eq!(DownloadFormat::parse("svg"), Some(DownloadFormat::Svg));
        assert_eq!(DownloadFormat::parse("webp"), None);
    }

    #[test]
    fn test_media_types() {
        assert_eq!(DownloadFormat::Png.media_type(), "image/png");
        assert_eq!(DownloadFormat::Jpg.media_type(), "image/jpeg");
        assert_eq!(DownloadFormat::Svg.media_type(), "image/svg+xml");
    }
}
