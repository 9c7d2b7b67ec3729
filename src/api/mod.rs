// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analyze;
pub mod download;
pub mod errors;
pub mod feedback;
pub mod generate_logos;
pub mod http_server;
pub mod ws;

pub use analyze::{analyze_business_handler, AnalyzeResponse};
pub use download::{download_logo_handler, DownloadFormat};
pub use errors::{ApiError, ErrorResponse};
pub use feedback::{feedback_handler, FeedbackResponse, LogoFeedback};
pub use generate_logos::{generate_logos_handler, GenerateLogosResponse, GenerationData};
pub use http_server::{build_router, start_server, AppState};
