// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Form session state: idle → submitting → (ready | failed) → idle.
//! Holds the results list, the favorites set, and the connected flag.

use std::collections::HashSet;

use crate::generation::types::{
    BusinessInfo, GeneratedLogo, GenerationStats, LogoGenerationRequest, LogoStyle,
};

/// Every submission requests this many variations
pub const DEFAULT_VARIATIONS: u32 = 2;

const DEFAULT_STYLE: &str = "modern";
const DEFAULT_PALETTE: [&str; 2] = ["#3B82F6", "#1E40AF"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Submitting,
    Ready,
    Failed,
}

/// Inline errors surfaced before any network call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    MissingBusinessName,
    MissingIndustry,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingBusinessName => "Please enter your business name.",
            Self::MissingIndustry => "Please select an industry.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// A submission is already in flight from this session
    AlreadySubmitting,
    Field(FieldError),
}

/// Failure classes recognized in error message text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RateLimited,
    Authentication,
    Connectivity,
    ServerError,
    Other,
}

/// Classify an error by matching known substrings, the way the form
/// decides which banner to show
pub fn classify_error(message: &str) -> ErrorKind {
    let lower = message.to_lowercase();
    if lower.contains("429") || lower.contains("rate limit") {
        ErrorKind::RateLimited
    } else if lower.contains("authentication") || lower.contains("401") || lower.contains("api key")
    {
        ErrorKind::Authentication
    } else if lower.contains("failed to fetch")
        || lower.contains("connect")
        || lower.contains("network")
    {
        ErrorKind::Connectivity
    } else if lower.contains("500") || lower.contains("502") || lower.contains("internal") {
        ErrorKind::ServerError
    } else {
        ErrorKind::Other
    }
}

/// The tailored message shown for a failed submission
#[derive(Debug, Clone, PartialEq)]
pub struct UserFacingError {
    pub kind: ErrorKind,
    pub message: String,
}

impl UserFacingError {
    fn from_raw(raw: &str) -> Self {
        let kind = classify_error(raw);
        let message = match kind {
            ErrorKind::RateLimited => {
                "You're generating logos too quickly. Please wait a moment and try again."
                    .to_string()
            }
            ErrorKind::Authentication => {
                "The image service rejected our credentials. Check the provider API key."
                    .to_string()
            }
            ErrorKind::Connectivity => {
                "Could not reach the logo service. Check your connection and try again."
                    .to_string()
            }
            ErrorKind::ServerError => {
                "The logo service hit an internal error. Please try again in a minute."
                    .to_string()
            }
            ErrorKind::Other => raw.to_string(),
        };
        Self { kind, message }
    }
}

/// Client-side controller for the generation form
#[derive(Debug, Clone)]
pub struct FormSession {
    pub business_name: String,
    pub industry: String,
    pub description: String,
    pub target_audience: String,
    pub style: LogoStyle,
    phase: SessionPhase,
    logos: Vec<GeneratedLogo>,
    stats: Option<GenerationStats>,
    favorites: HashSet<String>,
    connected: bool,
    last_error: Option<UserFacingError>,
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            business_name: String::new(),
            industry: String::new(),
            description: String::new(),
            target_audience: String::new(),
            style: LogoStyle {
                style_type: DEFAULT_STYLE.to_string(),
                color_palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
                font_preference: Some("sans-serif".to_string()),
            },
            phase: SessionPhase::Idle,
            logos: Vec::new(),
            stats: None,
            favorites: HashSet::new(),
            connected: true,
            last_error: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SessionPhase::Submitting
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn logos(&self) -> &[GeneratedLogo] {
        &self.logos
    }

    pub fn stats(&self) -> Option<&GenerationStats> {
        self.stats.as_ref()
    }

    pub fn last_error(&self) -> Option<&UserFacingError> {
        self.last_error.as_ref()
    }

    /// Required-field check; runs before any request is constructed
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.business_name.trim().is_empty() {
            return Err(FieldError::MissingBusinessName);
        }
        if self.industry.trim().is_empty() {
            return Err(FieldError::MissingIndustry);
        }
        Ok(())
    }

    fn build_request(&self) -> LogoGenerationRequest {
        let optional = |value: &str| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        LogoGenerationRequest {
            business_info: BusinessInfo {
                name: self.business_name.trim().to_string(),
                industry: self.industry.trim().to_string(),
                description: optional(&self.description),
                target_audience: optional(&self.target_audience),
            },
            style: self.style.clone(),
            variations: DEFAULT_VARIATIONS,
            model: None,
        }
    }

    /// Move to Submitting and hand back the request to send. Fails locally
    /// (no network call) on missing fields or a submission already in
    /// flight.
    pub fn begin_submission(&mut self) -> Result<LogoGenerationRequest, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }
        self.validate().map_err(SubmitError::Field)?;
        self.phase = SessionPhase::Submitting;
        self.last_error = None;
        Ok(self.build_request())
    }

    /// Success: the results list is replaced wholesale
    pub fn complete(&mut self, logos: Vec<GeneratedLogo>, stats: GenerationStats) {
        self.logos = logos;
        self.stats = Some(stats);
        self.phase = SessionPhase::Ready;
        self.connected = true;
    }

    /// Failure: classify, store the tailored message, flip the connected
    /// flag on connectivity errors
    pub fn fail(&mut self, raw_error: &str) {
        let error = UserFacingError::from_raw(raw_error);
        if error.kind == ErrorKind::Connectivity {
            self.connected = false;
        }
        self.last_error = Some(error);
        self.phase = SessionPhase::Failed;
    }

    /// Dismiss the error banner and return to idle
    pub fn reset(&mut self) {
        self.phase = SessionPhase::Idle;
        self.last_error = None;
    }

    /// Toggle a logo in the favorites set; returns whether it is now a
    /// favorite. Toggling twice restores the prior state.
    pub fn toggle_favorite(&mut self, logo_id: &str) -> bool {
        if self.favorites.remove(logo_id) {
            false
        } else {
            self.favorites.insert(logo_id.to_string());
            true
        }
    }

    pub fn is_favorite(&self, logo_id: &str) -> bool {
        self.favorites.contains(logo_id)
    }

    pub fn favorites(&self) -> &HashSet<String> {
        &self.favorites
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
