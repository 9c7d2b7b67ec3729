// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Client side of the generation flow: the API SDK, the form session
//! state machine, and per-result image handling

pub mod api;
pub mod image;
pub mod session;

pub use api::{ClientError, LogoClient, ServiceStatus};
pub use image::{ImageSlot, LoadOutcome, PLACEHOLDER_SVG};
pub use session::{
    classify_error, ErrorKind, FieldError, FormSession, SessionPhase, SubmitError,
    UserFacingError, DEFAULT_VARIATIONS,
};
