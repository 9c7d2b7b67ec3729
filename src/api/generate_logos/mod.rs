// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo generation endpoint

pub mod handler;
pub mod response;

pub use handler::generate_logos_handler;
pub use response::{GenerateLogosResponse, GenerationData};

pub use crate::generation::types::{
    BusinessInfo, GeneratedLogo, GenerationStats, LogoGenerationRequest, LogoStyle,
};
