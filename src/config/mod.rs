// ABOUTME: Configuration module for the progression engine
// ABOUTME: Re-exports the typed engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

/// Progression engine configuration (thresholds, weights, analysis windows)
pub mod progression;

pub use progression::{
    AnalysisWindows, ConfidenceWeights, ConfigError, CoverageConfidence, DataRequirements,
    ModelSelection, ProgressionConfig,
};
