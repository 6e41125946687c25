// ABOUTME: Typed configuration for the progression engine replacing magic numbers
// ABOUTME: Environment-overridable thresholds, confidence weights, and analysis windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

//! # Progression Engine Configuration
//!
//! Every tunable threshold the analyzers share lives here under one
//! well-documented roof: the minimum-data gate, the quadratic-model
//! acceptance floor, the confidence weights, and the analysis windows.
//! Defaults match the documented engine behavior; individual values can be
//! overridden through `PROGRESSION_*` environment variables.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

static PROGRESSION_CONFIG: OnceLock<ProgressionConfig> = OnceLock::new();

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment override could not be parsed
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    /// The assembled configuration is inconsistent
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Minimum-data requirements for the analyzers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataRequirements {
    /// Minimum per-exercise data points before any prediction is attempted
    pub min_data_points: usize,
    /// Minimum completed sessions before training-time analysis is attempted
    pub min_sessions_for_time_analysis: usize,
    /// Minimum samples an hour/day bucket needs to be eligible for selection
    pub min_bucket_samples: usize,
}

/// Regression model selection thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSelection {
    /// Minimum R-squared the quadratic model must reach to displace the
    /// linear model. Guards against over-fitting a curve to few points.
    pub quadratic_r2_floor: f64,
}

/// Weights and scales of the shared prediction-confidence formula.
///
/// `confidence = quantity_weight * min(n / full_quantity_points, 1)
///             + fit_weight * max(0, r_squared)
///             + recency_weight * min(recency_days / recency_window_days, 1)`
///
/// clamped to [0, 1]. Callers pass `recency_days = recency_window_days -
/// days_since_last_workout`, so confidence decays once the most recent
/// workout recedes beyond the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceWeights {
    /// Weight of the sample-size component
    pub quantity_weight: f64,
    /// Weight of the model-fit component
    pub fit_weight: f64,
    /// Weight of the data-recency component
    pub recency_weight: f64,
    /// Sample count at which the quantity component saturates
    pub full_quantity_points: f64,
    /// Recency window in days
    pub recency_window_days: f64,
}

/// Scales of the simplified coverage-confidence formula used by the
/// aggregation-style analyzers, which have no model fit to score:
/// `confidence = min(n / target, 1) * ceiling`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageConfidence {
    /// Data points at which set-recommendation confidence saturates
    pub sets_sample_target: f64,
    /// Ceiling of set-recommendation confidence
    pub sets_ceiling: f64,
    /// Sessions at which training-time confidence saturates
    pub time_sample_target: f64,
    /// Ceiling of training-time confidence
    pub time_ceiling: f64,
}

/// Analysis window sizes and forecast horizons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisWindows {
    /// Number of most recent points used for trend classification
    pub trend_window: usize,
    /// Number of most recent points used for volume/rep-range analysis
    pub recent_points: usize,
    /// Number of most recent session logs sampled for set counts
    pub recent_session_logs: usize,
    /// Maximum completed sessions scanned for training-time analysis
    pub session_scan_limit: usize,
    /// Max-lift forecast horizon in days past the most recent workout
    pub forecast_horizon_days: f64,
    /// Short progression forecast horizon in weeks
    pub short_forecast_weeks: f64,
    /// Long progression forecast horizon in weeks
    pub long_forecast_weeks: f64,
    /// Slope band (kg/week) inside which a trend counts as stable
    pub velocity_stable_band: f64,
    /// Set count recommended when no completed-set sample exists
    pub default_set_count: u32,
}

/// Root configuration for the progression engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Minimum-data requirements
    pub data: DataRequirements,
    /// Regression model selection
    pub model: ModelSelection,
    /// Shared prediction-confidence formula
    pub confidence: ConfidenceWeights,
    /// Simplified coverage-confidence formula
    pub coverage: CoverageConfidence,
    /// Analysis windows and horizons
    pub windows: AnalysisWindows,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            data: DataRequirements {
                min_data_points: 5,
                min_sessions_for_time_analysis: 5,
                min_bucket_samples: 2,
            },
            model: ModelSelection {
                quadratic_r2_floor: 0.5,
            },
            confidence: ConfidenceWeights {
                quantity_weight: 0.3,
                fit_weight: 0.5,
                recency_weight: 0.2,
                full_quantity_points: 20.0,
                recency_window_days: 30.0,
            },
            coverage: CoverageConfidence {
                sets_sample_target: 15.0,
                sets_ceiling: 0.85,
                time_sample_target: 30.0,
                time_ceiling: 0.8,
            },
            windows: AnalysisWindows {
                trend_window: 5,
                recent_points: 10,
                recent_session_logs: 10,
                session_scan_limit: 100,
                forecast_horizon_days: 28.0,
                short_forecast_weeks: 4.0,
                long_forecast_weeks: 8.0,
                velocity_stable_band: 0.5,
                default_set_count: 3,
            },
        }
    }
}

impl ProgressionConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        PROGRESSION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load progression config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains an unparsable
    /// value or the resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        env_override("PROGRESSION_MIN_DATA_POINTS", &mut self.data.min_data_points)?;
        env_override(
            "PROGRESSION_QUADRATIC_R2_FLOOR",
            &mut self.model.quadratic_r2_floor,
        )?;
        env_override(
            "PROGRESSION_RECENCY_WINDOW_DAYS",
            &mut self.confidence.recency_window_days,
        )?;
        env_override(
            "PROGRESSION_SESSION_SCAN_LIMIT",
            &mut self.windows.session_scan_limit,
        )?;
        env_override(
            "PROGRESSION_MIN_BUCKET_SAMPLES",
            &mut self.data.min_bucket_samples,
        )?;
        Ok(())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistency found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.min_data_points < 2 {
            return Err(ConfigError::ValidationFailed(
                "min_data_points must be at least 2".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.model.quadratic_r2_floor) {
            return Err(ConfigError::ValidationFailed(
                "quadratic_r2_floor must be within [0, 1]".into(),
            ));
        }
        let weight_sum = self.confidence.quantity_weight
            + self.confidence.fit_weight
            + self.confidence.recency_weight;
        if (weight_sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::ValidationFailed(format!(
                "confidence weights must sum to 1.0, got {weight_sum}"
            )));
        }
        for (name, weight) in [
            ("quantity_weight", self.confidence.quantity_weight),
            ("fit_weight", self.confidence.fit_weight),
            ("recency_weight", self.confidence.recency_weight),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(ConfigError::ValidationFailed(format!(
                    "{name} must be within [0, 1]"
                )));
            }
        }
        if self.confidence.full_quantity_points <= 0.0
            || self.confidence.recency_window_days <= 0.0
        {
            return Err(ConfigError::ValidationFailed(
                "confidence scales must be positive".into(),
            ));
        }
        for (name, value) in [
            ("sets_ceiling", self.coverage.sets_ceiling),
            ("time_ceiling", self.coverage.time_ceiling),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed(format!(
                    "{name} must be within [0, 1]"
                )));
            }
        }
        if self.coverage.sets_sample_target <= 0.0 || self.coverage.time_sample_target <= 0.0 {
            return Err(ConfigError::ValidationFailed(
                "coverage sample targets must be positive".into(),
            ));
        }
        if self.windows.trend_window < 2 {
            return Err(ConfigError::ValidationFailed(
                "trend_window must be at least 2".into(),
            ));
        }
        if self.windows.velocity_stable_band < 0.0 {
            return Err(ConfigError::ValidationFailed(
                "velocity_stable_band must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

/// Overwrite `target` from the environment variable `key` when it is set
fn env_override<T>(key: &str, target: &mut T) -> Result<(), ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    if let Ok(raw) = std::env::var(key) {
        *target = raw
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue(key.to_owned(), e.to_string()))?;
    }
    Ok(())
}
