// ABOUTME: Weekly strength velocity analysis from a pure linear fit
// ABOUTME: Reports kg/week slope, slope-threshold trend, and 4-/8-week forecasts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::confidence::prediction_confidence;
use crate::config::ProgressionConfig;
use crate::errors::{AppResult, ErrorCode};
use crate::models::{ExerciseDataPoint, ProgressionAnalysis, TrendDirection};
use crate::statistics::{linear_fit, LinearFit};

const SECONDS_PER_WEEK: f64 = 604_800.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Analyzes weekly strength velocity from the 1RM trajectory
pub struct ProgressionRateAnalyzer<'a> {
    config: &'a ProgressionConfig,
}

impl<'a> ProgressionRateAnalyzer<'a> {
    /// Create an analyzer with the given configuration
    #[must_use]
    pub const fn new(config: &'a ProgressionConfig) -> Self {
        Self { config }
    }

    /// Report weekly strength velocity and short-horizon forecasts.
    ///
    /// Unlike the max-lift predictor this always uses a pure linear fit, with
    /// the independent variable in weeks since the first workout: the slope
    /// is the reported velocity. Returns `Ok(None)` below the configured
    /// minimum of data points.
    ///
    /// # Errors
    ///
    /// Never errors on degenerate series; a zero-variance time axis falls
    /// back to a flat, zero-fit model.
    pub fn analyze(
        &self,
        points: &[ExerciseDataPoint],
        now: DateTime<Utc>,
    ) -> AppResult<Option<ProgressionAnalysis>> {
        if points.len() < self.config.data.min_data_points {
            return Ok(None);
        }

        let first = points[0].date;
        let xs: Vec<f64> = points
            .iter()
            .map(|p| (p.date - first).num_seconds() as f64 / SECONDS_PER_WEEK)
            .collect();
        let ys: Vec<f64> = points.iter().map(|p| p.one_rep_max).collect();

        let fit = match linear_fit(&xs, &ys) {
            Ok(fit) => fit,
            Err(e) if e.code == ErrorCode::InvalidInput => {
                warn!("degenerate 1RM series, using flat model: {e}");
                LinearFit::flat(&ys)
            }
            Err(e) => return Err(e),
        };

        let current_week = xs.last().copied().unwrap_or(0.0);
        let short_horizon = fit
            .predict(current_week + self.config.windows.short_forecast_weeks)
            .max(0.0);
        let long_horizon = fit
            .predict(current_week + self.config.windows.long_forecast_weeks)
            .max(0.0);

        let last = &points[points.len() - 1];
        let days_since_last = (now - last.date).num_seconds() as f64 / SECONDS_PER_DAY;
        let recency_days = self.config.confidence.recency_window_days - days_since_last;
        let confidence = prediction_confidence(
            points.len(),
            fit.r_squared,
            recency_days,
            &self.config.confidence,
        );

        Ok(Some(ProgressionAnalysis {
            velocity_per_week: round_decimals(fit.slope, 2),
            current_one_rep_max: round_decimals(last.one_rep_max, 1),
            predicted_one_rep_max_in_4_weeks: round_decimals(short_horizon, 1),
            predicted_one_rep_max_in_8_weeks: round_decimals(long_horizon, 1),
            confidence,
            trend: velocity_trend(fit.slope, self.config.windows.velocity_stable_band),
        }))
    }
}

/// Classify the trend from the fitted weekly slope against a fixed band:
/// above the band is increasing, below its negative is decreasing, otherwise
/// stable. A coarser rule than [`crate::max_lift::window_trend`], kept
/// separate on purpose.
#[must_use]
pub fn velocity_trend(slope_per_week: f64, stable_band: f64) -> TrendDirection {
    if slope_per_week > stable_band {
        TrendDirection::Increasing
    } else if slope_per_week < -stable_band {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

fn round_decimals(value: f64, places: i32) -> f64 {
    let factor = 10.0_f64.powi(places);
    (value * factor).round() / factor
}
