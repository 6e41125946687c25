// ABOUTME: One-rep-max forecasting four weeks past the most recent workout
// ABOUTME: Model selection over days-since-first-workout with window trend and error bound
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::confidence::prediction_confidence;
use crate::config::ProgressionConfig;
use crate::errors::{AppResult, ErrorCode};
use crate::models::{ExerciseDataPoint, PredictionResult, TrendDirection};
use crate::statistics::{residual_error_bound, select_model, FittedModel, LinearFit};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Forecasts a user's one-rep max by extending the fitted strength trajectory
pub struct MaxLiftPredictor<'a> {
    config: &'a ProgressionConfig,
}

impl<'a> MaxLiftPredictor<'a> {
    /// Create a predictor with the given configuration
    #[must_use]
    pub const fn new(config: &'a ProgressionConfig) -> Self {
        Self { config }
    }

    /// Predict the one-rep max four weeks past the most recent workout.
    ///
    /// Returns `Ok(None)` when the series has fewer than the configured
    /// minimum of data points. The forecast extends the observed trajectory:
    /// the prediction horizon is measured from the last data point, not from
    /// `now`. `now` only feeds the recency component of the confidence score,
    /// so a series analyzed twice with the same inputs yields identical
    /// output.
    ///
    /// # Errors
    ///
    /// Never errors on degenerate series; a zero-variance time axis falls
    /// back to a flat, zero-fit model.
    pub fn predict(
        &self,
        points: &[ExerciseDataPoint],
        now: DateTime<Utc>,
    ) -> AppResult<Option<PredictionResult>> {
        if points.len() < self.config.data.min_data_points {
            return Ok(None);
        }

        let first = points[0].date;
        let xs: Vec<f64> = points
            .iter()
            .map(|p| (p.date - first).num_seconds() as f64 / SECONDS_PER_DAY)
            .collect();
        let ys: Vec<f64> = points.iter().map(|p| p.one_rep_max).collect();

        let model = match select_model(&xs, &ys, self.config.model.quadratic_r2_floor) {
            Ok(model) => model,
            Err(e) if e.code == ErrorCode::InvalidInput => {
                warn!("degenerate 1RM series, using flat model: {e}");
                FittedModel::Linear(LinearFit::flat(&ys))
            }
            Err(e) => return Err(e),
        };

        let last_offset = xs.last().copied().unwrap_or(0.0);
        let predicted = model
            .predict(last_offset + self.config.windows.forecast_horizon_days)
            .max(0.0);

        let last_date = points[points.len() - 1].date;
        let days_since_last = (now - last_date).num_seconds() as f64 / SECONDS_PER_DAY;
        let recency_days = self.config.confidence.recency_window_days - days_since_last;
        let confidence = prediction_confidence(
            points.len(),
            model.r_squared(),
            recency_days,
            &self.config.confidence,
        );

        Ok(Some(PredictionResult {
            predicted_one_rep_max: predicted,
            confidence,
            error_bound: residual_error_bound(&model, &xs, &ys),
            trend: window_trend(points, self.config.windows.trend_window),
        }))
    }
}

/// Classify the trend from the most recent data points only.
///
/// Compares the oldest and newest 1RM within the window: strictly greater is
/// increasing, strictly less is decreasing, equal is stable. Fewer than two
/// points in the window is stable by definition.
///
/// This is deliberately a different rule from
/// [`crate::progression_rate::velocity_trend`]; callers depend on each
/// independently.
#[must_use]
pub fn window_trend(points: &[ExerciseDataPoint], window: usize) -> TrendDirection {
    let start = points.len().saturating_sub(window);
    let slice = &points[start..];
    if slice.len() < 2 {
        return TrendDirection::Stable;
    }

    let oldest = slice[0].one_rep_max;
    let newest = slice[slice.len() - 1].one_rep_max;
    if newest > oldest {
        TrendDirection::Increasing
    } else if newest < oldest {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}
