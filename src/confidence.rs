// ABOUTME: Confidence scoring strategies for engine predictions
// ABOUTME: Weighted sample/fit/recency blend plus a simplified coverage formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

//! Confidence scoring.
//!
//! Confidence here is an engine-internal [0, 1] heuristic, not a statistical
//! confidence interval. Two strategies exist deliberately:
//!
//! - [`prediction_confidence`] blends sample size, model fit, and data
//!   recency; it backs every regression-based prediction.
//! - [`coverage_confidence`] scales sample count against a target with a
//!   ceiling; it backs the aggregation-style analyzers (optimal sets,
//!   optimal time), which have no model fit to score.

#![allow(clippy::cast_precision_loss)] // Safe: sample counts are tens of points

use crate::config::ConfidenceWeights;

/// Confidence of a regression-backed prediction.
///
/// `recency_days` is passed in by callers as
/// `recency_window_days - days_since_last_workout`, so a workout gap beyond
/// the window contributes negatively. The weighted sum can therefore dip
/// below zero for very stale data; the final value is clamped to [0, 1].
#[must_use]
pub fn prediction_confidence(
    sample_count: usize,
    r_squared: f64,
    recency_days: f64,
    weights: &ConfidenceWeights,
) -> f64 {
    let quantity_score = (sample_count as f64 / weights.full_quantity_points).min(1.0);
    let fit_score = r_squared.max(0.0);
    let recency_score = (recency_days / weights.recency_window_days).min(1.0);

    weights
        .quantity_weight
        .mul_add(
            quantity_score,
            weights
                .fit_weight
                .mul_add(fit_score, weights.recency_weight * recency_score),
        )
        .clamp(0.0, 1.0)
}

/// Confidence of an aggregation-style analysis: `min(n / target, 1) * ceiling`
#[must_use]
pub fn coverage_confidence(sample_count: usize, sample_target: f64, ceiling: f64) -> f64 {
    (sample_count as f64 / sample_target).min(1.0) * ceiling
}
