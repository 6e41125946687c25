// ABOUTME: Tests for the one-rep-max forecaster and its window trend rule
// ABOUTME: Covers the minimum-data gate, forecast math, confidence bounds, and engine wiring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use chrono::Duration;
use progression_engine::config::ProgressionConfig;
use progression_engine::data_points::extract_data_points;
use progression_engine::max_lift::{window_trend, MaxLiftPredictor};
use progression_engine::{ExerciseDataPoint, ProgressionEngine, TrendDirection};
use uuid::Uuid;

use common::{base_date, weekly_history, InMemoryWorkoutStore};

fn weekly_points(weights: &[f64]) -> Vec<ExerciseDataPoint> {
    let exercise = Uuid::new_v4();
    // Single-rep sets make the Epley estimate equal the weight itself
    let sessions = weekly_history(Uuid::new_v4(), Uuid::new_v4(), exercise, weights, 1, 7);
    extract_data_points(&sessions, exercise)
}

#[test]
fn test_linear_progression_forecast_four_weeks_out() {
    let points = weekly_points(&[100.0, 102.0, 104.0, 106.0, 108.0]);
    let now = points[points.len() - 1].date;
    let config = ProgressionConfig::default();

    let result = MaxLiftPredictor::new(&config)
        .predict(&points, now)
        .unwrap()
        .unwrap();

    // Slope 2 kg per 7 days extended 28 days past the last point: 108 + 8
    assert!((result.predicted_one_rep_max - 116.0).abs() < 1e-6);
    assert_eq!(result.trend, TrendDirection::Increasing);
    assert!(result.error_bound.abs() < 1e-6);
}

#[test]
fn test_confidence_for_fresh_perfect_fit() {
    let points = weekly_points(&[100.0, 102.0, 104.0, 106.0, 108.0]);
    let now = points[points.len() - 1].date;
    let config = ProgressionConfig::default();

    let result = MaxLiftPredictor::new(&config)
        .predict(&points, now)
        .unwrap()
        .unwrap();

    // 0.3 * (5/20) + 0.5 * 1.0 + 0.2 * 1.0
    assert!((result.confidence - 0.775).abs() < 1e-9);
}

#[test]
fn test_below_minimum_data_points_returns_none() {
    let points = weekly_points(&[100.0, 102.0, 104.0, 106.0]);
    let config = ProgressionConfig::default();

    let result = MaxLiftPredictor::new(&config)
        .predict(&points, base_date())
        .unwrap();

    assert!(result.is_none());
}

#[test]
fn test_stale_history_confidence_stays_in_unit_interval() {
    let points = weekly_points(&[100.0, 102.0, 104.0, 106.0, 108.0]);
    let now = points[points.len() - 1].date + Duration::days(1000);
    let config = ProgressionConfig::default();

    let result = MaxLiftPredictor::new(&config)
        .predict(&points, now)
        .unwrap()
        .unwrap();

    assert!((0.0..=1.0).contains(&result.confidence));
    // Quantity and fit components survive the stale recency penalty
    assert!(result.confidence > 0.0);
}

#[test]
fn test_prediction_is_deterministic_for_same_inputs() {
    let points = weekly_points(&[60.0, 62.5, 61.0, 64.0, 65.0, 66.5]);
    let now = points[points.len() - 1].date + Duration::days(3);
    let config = ProgressionConfig::default();
    let predictor = MaxLiftPredictor::new(&config);

    let first = predictor.predict(&points, now).unwrap().unwrap();
    let second = predictor.predict(&points, now).unwrap().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_prediction_never_negative_on_steep_decline() {
    let points = weekly_points(&[100.0, 80.0, 60.0, 40.0, 20.0]);
    let now = points[points.len() - 1].date;
    let config = ProgressionConfig::default();

    let result = MaxLiftPredictor::new(&config)
        .predict(&points, now)
        .unwrap()
        .unwrap();

    assert!(result.predicted_one_rep_max >= 0.0);
    assert_eq!(result.trend, TrendDirection::Decreasing);
}

#[test]
fn test_flat_series_predicts_current_level() {
    let points = weekly_points(&[90.0, 90.0, 90.0, 90.0, 90.0]);
    let now = points[points.len() - 1].date;
    let config = ProgressionConfig::default();

    let result = MaxLiftPredictor::new(&config)
        .predict(&points, now)
        .unwrap()
        .unwrap();

    assert!((result.predicted_one_rep_max - 90.0).abs() < 1e-6);
    assert_eq!(result.trend, TrendDirection::Stable);
    assert!(!result.confidence.is_nan());
}

#[test]
fn test_window_trend_uses_recent_points_only() {
    // Early decline followed by a recent climb within the window
    let points = weekly_points(&[120.0, 110.0, 100.0, 101.0, 102.0, 103.0, 104.0, 105.0]);

    assert_eq!(window_trend(&points, 5), TrendDirection::Increasing);
}

#[test]
fn test_window_trend_with_single_point_is_stable() {
    let points = weekly_points(&[100.0]);

    assert_eq!(window_trend(&points, 5), TrendDirection::Stable);
}

#[tokio::test]
async fn test_engine_predicts_from_store_history() {
    let user = Uuid::new_v4();
    let tenant = Uuid::new_v4();
    let exercise = Uuid::new_v4();
    let sessions = weekly_history(
        user,
        tenant,
        exercise,
        &[100.0, 102.0, 104.0, 106.0, 108.0],
        1,
        7,
    );
    let engine = ProgressionEngine::new(Arc::new(InMemoryWorkoutStore::new(sessions)));

    let result = engine
        .predict_max_lift(exercise, user, tenant)
        .await
        .unwrap()
        .unwrap();

    assert!((result.predicted_one_rep_max - 116.0).abs() < 1e-6);
    assert_eq!(result.trend, TrendDirection::Increasing);
    assert!((0.0..=1.0).contains(&result.confidence));
}

#[tokio::test]
async fn test_engine_reports_not_found_for_unknown_exercise() {
    let user = Uuid::new_v4();
    let tenant = Uuid::new_v4();
    let exercise = Uuid::new_v4();
    let sessions = weekly_history(user, tenant, exercise, &[100.0, 102.0], 5, 7);
    let engine = ProgressionEngine::new(Arc::new(InMemoryWorkoutStore::new(sessions)));

    let error = engine
        .predict_max_lift(Uuid::new_v4(), user, tenant)
        .await
        .unwrap_err();

    assert!(error.is_not_found());
}

#[tokio::test]
async fn test_engine_isolates_tenants() {
    let user = Uuid::new_v4();
    let tenant = Uuid::new_v4();
    let exercise = Uuid::new_v4();
    let sessions = weekly_history(
        user,
        tenant,
        exercise,
        &[100.0, 102.0, 104.0, 106.0, 108.0],
        1,
        7,
    );
    let engine = ProgressionEngine::new(Arc::new(InMemoryWorkoutStore::new(sessions)));

    // Same exercise queried under a different tenant resolves to nothing
    let error = engine
        .predict_max_lift(exercise, user, Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(error.is_not_found());
}
