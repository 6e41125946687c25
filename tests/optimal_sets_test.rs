// ABOUTME: Tests for the sets/reps/weight recommender and rep-range bucketing
// ABOUTME: Validates volume bucket selection, set-count sampling, and weight rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::cast_possible_wrap)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use chrono::Duration;
use progression_engine::config::ProgressionConfig;
use progression_engine::data_points::extract_data_points;
use progression_engine::optimal_sets::{OptimalSetsRecommender, RepRange};
use progression_engine::{ProgressionEngine, WorkoutSession};
use uuid::Uuid;

use common::{base_date, session, weekly_history, InMemoryWorkoutStore};

fn history(specs: &[(f64, u32, usize)]) -> (Vec<WorkoutSession>, Uuid, Uuid, Uuid) {
    let user = Uuid::new_v4();
    let tenant = Uuid::new_v4();
    let exercise = Uuid::new_v4();
    let sessions = specs
        .iter()
        .enumerate()
        .map(|(i, &(weight, reps, sets))| {
            let pairs: Vec<(f64, u32)> = vec![(weight, reps); sets];
            session(
                user,
                tenant,
                exercise,
                base_date() + Duration::days(7 * i as i64),
                &pairs,
            )
        })
        .collect();
    (sessions, user, tenant, exercise)
}

#[test]
fn test_highest_volume_rep_range_wins() {
    // 9-12 rep sessions carry more volume than the heavier low-rep ones
    let (sessions, _, _, exercise) = history(&[
        (100.0, 10, 1),
        (120.0, 5, 1),
        (100.0, 10, 1),
        (120.0, 5, 1),
        (100.0, 10, 1),
    ]);
    let points = extract_data_points(&sessions, exercise);
    let config = ProgressionConfig::default();

    let result = OptimalSetsRecommender::new(&config)
        .recommend(&points, &sessions, exercise)
        .unwrap();

    assert_eq!(result.recommended_reps, 10);
    assert!(result.reasoning.contains("9-12"));
}

#[test]
fn test_strength_range_wins_on_volume() {
    // Low-rep sessions here move more total weight per session
    let (sessions, _, _, exercise) = history(&[
        (150.0, 5, 4),
        (60.0, 12, 1),
        (150.0, 5, 4),
        (60.0, 12, 1),
        (150.0, 5, 4),
    ]);
    let points = extract_data_points(&sessions, exercise);
    let config = ProgressionConfig::default();

    let result = OptimalSetsRecommender::new(&config)
        .recommend(&points, &sessions, exercise)
        .unwrap();

    assert_eq!(result.recommended_reps, 5);
}

#[test]
fn test_set_count_is_rounded_mean_of_completed_sets() {
    let (sessions, _, _, exercise) = history(&[
        (100.0, 10, 3),
        (100.0, 10, 4),
        (100.0, 10, 3),
        (100.0, 10, 4),
        (100.0, 10, 4),
    ]);
    let points = extract_data_points(&sessions, exercise);
    let config = ProgressionConfig::default();

    let result = OptimalSetsRecommender::new(&config)
        .recommend(&points, &sessions, exercise)
        .unwrap();

    // Mean of 3,4,3,4,4 is 3.6
    assert_eq!(result.recommended_sets, 4);
}

#[test]
fn test_set_count_falls_back_to_default_without_session_logs() {
    let (sessions, _, _, exercise) = history(&[
        (100.0, 10, 3),
        (100.0, 10, 3),
        (100.0, 10, 3),
        (100.0, 10, 3),
        (100.0, 10, 3),
    ]);
    let points = extract_data_points(&sessions, exercise);
    let config = ProgressionConfig::default();

    let result = OptimalSetsRecommender::new(&config)
        .recommend(&points, &[], exercise)
        .unwrap();

    assert_eq!(result.recommended_sets, config.windows.default_set_count);
}

#[test]
fn test_weight_rounds_to_half_kilo() {
    let (sessions, _, _, exercise) = history(&[
        (100.3, 10, 1),
        (100.3, 10, 1),
        (100.3, 10, 1),
        (100.3, 10, 1),
        (100.3, 10, 1),
    ]);
    let points = extract_data_points(&sessions, exercise);
    let config = ProgressionConfig::default();

    let result = OptimalSetsRecommender::new(&config)
        .recommend(&points, &sessions, exercise)
        .unwrap();

    assert!((result.estimated_weight - 100.5).abs() < 1e-9);
}

#[test]
fn test_coverage_confidence_scales_with_history() {
    let (sessions, _, _, exercise) = history(&[
        (100.0, 10, 3),
        (100.0, 10, 3),
        (100.0, 10, 3),
        (100.0, 10, 3),
        (100.0, 10, 3),
    ]);
    let points = extract_data_points(&sessions, exercise);
    let config = ProgressionConfig::default();

    let result = OptimalSetsRecommender::new(&config)
        .recommend(&points, &sessions, exercise)
        .unwrap();

    // 5 of 15 target points at the 0.85 ceiling
    assert!((result.confidence - 5.0 / 15.0 * 0.85).abs() < 1e-9);
}

#[test]
fn test_below_minimum_data_points_returns_none() {
    let (sessions, _, _, exercise) =
        history(&[(100.0, 10, 3), (100.0, 10, 3), (100.0, 10, 3)]);
    let points = extract_data_points(&sessions, exercise);
    let config = ProgressionConfig::default();

    assert!(OptimalSetsRecommender::new(&config)
        .recommend(&points, &sessions, exercise)
        .is_none());
}

#[test]
fn test_rep_range_classification_boundaries() {
    assert_eq!(RepRange::classify(1), RepRange::Strength);
    assert_eq!(RepRange::classify(5), RepRange::Strength);
    assert_eq!(RepRange::classify(6), RepRange::HypertrophyLow);
    assert_eq!(RepRange::classify(8), RepRange::HypertrophyLow);
    assert_eq!(RepRange::classify(9), RepRange::HypertrophyHigh);
    assert_eq!(RepRange::classify(12), RepRange::HypertrophyHigh);
    assert_eq!(RepRange::classify(13), RepRange::Endurance);
    assert_eq!(RepRange::classify(30), RepRange::Endurance);
}

#[tokio::test]
async fn test_engine_recommends_from_store() {
    let user = Uuid::new_v4();
    let tenant = Uuid::new_v4();
    let exercise = Uuid::new_v4();
    let sessions = weekly_history(
        user,
        tenant,
        exercise,
        &[100.0, 101.0, 102.0, 103.0, 104.0],
        10,
        7,
    );
    let engine = ProgressionEngine::new(Arc::new(InMemoryWorkoutStore::new(sessions)));

    let result = engine
        .recommend_optimal_sets(exercise, user, tenant)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.recommended_reps, 10);
    assert_eq!(result.recommended_sets, 1);
    assert!((result.estimated_weight - 102.0).abs() < 1e-9);
}
