// ABOUTME: Composite per-exercise insight reports combining the individual analyzers
// ABOUTME: Runs max-lift, optimal-sets, and progression-rate concurrently and joins the results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

#![allow(clippy::cast_precision_loss)] // Safe: workout counts are bounded

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data_points::extract_data_points;
use crate::engine::ProgressionEngine;
use crate::errors::AppResult;
use crate::models::{OptimalSetsResult, PredictionResult, ProgressionAnalysis};

/// Composite insight report for one exercise.
///
/// Unlike the individual analyzers, which signal insufficient history with
/// `None`, the aggregator returns a structured variant carrying progress
/// counters so callers can render how close the user is to their first
/// insights. The asymmetry is deliberate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExerciseInsights {
    /// Not enough history yet for any analysis
    NotEnoughData(InsufficientData),
    /// Full report
    Ready(Box<InsightsReport>),
}

/// Progress counters returned while history is still too thin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsufficientData {
    /// Always `false`
    pub has_enough_data: bool,
    /// Usable data points found for the exercise
    pub data_points_count: usize,
    /// Data points required before insights are produced
    pub required_data_points: usize,
}

/// Full per-exercise insight report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsReport {
    /// Always `true`
    pub has_enough_data: bool,
    /// One-rep-max forecast four weeks out
    pub max_lift: Option<PredictionResult>,
    /// Recommended sets/reps/weight target
    pub optimal_sets: Option<OptimalSetsResult>,
    /// Weekly strength velocity analysis
    pub progression: Option<ProgressionAnalysis>,
    /// Average volume of the most recent data points
    pub average_recent_volume: f64,
    /// Most recent estimated one-rep max (kg)
    pub current_one_rep_max: f64,
    /// Best estimated one-rep max ever observed (kg)
    pub best_one_rep_max: f64,
    /// Total workouts contributing data points
    pub total_workouts: usize,
    /// Workouts per week over the observed timespan
    pub workouts_per_week: f64,
}

impl ProgressionEngine {
    /// Build the composite insight report for one exercise.
    ///
    /// The three sub-analyses are independent and run concurrently; result
    /// combination is a plain join once all complete.
    ///
    /// # Errors
    ///
    /// Propagates store errors from any of the sub-analyses.
    pub async fn exercise_insights(
        &self,
        exercise_id: Uuid,
        user_id: Uuid,
        tenant_id: Uuid,
    ) -> AppResult<ExerciseInsights> {
        let sessions = self
            .store()
            .exercise_history(exercise_id, user_id, tenant_id)
            .await?;
        let points = extract_data_points(&sessions, exercise_id);

        let required = self.config().data.min_data_points;
        if points.len() < required {
            return Ok(ExerciseInsights::NotEnoughData(InsufficientData {
                has_enough_data: false,
                data_points_count: points.len(),
                required_data_points: required,
            }));
        }

        let (max_lift, optimal_sets, progression) = tokio::join!(
            self.predict_max_lift(exercise_id, user_id, tenant_id),
            self.recommend_optimal_sets(exercise_id, user_id, tenant_id),
            self.analyze_progression_rate(exercise_id, user_id, tenant_id),
        );
        let max_lift = max_lift?;
        let optimal_sets = optimal_sets?;
        let progression = progression?;

        let window = self.config().windows.trend_window;
        let recent_start = points.len().saturating_sub(window);
        let recent = &points[recent_start..];
        let average_recent_volume =
            recent.iter().map(|p| p.volume).sum::<f64>() / recent.len() as f64;

        let current_one_rep_max = points[points.len() - 1].one_rep_max;
        let best_one_rep_max = points
            .iter()
            .map(|p| p.one_rep_max)
            .fold(0.0_f64, f64::max);

        // Span is floored at one day so a history logged within a single day
        // still yields a finite rate.
        let span_days = (points[points.len() - 1].date - points[0].date)
            .num_days()
            .max(1) as f64;
        let workouts_per_week = points.len() as f64 / span_days * 7.0;

        Ok(ExerciseInsights::Ready(Box::new(InsightsReport {
            has_enough_data: true,
            max_lift,
            optimal_sets,
            progression,
            average_recent_volume,
            current_one_rep_max,
            best_one_rep_max,
            total_workouts: points.len(),
            workouts_per_week,
        })))
    }
}
