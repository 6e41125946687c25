// ABOUTME: Workout session input models and derived prediction result types
// ABOUTME: Set logs, exercise logs, per-session data points, and analyzer outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recorded set within an exercise log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLog {
    /// Working weight in kilograms, when recorded
    pub weight: Option<f64>,
    /// Repetitions performed, when recorded
    pub reps: Option<u32>,
    /// Whether the set was actually completed
    pub completed: bool,
}

impl SetLog {
    /// Weight and reps for a set that counts toward analysis.
    ///
    /// A set counts only when it was completed and both weight and reps were
    /// recorded. Skipped and partially logged sets are excluded everywhere.
    #[must_use]
    pub fn counted_load(&self) -> Option<(f64, u32)> {
        if !self.completed {
            return None;
        }
        match (self.weight, self.reps) {
            (Some(weight), Some(reps)) => Some((weight, reps)),
            _ => None,
        }
    }
}

/// All sets logged for one exercise within a workout session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// The exercise these sets belong to
    pub exercise_id: Uuid,
    /// Recorded sets in the order they were performed
    pub sets: Vec<SetLog>,
}

/// A workout session with its full exercise and set logs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Unique session identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Owning tenant
    pub tenant_id: Uuid,
    /// When the session was completed; `None` for abandoned sessions
    pub completed_at: Option<DateTime<Utc>>,
    /// Exercise logs recorded during the session
    pub exercise_logs: Vec<ExerciseLog>,
}

/// One derived per-session summary record used as the unit of regression input.
///
/// Produced fresh on every request from persisted logs and never mutated.
/// Every data point derives from at least one counted set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseDataPoint {
    /// Session completion time
    pub date: DateTime<Utc>,
    /// Session-average working weight (kg)
    pub weight: f64,
    /// Session-average rep count, rounded
    pub reps: u32,
    /// Total session volume: sum of weight x reps across counted sets
    pub volume: f64,
    /// Best estimated one-rep max among the session's counted sets (kg)
    pub one_rep_max: f64,
}

/// Direction of a strength trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Strength is trending upward
    Increasing,
    /// Strength is trending downward
    Decreasing,
    /// No clear movement either way
    Stable,
}

/// A forecast one-rep max with its uncertainty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted one-rep max (kg), never negative
    pub predicted_one_rep_max: f64,
    /// Confidence heuristic in [0, 1]
    pub confidence: f64,
    /// Approximate 95% interval half-width (kg), never negative
    pub error_bound: f64,
    /// Trend over the most recent data points
    pub trend: TrendDirection,
}

/// Recommended sets/reps/weight target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalSetsResult {
    /// Recommended number of working sets
    pub recommended_sets: u32,
    /// Representative rep target for the winning rep range
    pub recommended_reps: u32,
    /// Suggested working weight (kg), rounded to the nearest 0.5
    pub estimated_weight: f64,
    /// Confidence heuristic in [0, 1]
    pub confidence: f64,
    /// Human-readable explanation of the recommendation
    pub reasoning: String,
}

/// Average session volume observed for one hour of the day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPerformance {
    /// Hour of day, 0-23
    pub hour: u32,
    /// Average session volume in that hour
    pub avg_volume: f64,
    /// Number of sessions observed in that hour
    pub sample_count: usize,
}

/// Best training windows by hour of day and day of week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalTimeResult {
    /// Hour of day (0-23) with the highest average volume among eligible hours
    pub best_hour: u32,
    /// Day of week (0-6, 0 = Sunday) with the highest average volume
    pub best_day_of_week: u32,
    /// Per-hour averages, sorted ascending by hour
    pub performance_by_hour: Vec<HourlyPerformance>,
    /// Confidence heuristic in [0, 1]
    pub confidence: f64,
}

/// Weekly strength velocity analysis with short-horizon forecasts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionAnalysis {
    /// Strength velocity in kg/week (signed), rounded to 2 decimals
    pub velocity_per_week: f64,
    /// Most recent estimated one-rep max (kg), rounded to 1 decimal
    pub current_one_rep_max: f64,
    /// Forecast one-rep max 4 weeks out (kg), never negative, 1 decimal
    pub predicted_one_rep_max_in_4_weeks: f64,
    /// Forecast one-rep max 8 weeks out (kg), never negative, 1 decimal
    pub predicted_one_rep_max_in_8_weeks: f64,
    /// Confidence heuristic in [0, 1]
    pub confidence: f64,
    /// Trend classified from the fitted slope
    pub trend: TrendDirection,
}
