// ABOUTME: Rep-range and set-count recommendations from recent training volume
// ABOUTME: Buckets recent sessions by rep range and recommends the highest-average-volume scheme
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

#![allow(clippy::cast_precision_loss)] // Safe: set counts are small

use uuid::Uuid;

use crate::confidence::coverage_confidence;
use crate::config::ProgressionConfig;
use crate::models::{ExerciseDataPoint, OptimalSetsResult, WorkoutSession};
use crate::training_constants::equipment::WEIGHT_INCREMENT_KG;

/// Training rep ranges used for volume bucketing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepRange {
    /// 1-5 reps: maximal strength work
    Strength,
    /// 6-8 reps: strength-leaning hypertrophy
    HypertrophyLow,
    /// 9-12 reps: classic hypertrophy
    HypertrophyHigh,
    /// 13+ reps: muscular endurance
    Endurance,
}

impl RepRange {
    const ALL: [Self; 4] = [
        Self::Strength,
        Self::HypertrophyLow,
        Self::HypertrophyHigh,
        Self::Endurance,
    ];

    /// Bucket an average rep count into its range
    #[must_use]
    pub const fn classify(reps: u32) -> Self {
        match reps {
            0..=5 => Self::Strength,
            6..=8 => Self::HypertrophyLow,
            9..=12 => Self::HypertrophyHigh,
            _ => Self::Endurance,
        }
    }

    /// Representative rep target used when recommending this range
    #[must_use]
    pub const fn target_reps(self) -> u32 {
        match self {
            Self::Strength => 5,
            Self::HypertrophyLow => 8,
            Self::HypertrophyHigh => 10,
            Self::Endurance => 15,
        }
    }

    /// Display label for the range
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strength => "1-5",
            Self::HypertrophyLow => "6-8",
            Self::HypertrophyHigh => "9-12",
            Self::Endurance => "13+",
        }
    }
}

/// Recommends a sets/reps/weight target from recent training data
pub struct OptimalSetsRecommender<'a> {
    config: &'a ProgressionConfig,
}

impl<'a> OptimalSetsRecommender<'a> {
    /// Create a recommender with the given configuration
    #[must_use]
    pub const fn new(config: &'a ProgressionConfig) -> Self {
        Self { config }
    }

    /// Recommend the rep range, weight, and set count associated with the
    /// highest average training volume.
    ///
    /// Uses the most recent data points for volume analysis and the most
    /// recent session logs for the typical completed-set count. Returns
    /// `None` below the configured minimum of data points.
    #[must_use]
    pub fn recommend(
        &self,
        points: &[ExerciseDataPoint],
        recent_sessions: &[WorkoutSession],
        exercise_id: Uuid,
    ) -> Option<OptimalSetsResult> {
        if points.len() < self.config.data.min_data_points {
            return None;
        }

        let start = points.len().saturating_sub(self.config.windows.recent_points);
        let recent = &points[start..];

        let recommended_sets = self.typical_set_count(recent_sessions, exercise_id);
        let best_range = best_rep_range(recent);

        let mean_weight = recent.iter().map(|p| p.weight).sum::<f64>() / recent.len() as f64;
        let estimated_weight =
            (mean_weight / WEIGHT_INCREMENT_KG).round() * WEIGHT_INCREMENT_KG;

        let confidence = coverage_confidence(
            points.len(),
            self.config.coverage.sets_sample_target,
            self.config.coverage.sets_ceiling,
        );

        let reasoning = format!(
            "Based on your last {count} workouts, the {range} rep range produced your \
             highest average volume. You typically complete {recommended_sets} working sets.",
            count = recent.len(),
            range = best_range.label(),
        );

        Some(OptimalSetsResult {
            recommended_sets,
            recommended_reps: best_range.target_reps(),
            estimated_weight,
            confidence,
            reasoning,
        })
    }

    /// Rounded mean of completed-set counts across the recent session logs
    /// for the exercise, falling back to the configured default when no log
    /// carries a completed set.
    fn typical_set_count(&self, sessions: &[WorkoutSession], exercise_id: Uuid) -> u32 {
        let mut set_counts = Vec::new();
        for session in sessions {
            for log in session
                .exercise_logs
                .iter()
                .filter(|log| log.exercise_id == exercise_id)
            {
                let completed = log.sets.iter().filter(|set| set.completed).count();
                if completed > 0 {
                    set_counts.push(completed);
                }
            }
        }

        if set_counts.is_empty() {
            return self.config.windows.default_set_count;
        }
        let mean = set_counts.iter().sum::<usize>() as f64 / set_counts.len() as f64;
        mean.round() as u32
    }
}

/// The rep range with the highest average volume among the given points.
///
/// Each point's average rep count selects its bucket; buckets accumulate
/// total volume and count. The 9-12 range is the default when every bucket's
/// volume is zero.
fn best_rep_range(points: &[ExerciseDataPoint]) -> RepRange {
    let mut totals = [0.0_f64; 4];
    let mut counts = [0_usize; 4];

    for point in points {
        let bucket = RepRange::classify(point.reps) as usize;
        totals[bucket] += point.volume;
        counts[bucket] += 1;
    }

    let mut best = RepRange::HypertrophyHigh;
    let mut best_average = 0.0;
    for (i, range) in RepRange::ALL.into_iter().enumerate() {
        if counts[i] == 0 {
            continue;
        }
        let average = totals[i] / counts[i] as f64;
        if average > best_average {
            best_average = average;
            best = range;
        }
    }
    best
}
