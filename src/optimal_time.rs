// ABOUTME: Hour-of-day and day-of-week training window analysis across all exercises
// ABOUTME: Aggregates completed-session volume into time buckets with an outlier-resistant minimum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

#![allow(clippy::cast_precision_loss)] // Safe: session counts are bounded

use std::collections::HashMap;

use chrono::{Datelike, Timelike};

use crate::confidence::coverage_confidence;
use crate::config::ProgressionConfig;
use crate::models::{HourlyPerformance, OptimalTimeResult, WorkoutSession};

/// Surfaces the user's highest-average-volume training windows
pub struct OptimalTimeAnalyzer<'a> {
    config: &'a ProgressionConfig,
}

impl<'a> OptimalTimeAnalyzer<'a> {
    /// Create an analyzer with the given configuration
    #[must_use]
    pub const fn new(config: &'a ProgressionConfig) -> Self {
        Self { config }
    }

    /// Find the hour of day and day of week with the best average session
    /// volume, across all exercises.
    ///
    /// Session volume counts only completed sets with both weight and reps
    /// recorded, the same rule the per-exercise extractor applies. A bucket
    /// needs at least the configured minimum of samples to be eligible, so a
    /// single outlier session cannot win; with no eligible bucket the result
    /// defaults to hour 0 / day 0 (Sunday). Returns `None` below the
    /// configured minimum of completed sessions.
    #[must_use]
    pub fn analyze(&self, sessions: &[WorkoutSession]) -> Option<OptimalTimeResult> {
        let completed: Vec<_> = sessions
            .iter()
            .filter_map(|session| {
                session
                    .completed_at
                    .map(|date| (date, session_volume(session)))
            })
            .collect();

        if completed.len() < self.config.data.min_sessions_for_time_analysis {
            return None;
        }

        let mut hour_buckets: HashMap<u32, (f64, usize)> = HashMap::new();
        let mut day_buckets: HashMap<u32, (f64, usize)> = HashMap::new();

        for (date, volume) in &completed {
            let hour = hour_buckets.entry(date.hour()).or_insert((0.0, 0));
            hour.0 += volume;
            hour.1 += 1;

            let day = day_buckets
                .entry(date.weekday().num_days_from_sunday())
                .or_insert((0.0, 0));
            day.0 += volume;
            day.1 += 1;
        }

        let min_samples = self.config.data.min_bucket_samples;
        let best_hour = best_bucket(&hour_buckets, min_samples).unwrap_or(0);
        let best_day_of_week = best_bucket(&day_buckets, min_samples).unwrap_or(0);

        let mut performance_by_hour: Vec<HourlyPerformance> = hour_buckets
            .into_iter()
            .map(|(hour, (total, count))| HourlyPerformance {
                hour,
                avg_volume: total / count as f64,
                sample_count: count,
            })
            .collect();
        performance_by_hour.sort_by_key(|entry| entry.hour);

        Some(OptimalTimeResult {
            best_hour,
            best_day_of_week,
            performance_by_hour,
            confidence: coverage_confidence(
                completed.len(),
                self.config.coverage.time_sample_target,
                self.config.coverage.time_ceiling,
            ),
        })
    }
}

/// Total session volume over every counted set in every exercise log
fn session_volume(session: &WorkoutSession) -> f64 {
    session
        .exercise_logs
        .iter()
        .flat_map(|log| &log.sets)
        .filter_map(crate::models::SetLog::counted_load)
        .map(|(weight, reps)| weight * f64::from(reps))
        .sum()
}

/// The bucket key with the highest average volume among buckets holding at
/// least `min_samples` entries; ties resolve to the lowest key.
fn best_bucket(buckets: &HashMap<u32, (f64, usize)>, min_samples: usize) -> Option<u32> {
    let mut eligible: Vec<_> = buckets
        .iter()
        .filter(|(_, (_, count))| *count >= min_samples)
        .map(|(key, (total, count))| (*key, total / *count as f64))
        .collect();
    eligible.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    eligible.first().map(|(key, _)| *key)
}
