// ABOUTME: Extraction of per-session summary data points from raw set logs
// ABOUTME: Filters to counted sets and aggregates weight, reps, volume, and best 1RM per session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

#![allow(clippy::cast_precision_loss)] // Safe: set counts are small

use tracing::debug;
use uuid::Uuid;

use crate::algorithms::estimate_one_rep_max;
use crate::models::{ExerciseDataPoint, WorkoutSession};

/// Turn raw session logs into a clean, time-ordered series of per-session
/// summary statistics for one exercise.
///
/// Per session, only counted sets contribute (completed, with both weight and
/// reps recorded); all logs for the exercise within the session feed the same
/// point, so supersets collapse into one summary. Sessions without a
/// completion timestamp or without any counted set are dropped silently:
/// their absence is an expected state, not an error.
///
/// The output is ascending by date with exactly one point per contributing
/// session and contains no partial or malformed points.
#[must_use]
pub fn extract_data_points(
    sessions: &[WorkoutSession],
    exercise_id: Uuid,
) -> Vec<ExerciseDataPoint> {
    let mut points = Vec::with_capacity(sessions.len());

    for session in sessions {
        let Some(date) = session.completed_at else {
            debug!(session_id = %session.id, "skipping session without completion timestamp");
            continue;
        };

        let mut total_volume = 0.0;
        let mut summed_weight = 0.0;
        let mut total_reps: u64 = 0;
        let mut best_one_rep_max = 0.0_f64;
        let mut counted_sets: usize = 0;

        for log in session
            .exercise_logs
            .iter()
            .filter(|log| log.exercise_id == exercise_id)
        {
            for set in &log.sets {
                let Some((weight, reps)) = set.counted_load() else {
                    continue;
                };
                total_volume += weight * f64::from(reps);
                summed_weight += weight;
                total_reps += u64::from(reps);
                best_one_rep_max = best_one_rep_max.max(estimate_one_rep_max(weight, reps));
                counted_sets += 1;
            }
        }

        if counted_sets == 0 {
            debug!(session_id = %session.id, "skipping session without counted sets");
            continue;
        }

        let set_count = counted_sets as f64;
        points.push(ExerciseDataPoint {
            date,
            weight: summed_weight / set_count,
            reps: (total_reps as f64 / set_count).round() as u32,
            volume: total_volume,
            one_rep_max: best_one_rep_max,
        });
    }

    points.sort_by(|a, b| a.date.cmp(&b.date));
    points
}
