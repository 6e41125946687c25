// ABOUTME: Shared test utilities for progression engine integration tests
// ABOUTME: Provides an in-memory workout store and session/set fixture builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

#![allow(
    dead_code,
    clippy::cast_possible_wrap,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

//! Shared test utilities for `progression_engine`

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use progression_engine::{
    AppError, AppResult, ExerciseLog, SetLog, WorkoutSession, WorkoutStore,
};
use uuid::Uuid;

/// In-memory workout store backed by a fixed session list
pub struct InMemoryWorkoutStore {
    sessions: Vec<WorkoutSession>,
}

impl InMemoryWorkoutStore {
    pub fn new(sessions: Vec<WorkoutSession>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl WorkoutStore for InMemoryWorkoutStore {
    async fn exercise_history(
        &self,
        exercise_id: Uuid,
        user_id: Uuid,
        tenant_id: Uuid,
    ) -> AppResult<Vec<WorkoutSession>> {
        let known = self.sessions.iter().any(|s| {
            s.user_id == user_id
                && s.tenant_id == tenant_id
                && s.exercise_logs.iter().any(|l| l.exercise_id == exercise_id)
        });
        if !known {
            return Err(AppError::not_found(format!("exercise {exercise_id}")));
        }

        let mut matching: Vec<WorkoutSession> = self
            .sessions
            .iter()
            .filter(|s| {
                s.user_id == user_id
                    && s.tenant_id == tenant_id
                    && s.completed_at.is_some()
                    && s.exercise_logs.iter().any(|l| l.exercise_id == exercise_id)
            })
            .cloned()
            .collect();
        matching.sort_by_key(|s| s.completed_at);
        Ok(matching)
    }

    async fn recent_sessions(
        &self,
        user_id: Uuid,
        tenant_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<WorkoutSession>> {
        let mut matching: Vec<WorkoutSession> = self
            .sessions
            .iter()
            .filter(|s| s.user_id == user_id && s.tenant_id == tenant_id && s.completed_at.is_some())
            .cloned()
            .collect();
        matching.sort_by_key(|s| std::cmp::Reverse(s.completed_at));
        matching.truncate(limit);
        Ok(matching)
    }
}

/// A fixed, readable baseline timestamp: 2025-01-06 18:00 UTC (a Monday)
pub fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 18, 0, 0).single().unwrap()
}

/// Build a completed set
pub fn completed_set(weight: f64, reps: u32) -> SetLog {
    SetLog {
        weight: Some(weight),
        reps: Some(reps),
        completed: true,
    }
}

/// Build a completed session for one exercise from (weight, reps) pairs
pub fn session(
    user_id: Uuid,
    tenant_id: Uuid,
    exercise_id: Uuid,
    completed_at: DateTime<Utc>,
    sets: &[(f64, u32)],
) -> WorkoutSession {
    WorkoutSession {
        id: Uuid::new_v4(),
        user_id,
        tenant_id,
        completed_at: Some(completed_at),
        exercise_logs: vec![ExerciseLog {
            exercise_id,
            sets: sets.iter().map(|&(w, r)| completed_set(w, r)).collect(),
        }],
    }
}

/// Build a weekly history of single-set sessions with the given weights,
/// starting at `base_date()` and spaced `spacing_days` apart
pub fn weekly_history(
    user_id: Uuid,
    tenant_id: Uuid,
    exercise_id: Uuid,
    weights: &[f64],
    reps: u32,
    spacing_days: i64,
) -> Vec<WorkoutSession> {
    weights
        .iter()
        .enumerate()
        .map(|(i, &weight)| {
            session(
                user_id,
                tenant_id,
                exercise_id,
                base_date() + Duration::days(spacing_days * i as i64),
                &[(weight, reps)],
            )
        })
        .collect()
}
