// ABOUTME: Persistence collaborator interface for workout history
// ABOUTME: Async trait the surrounding platform implements over its relational store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::WorkoutSession;

/// Read access to a user's workout history.
///
/// The engine is a pure function of an already-scoped, already-authorized
/// record set: implementations enforce tenancy and authorization before
/// returning rows, and the engine never writes.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// All completed sessions containing the exercise for the given user and
    /// tenant, ascending by completion time.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the exercise does not resolve to any
    /// record for the user/tenant at all; a known exercise with no completed
    /// history yields `Ok(vec![])`, which downstream reads as insufficient
    /// data. Data-access failures surface as `DatabaseError`.
    async fn exercise_history(
        &self,
        exercise_id: Uuid,
        user_id: Uuid,
        tenant_id: Uuid,
    ) -> AppResult<Vec<WorkoutSession>>;

    /// The most recent completed sessions for the user across all exercises,
    /// newest first, at most `limit` entries.
    ///
    /// # Errors
    ///
    /// Data-access failures surface as `DatabaseError`.
    async fn recent_sessions(
        &self,
        user_id: Uuid,
        tenant_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<WorkoutSession>>;
}
