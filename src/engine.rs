// ABOUTME: Engine facade exposing the public prediction operations over a workout store
// ABOUTME: Fetches scoped history, extracts data points, and delegates to the pure analyzers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::config::ProgressionConfig;
use crate::data_points::extract_data_points;
use crate::errors::AppResult;
use crate::max_lift::MaxLiftPredictor;
use crate::models::{
    OptimalSetsResult, OptimalTimeResult, PredictionResult, ProgressionAnalysis,
};
use crate::optimal_sets::OptimalSetsRecommender;
use crate::optimal_time::OptimalTimeAnalyzer;
use crate::progression_rate::ProgressionRateAnalyzer;
use crate::store::WorkoutStore;

/// Stateless facade over a [`WorkoutStore`] exposing the prediction
/// operations.
///
/// Every operation fetches a fresh, immutable record set and computes its
/// result in memory; concurrent invocations need no coordination.
#[derive(Clone)]
pub struct ProgressionEngine {
    store: Arc<dyn WorkoutStore>,
    config: ProgressionConfig,
}

impl ProgressionEngine {
    /// Create an engine using the global configuration
    #[must_use]
    pub fn new(store: Arc<dyn WorkoutStore>) -> Self {
        Self {
            store,
            config: ProgressionConfig::global().clone(),
        }
    }

    /// Create an engine with an explicit configuration
    #[must_use]
    pub const fn with_config(store: Arc<dyn WorkoutStore>, config: ProgressionConfig) -> Self {
        Self { store, config }
    }

    /// The configuration this engine runs with
    #[must_use]
    pub const fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    pub(crate) const fn store(&self) -> &Arc<dyn WorkoutStore> {
        &self.store
    }

    /// Predict the one-rep max four weeks past the most recent workout.
    ///
    /// `Ok(None)` signals insufficient history.
    ///
    /// # Errors
    ///
    /// Propagates store errors, including `ResourceNotFound` for an exercise
    /// that resolves to no records for the user/tenant.
    pub async fn predict_max_lift(
        &self,
        exercise_id: Uuid,
        user_id: Uuid,
        tenant_id: Uuid,
    ) -> AppResult<Option<PredictionResult>> {
        let sessions = self
            .store
            .exercise_history(exercise_id, user_id, tenant_id)
            .await?;
        let points = extract_data_points(&sessions, exercise_id);
        MaxLiftPredictor::new(&self.config).predict(&points, Utc::now())
    }

    /// Report weekly strength velocity, trend, and 4-/8-week forecasts.
    ///
    /// `Ok(None)` signals insufficient history.
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    pub async fn analyze_progression_rate(
        &self,
        exercise_id: Uuid,
        user_id: Uuid,
        tenant_id: Uuid,
    ) -> AppResult<Option<ProgressionAnalysis>> {
        let sessions = self
            .store
            .exercise_history(exercise_id, user_id, tenant_id)
            .await?;
        let points = extract_data_points(&sessions, exercise_id);
        ProgressionRateAnalyzer::new(&self.config).analyze(&points, Utc::now())
    }

    /// Recommend the sets/reps/weight combination associated with the
    /// highest average training volume.
    ///
    /// `Ok(None)` signals insufficient history.
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    pub async fn recommend_optimal_sets(
        &self,
        exercise_id: Uuid,
        user_id: Uuid,
        tenant_id: Uuid,
    ) -> AppResult<Option<OptimalSetsResult>> {
        let sessions = self
            .store
            .exercise_history(exercise_id, user_id, tenant_id)
            .await?;
        let points = extract_data_points(&sessions, exercise_id);

        let recent_start = sessions
            .len()
            .saturating_sub(self.config.windows.recent_session_logs);
        let recent_sessions = &sessions[recent_start..];

        Ok(OptimalSetsRecommender::new(&self.config).recommend(
            &points,
            recent_sessions,
            exercise_id,
        ))
    }

    /// Find the user's best training hour and day of week by average session
    /// volume, across all exercises.
    ///
    /// `Ok(None)` signals insufficient history.
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    pub async fn analyze_optimal_training_time(
        &self,
        user_id: Uuid,
        tenant_id: Uuid,
    ) -> AppResult<Option<OptimalTimeResult>> {
        let sessions = self
            .store
            .recent_sessions(user_id, tenant_id, self.config.windows.session_scan_limit)
            .await?;
        Ok(OptimalTimeAnalyzer::new(&self.config).analyze(&sessions))
    }
}
