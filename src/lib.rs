// ABOUTME: Main library entry point for the exercise progression prediction engine
// ABOUTME: Turns historical workout logs into 1RM forecasts, set recommendations, and training-time analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

//! # Progression Engine
//!
//! Analytical engine for exercise progression and training optimization.
//! Given a user's historical per-set workout logs for an exercise, the engine
//! fits a regression model to the estimated one-repetition-maximum trajectory
//! and produces calibrated forecasts and recommendations:
//!
//! - **Max-lift prediction**: projected 1RM four weeks past the most recent
//!   workout, with an error bound and a confidence score
//! - **Progression-rate analysis**: weekly strength velocity, trend
//!   classification, and 4-/8-week forecasts
//! - **Optimal-sets recommendation**: the rep range, weight, and set count
//!   associated with the highest average training volume
//! - **Optimal-time analysis**: the hour of day and day of week with the
//!   user's best average session volume
//! - **Exercise insights**: one composite report combining all of the above
//!
//! The engine is stateless and request-scoped: each operation reads a bounded
//! record set through the [`store::WorkoutStore`] trait, performs in-memory
//! arithmetic, and returns a value. Insufficient history is an expected
//! steady-state for new users and is signalled as `Ok(None)` (or a structured
//! flag from the insights aggregator), never as an error.

/// Sports-science formula algorithms (Epley one-rep-max estimate)
pub mod algorithms;
/// Confidence scoring strategies shared by all predictions
pub mod confidence;
/// Typed, environment-overridable engine configuration
pub mod config;
/// Per-session data point extraction from raw set logs
pub mod data_points;
/// The engine facade exposing the public prediction operations
pub mod engine;
/// Unified error handling (error codes, `AppError`, `AppResult`)
pub mod errors;
/// Composite per-exercise insight reports
pub mod insights;
/// One-rep-max forecasting with error bounds
pub mod max_lift;
/// Workout session, set log, and prediction result models
pub mod models;
/// Rep-range and set-count recommendations
pub mod optimal_sets;
/// Hour-of-day and day-of-week training window analysis
pub mod optimal_time;
/// Weekly strength velocity analysis
pub mod progression_rate;
/// Regression fitting, model selection, and error bounds
pub mod statistics;
/// Persistence collaborator interface
pub mod store;
/// Documented fixed constants from strength-training research
pub mod training_constants;

pub use config::{ConfigError, ProgressionConfig};
pub use engine::ProgressionEngine;
pub use errors::{AppError, AppResult, ErrorCode};
pub use insights::{ExerciseInsights, InsightsReport, InsufficientData};
pub use models::{
    ExerciseDataPoint, ExerciseLog, HourlyPerformance, OptimalSetsResult, OptimalTimeResult,
    PredictionResult, ProgressionAnalysis, SetLog, TrendDirection, WorkoutSession,
};
pub use store::WorkoutStore;
