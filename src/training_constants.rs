// ABOUTME: Fixed constants from strength-training research used across the engine
// ABOUTME: Epley formula parameters, statistical multipliers, and weight rounding conventions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

//! Fixed constants from strength-training practice and statistics.
//!
//! Values here are properties of the formulas themselves and are not meant to
//! be tuned per deployment; tunable thresholds live in
//! [`crate::config::ProgressionConfig`].

/// One-rep-max estimation constants
///
/// References:
/// - Epley, B. (1985). Poundage Chart. Boyd Epley Workout, University of Nebraska
/// - Reynolds, J.M., Gordon, T.J., & Robergs, R.A. (2006). Prediction of one
///   repetition maximum strength from multiple repetition maximum testing
pub mod one_rep_max {
    /// Rep divisor in the Epley estimate: `1RM = weight * (1 + reps / 30)`
    pub const EPLEY_REP_DIVISOR: f64 = 30.0;
}

/// Statistical multipliers used for prediction uncertainty
pub mod statistics {
    /// z multiplier approximating a 95% interval half-width from the residual
    /// standard deviation. Assumes roughly normal residuals; this is an
    /// approximation, not a guarantee.
    pub const ERROR_BOUND_Z: f64 = 1.96;
}

/// Gym equipment conventions
pub mod equipment {
    /// Smallest practical weight increment (kg); recommendations round to it
    pub const WEIGHT_INCREMENT_KG: f64 = 0.5;
}
