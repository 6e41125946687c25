// ABOUTME: Epley one-rep-max estimation from a submaximal weight/reps pair
// ABOUTME: Pure, total function with non-negative output guarantee
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

use crate::training_constants::one_rep_max::EPLEY_REP_DIVISOR;

/// Estimate the maximal single-rep lift from a (weight, reps) pair.
///
/// Applies the Epley formula `weight * (1 + reps / 30)`. A single rep is the
/// lift itself, so `reps <= 1` returns the weight unchanged rather than
/// risking the formula at its boundary. Weight is clamped to non-negative
/// before use; the result is never negative.
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    let weight = weight.max(0.0);
    if reps <= 1 {
        return weight;
    }
    weight * (f64::from(reps) / EPLEY_REP_DIVISOR + 1.0)
}
