// ABOUTME: Regression primitives for strength trajectory fitting
// ABOUTME: OLS linear and quadratic fits, R-squared, model selection, and residual error bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Progression Engine Contributors

//! Regression fitting over (elapsed time, one-rep max) series.
//!
//! Both an ordinary least-squares linear model and a degree-2 polynomial are
//! available; [`select_model`] applies the engine's selection rule. All
//! computations guard degenerate input (zero variance, singular systems) so
//! no `NaN` ever reaches a prediction.

#![allow(clippy::cast_precision_loss)] // Safe: sample counts are tens of points

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::training_constants::statistics::ERROR_BOUND_Z;

/// An ordinary least-squares line fit
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinearFit {
    /// Rate of change per unit of x
    pub slope: f64,
    /// Value at x = 0
    pub intercept: f64,
    /// Coefficient of determination
    pub r_squared: f64,
}

impl LinearFit {
    /// Predicted value at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }

    /// Zero-slope fallback through the mean, used when the series is too
    /// degenerate to regress (for example, all sessions at one timestamp).
    /// Fit quality is reported as zero so confidence collapses with it.
    #[must_use]
    pub fn flat(ys: &[f64]) -> Self {
        let intercept = if ys.is_empty() {
            0.0
        } else {
            ys.iter().sum::<f64>() / ys.len() as f64
        };
        Self {
            slope: 0.0,
            intercept,
            r_squared: 0.0,
        }
    }
}

/// A degree-2 polynomial fit `y = a*x^2 + b*x + c`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuadraticFit {
    /// Quadratic coefficient
    pub a: f64,
    /// Linear coefficient
    pub b: f64,
    /// Constant term
    pub c: f64,
    /// Coefficient of determination
    pub r_squared: f64,
}

impl QuadraticFit {
    /// Predicted value at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.a.mul_add(x * x, self.b.mul_add(x, self.c))
    }
}

/// The model chosen for a series by [`select_model`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum FittedModel {
    /// Linear trajectory
    Linear(LinearFit),
    /// Quadratic trajectory
    Quadratic(QuadraticFit),
}

impl FittedModel {
    /// Predicted value at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        match self {
            Self::Linear(fit) => fit.predict(x),
            Self::Quadratic(fit) => fit.predict(x),
        }
    }

    /// Coefficient of determination of the chosen model
    #[must_use]
    pub const fn r_squared(&self) -> f64 {
        match self {
            Self::Linear(fit) => fit.r_squared,
            Self::Quadratic(fit) => fit.r_squared,
        }
    }
}

/// Fit an ordinary least-squares line over `(xs, ys)`.
///
/// # Errors
///
/// Returns `InvalidInput` when fewer than two points are given, the slices
/// differ in length, or x has zero variance.
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> AppResult<LinearFit> {
    check_series(xs, ys)?;

    let n = xs.len() as f64;
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xx: f64 = xs.iter().map(|x| x * x).sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();

    let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
    if denominator.abs() < f64::EPSILON {
        return Err(AppError::invalid_input(
            "Cannot fit regression: zero variance in x",
        ));
    }

    let slope = n.mul_add(sum_xy, -(sum_x * sum_y)) / denominator;
    let intercept = slope.mul_add(-sum_x, sum_y) / n;
    let r_squared = r_squared_of(|x| slope.mul_add(x, intercept), xs, ys);

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

/// Fit a degree-2 polynomial over `(xs, ys)` via the normal equations.
///
/// A singular system (for example, fewer than three distinct x values) falls
/// back to the linear fit's shape with a zero quadratic coefficient instead
/// of erroring.
///
/// # Errors
///
/// Returns `InvalidInput` when fewer than two points are given, the slices
/// differ in length, or x has zero variance.
pub fn quadratic_fit(xs: &[f64], ys: &[f64]) -> AppResult<QuadraticFit> {
    check_series(xs, ys)?;

    let n = xs.len() as f64;
    let s1: f64 = xs.iter().sum();
    let s2: f64 = xs.iter().map(|x| x.powi(2)).sum();
    let s3: f64 = xs.iter().map(|x| x.powi(3)).sum();
    let s4: f64 = xs.iter().map(|x| x.powi(4)).sum();
    let sy: f64 = ys.iter().sum();
    let sxy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
    let sx2y: f64 = xs.iter().zip(ys).map(|(x, y)| x * x * y).sum();

    let system = [
        [s4, s3, s2, sx2y],
        [s3, s2, s1, sxy],
        [s2, s1, n, sy],
    ];

    let Some([a, b, c]) = solve_3x3(system) else {
        debug!("quadratic normal equations singular, falling back to linear shape");
        let linear = linear_fit(xs, ys)?;
        return Ok(QuadraticFit {
            a: 0.0,
            b: linear.slope,
            c: linear.intercept,
            r_squared: linear.r_squared,
        });
    };

    let r_squared = r_squared_of(|x| a.mul_add(x * x, b.mul_add(x, c)), xs, ys);

    Ok(QuadraticFit {
        a,
        b,
        c,
        r_squared,
    })
}

/// Fit both model families and pick the better one.
///
/// The linear model is preferred unless the quadratic model's R-squared is
/// both strictly higher and at least the configured floor; the floor guards
/// against over-fitting a curve to few points. Ties favor linear.
///
/// # Errors
///
/// Returns `InvalidInput` for series the fits themselves reject.
pub fn select_model(xs: &[f64], ys: &[f64], quadratic_r2_floor: f64) -> AppResult<FittedModel> {
    let linear = linear_fit(xs, ys)?;
    let quadratic = quadratic_fit(xs, ys)?;

    if quadratic.r_squared > linear.r_squared && quadratic.r_squared >= quadratic_r2_floor {
        debug!(
            linear_r2 = linear.r_squared,
            quadratic_r2 = quadratic.r_squared,
            "selected quadratic model"
        );
        Ok(FittedModel::Quadratic(quadratic))
    } else {
        Ok(FittedModel::Linear(linear))
    }
}

/// Approximate 95% interval half-width for a point prediction.
///
/// Population standard deviation of the model's residuals against all
/// observed points, multiplied by 1.96. Assumes roughly normal residuals;
/// treat the bound as an approximation, not a guarantee.
#[must_use]
pub fn residual_error_bound(model: &FittedModel, xs: &[f64], ys: &[f64]) -> f64 {
    if xs.is_empty() || xs.len() != ys.len() {
        return 0.0;
    }
    let n = xs.len() as f64;
    let mean_residual = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| y - model.predict(*x))
        .sum::<f64>()
        / n;
    let variance = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| {
            let residual = y - model.predict(*x);
            (residual - mean_residual).powi(2)
        })
        .sum::<f64>()
        / n;
    variance.sqrt() * ERROR_BOUND_Z
}

fn check_series(xs: &[f64], ys: &[f64]) -> AppResult<()> {
    if xs.len() != ys.len() {
        return Err(AppError::invalid_input(format!(
            "Series length mismatch: {} x values, {} y values",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < 2 {
        return Err(AppError::invalid_input(format!(
            "Insufficient data points for regression: need at least 2, got {}",
            xs.len()
        )));
    }
    Ok(())
}

/// Coefficient of determination for an arbitrary model.
///
/// A series with zero variance in y maps to 1.0 when the model reproduces it
/// and 0.0 otherwise, never `NaN`.
fn r_squared_of(predict: impl Fn(f64) -> f64, xs: &[f64], ys: &[f64]) -> f64 {
    let n = ys.len() as f64;
    let mean_y = ys.iter().sum::<f64>() / n;
    let ss_tot: f64 = ys.iter().map(|y| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (y - predict(*x)).powi(2))
        .sum();

    if ss_tot < f64::EPSILON {
        return if ss_res < f64::EPSILON { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}

/// Solve a 3x3 linear system given as an augmented matrix.
///
/// Gaussian elimination with partial pivoting; returns `None` for singular
/// systems.
fn solve_3x3(mut m: [[f64; 4]; 3]) -> Option<[f64; 3]> {
    for col in 0..3 {
        let pivot_row = (col..3).max_by(|&a, &b| {
            m[a][col]
                .abs()
                .partial_cmp(&m[b][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if m[pivot_row][col].abs() < 1e-12 {
            return None;
        }
        m.swap(col, pivot_row);

        for row in (col + 1)..3 {
            let factor = m[row][col] / m[col][col];
            for k in col..4 {
                m[row][k] = factor.mul_add(-m[col][k], m[row][k]);
            }
        }
    }

    let mut solution = [0.0; 3];
    for row in (0..3).rev() {
        let mut value = m[row][3];
        for col in (row + 1)..3 {
            value = m[row][col].mul_add(-solution[col], value);
        }
        solution[row] = value / m[row][row];
    }
    Some(solution)
}
