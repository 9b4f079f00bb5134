//! Least-squares polynomial fitting
//!
//! Coefficients are stored in ascending power order, so `coefficients[k]`
//! multiplies `x^k`. The system is solved through an SVD of the Vandermonde
//! matrix; the normal equations are never formed.

use nalgebra::{DMatrix, DVector, SVD};

use crate::domain::error::{CanvasError, Result};
use crate::domain::geometry::Position;

/// Upper bound on SVD sweeps before a solve is abandoned
const SVD_MAX_ITERATIONS: usize = 1000;

/// Highest polynomial degree the engine will fit
pub const MAX_DEGREE: usize = 32;

/// Largest magnitude allowed in the design matrix or the targets
///
/// Squares of anything bigger can overflow inside the decomposition.
const MAX_SYSTEM_MAGNITUDE: f64 = 1.0e100;

/// Whether the engine currently publishes a fit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitState {
    Unset,
    Fitted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegressionEngine {
    degree: usize,
    coefficients: Option<Vec<f64>>,
}

impl RegressionEngine {
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            coefficients: None,
        }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn state(&self) -> FitState {
        match self.coefficients {
            Some(_) => FitState::Fitted,
            None => FitState::Unset,
        }
    }

    /// Current coefficients in ascending power order
    pub fn coefficients(&self) -> Option<&[f64]> {
        self.coefficients.as_deref()
    }

    /// Refit against the given points
    ///
    /// Fewer than two points leaves the engine unset. Rank-deficient systems
    /// get the minimum-norm solution. A degree above [`MAX_DEGREE`], a system
    /// whose powers overflow, a solve that fails or a non-finite coefficient
    /// also leaves the engine unset.
    pub fn recompute(&mut self, points: impl IntoIterator<Item = Position>) {
        let points: Vec<Position> = points.into_iter().collect();
        self.coefficients = if points.len() < 2 {
            None
        } else {
            solve_least_squares(&points, self.degree)
        };
    }

    /// Evaluate the fit at each x, in order
    pub fn predict(&self, xs: &[f64]) -> Result<Vec<f64>> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Evaluate the fit at a single x
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        let coefficients = self
            .coefficients
            .as_deref()
            .ok_or(CanvasError::NoFitAvailable)?;
        Ok(horner(coefficients, x))
    }

    /// Coefficient of determination of the current fit over `points`
    ///
    /// `None` when unset or when the y-values have no variance.
    pub fn r_squared(&self, points: impl IntoIterator<Item = Position>) -> Option<f64> {
        if self.coefficients.is_none() {
            return None;
        }
        let points: Vec<Position> = points.into_iter().collect();
        if points.is_empty() {
            return None;
        }

        let mean = points.iter().map(|p| p.y).sum::<f64>() / points.len() as f64;
        let total: f64 = points.iter().map(|p| (p.y - mean).powi(2)).sum();
        if total == 0.0 {
            return None;
        }
        let residual = points
            .iter()
            .map(|p| self.evaluate(p.x).map(|y| (p.y - y).powi(2)))
            .sum::<Result<f64>>()
            .ok()?;
        Some(1.0 - residual / total)
    }
}

fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

fn solve_least_squares(points: &[Position], degree: usize) -> Option<Vec<f64>> {
    if points.iter().any(|p| !p.is_finite()) {
        log::warn!("refusing to fit non-finite coordinates");
        return None;
    }

    if degree > MAX_DEGREE {
        log::warn!("refusing to fit degree {} above {}", degree, MAX_DEGREE);
        return None;
    }

    let rows = points.len();
    let cols = degree + 1;
    let mut matrix = DMatrix::<f64>::zeros(rows, cols);
    for (i, point) in points.iter().enumerate() {
        let mut power = 1.0;
        for k in 0..cols {
            matrix[(i, k)] = power;
            power *= point.x;
        }
    }
    let b = DVector::from_iterator(rows, points.iter().map(|p| p.y));

    let in_range = |v: &f64| v.is_finite() && v.abs() <= MAX_SYSTEM_MAGNITUDE;
    if !matrix.iter().all(in_range) || !b.iter().all(in_range) {
        log::warn!("design matrix overflowed for {} points at degree {}", rows, degree);
        return None;
    }

    let Some(decomp) = SVD::try_new(matrix, true, true, f64::EPSILON, SVD_MAX_ITERATIONS) else {
        log::warn!("SVD did not converge for {} points at degree {}", rows, degree);
        return None;
    };

    // Singular values below this are treated as zero, giving the minimum-norm solution
    let sigma_max = decomp.singular_values.max();
    let epsilon = f64::EPSILON * rows.max(cols) as f64 * sigma_max;

    let solution = match decomp.solve(&b, epsilon) {
        Ok(solution) => solution,
        Err(err) => {
            log::warn!("least-squares solve failed: {}", err);
            return None;
        }
    };

    let coefficients: Vec<f64> = solution.iter().copied().collect();
    if coefficients.iter().any(|c| !c.is_finite()) {
        log::warn!("discarding fit with non-finite coefficients");
        return None;
    }
    Some(coefficients)
}
