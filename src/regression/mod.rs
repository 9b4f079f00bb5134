//! Polynomial regression over the current point set

pub mod engine;

pub use engine::{FitState, MAX_DEGREE, RegressionEngine};
