//! Errors raised by point and fit operations
//!
//! Every variant is a user action that simply has no effect. Callers are
//! expected to log them and carry on.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CanvasError {
    #[error("point radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
    #[error("position ({x}, {y}) lies outside the canvas bounds")]
    OutOfBounds { x: f64, y: f64 },
    #[error("no point under the cursor")]
    NoPointHit,
    #[error("no fit available, at least two points are required")]
    NoFitAvailable,
    #[error("point handle refers to a removed point")]
    StaleHandle,
}

pub type Result<T, E = CanvasError> = std::result::Result<T, E>;
