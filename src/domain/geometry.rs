//! Geometric types for canvas coordinates

use serde::{Deserialize, Serialize};

/// A location in canvas coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position
    pub fn distance(&self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Translate the position by the given offset
    pub fn translate(&self, dx: f64, dy: f64) -> Position {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in canvas coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Create a new rectangle from coordinates
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle anchored at the origin with the given size
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Get the width of the rectangle
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Get the height of the rectangle
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Check if this rectangle contains a position, edges included
    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.left
            && position.x <= self.right
            && position.y >= self.top
            && position.y <= self.bottom
    }
}
