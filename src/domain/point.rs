//! A single interactive point

use super::error::{CanvasError, Result};
use super::geometry::Position;

/// A 2D location with a hit-test radius
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    position: Position,
    radius: f64,
}

impl Point {
    /// Create a point, rejecting radii that are not finite and positive
    pub fn new(position: Position, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(CanvasError::InvalidRadius(radius));
        }
        Ok(Self { position, radius })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    /// Whether the cursor lies within the radius, boundary included
    pub fn hit_test(&self, cursor: Position) -> bool {
        self.position.distance(cursor) <= self.radius
    }
}
