//! Scene rendering module
//!
//! This module contains:
//! - The `Canvas` drawing surface the scene is painted onto
//! - Scene composition (background, border, point markers, fitted curve)
//! - A tiny-skia backed canvas that can be saved as PNG

pub mod image;
pub mod scene;

use crate::config::PaintColor;
use crate::domain::{Bounds, Position};

/// Minimal drawing surface
pub trait Canvas {
    /// Paint the whole surface
    fn fill(&mut self, color: PaintColor);

    /// Outline a rectangle
    fn rect(&mut self, bounds: Bounds, color: PaintColor, width: f32);

    /// Filled circle
    fn draw_circle(&mut self, center: Position, radius: f64, color: PaintColor);

    /// Open polyline through `points`
    fn draw_line_strip(&mut self, points: &[Position], color: PaintColor, width: f32);
}
