//! Scene composition
//!
//! The scene is painted back to front: background, canvas border, point
//! markers in insertion order, then the fitted curve when a fit exists.

use super::Canvas;
use crate::config::SceneColors;
use crate::domain::{Bounds, PointSet, Position};

/// Border stroke width in logical pixels
pub const BORDER_WIDTH: f32 = 1.0;
/// Curve stroke width in logical pixels
pub const CURVE_WIDTH: f32 = 1.0;

/// `count` evenly spaced values from `start` to `end`, both included
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Sample the current fit across the width of `bounds`
///
/// Empty when there is no fit.
pub fn curve_points(points: &PointSet, bounds: Bounds, samples: usize) -> Vec<Position> {
    let xs = linspace(bounds.left, bounds.right, samples);
    match points.fit().predict(&xs) {
        Ok(ys) => xs
            .into_iter()
            .zip(ys)
            .map(|(x, y)| Position::new(x, y))
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Draw the whole scene onto `canvas`
pub fn draw_scene(
    canvas: &mut impl Canvas,
    points: &PointSet,
    bounds: Bounds,
    colors: &SceneColors,
    samples: usize,
) {
    canvas.fill(colors.background);
    canvas.rect(bounds, colors.border, BORDER_WIDTH);

    for (_, point) in points.iter() {
        canvas.draw_circle(point.position(), point.radius(), colors.point);
    }

    let curve = curve_points(points, bounds, samples);
    if curve.len() >= 2 {
        canvas.draw_line_strip(&curve, colors.curve, CURVE_WIDTH);
    }
}
