//! Raster rendering using tiny-skia
//!
//! [`PixmapCanvas`] paints the scene into a pixmap which can then be handed
//! out as an `RgbaImage` or written to disk as PNG.

use std::io;
use std::path::Path;

use anyhow::Context;
use image::RgbaImage;
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use super::Canvas;
use crate::config::PaintColor;
use crate::domain::{Bounds, Position};

/// Coordinates are clamped to this magnitude before rasterizing
const COORD_LIMIT: f64 = 1.0e6;

pub struct PixmapCanvas {
    pixmap: Pixmap,
}

impl PixmapCanvas {
    /// New transparent canvas, `None` for a zero-sized surface
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha RGBA of one pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width(), self.height());
        for (dst, src) in img.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        img
    }

    pub fn save_png(&self, path: &Path) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        write_png(io::BufWriter::new(file), &self.to_rgba_image())
            .with_context(|| format!("encoding {}", path.display()))?;
        Ok(())
    }
}

fn paint(color: PaintColor) -> Paint<'static> {
    let [r, g, b, a] = color.to_rgba_u8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn clamp_coord(value: f64) -> f32 {
    value.clamp(-COORD_LIMIT, COORD_LIMIT) as f32
}

impl Canvas for PixmapCanvas {
    fn fill(&mut self, color: PaintColor) {
        let [r, g, b, a] = color.to_rgba_u8();
        self.pixmap.fill(Color::from_rgba8(r, g, b, a));
    }

    fn rect(&mut self, bounds: Bounds, color: PaintColor, width: f32) {
        // Inset by half a stroke so the outline stays on the surface
        let half = f64::from(width) / 2.0;
        let Some(rect) = Rect::from_ltrb(
            clamp_coord(bounds.left + half),
            clamp_coord(bounds.top + half),
            clamp_coord(bounds.right - half),
            clamp_coord(bounds.bottom - half),
        ) else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        let stroke = Stroke {
            width,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
    }

    fn draw_circle(&mut self, center: Position, radius: f64, color: PaintColor) {
        let Some(path) = PathBuilder::from_circle(
            clamp_coord(center.x),
            clamp_coord(center.y),
            radius as f32,
        ) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn draw_line_strip(&mut self, points: &[Position], color: PaintColor, width: f32) {
        let mut pb = PathBuilder::new();
        let mut started = false;
        for point in points.iter().filter(|p| p.is_finite()) {
            let (x, y) = (clamp_coord(point.x), clamp_coord(point.y));
            if started {
                pb.line_to(x, y);
            } else {
                pb.move_to(x, y);
                started = true;
            }
        }
        let Some(path) = pb.finish() else {
            return;
        };

        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
    }
}

fn write_png<W: io::Write>(w: W, image: &RgbaImage) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())
}
