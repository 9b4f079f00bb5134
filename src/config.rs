//! Configuration persistence for polycanvas settings

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::domain::{Bounds, Position};
use crate::regression::MAX_DEGREE;
use crate::session::Placement;

/// Serializable color representation for config storage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl PaintColor {
    pub const WHITE: PaintColor = PaintColor::rgb(1.0, 1.0, 1.0);
    pub const BLACK: PaintColor = PaintColor::rgb(0.0, 0.0, 0.0);
    pub const BLUE: PaintColor = PaintColor::rgb(0.0, 0.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert to RGBA format (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            255,
        ]
    }
}

/// Colors used when drawing the scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneColors {
    pub background: PaintColor,
    pub border: PaintColor,
    pub point: PaintColor,
    pub curve: PaintColor,
}

impl Default for SceneColors {
    fn default() -> Self {
        Self {
            background: PaintColor::WHITE,
            border: PaintColor::BLACK,
            // rgb(0, 100, 0)
            point: PaintColor::rgb(0.0, 100.0 / 255.0, 0.0),
            curve: PaintColor::BLUE,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in logical pixels
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f64,
    /// Canvas height in logical pixels
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f64,
    /// Top-left corner of the canvas in window coordinates
    #[serde(default = "default_canvas_offset")]
    pub canvas_offset: Position,
    /// Degree of the fitted polynomial
    #[serde(default = "default_degree")]
    pub degree: usize,
    /// Hit-test and marker radius of new points
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    /// Number of x-samples used to draw the curve
    #[serde(default = "default_curve_samples")]
    pub curve_samples: usize,
    #[serde(default)]
    pub colors: SceneColors,
}

// A 1366x768 window with the left fifth reserved
fn default_canvas_width() -> f64 {
    1366.0 * 4.0 / 5.0
}

fn default_canvas_height() -> f64 {
    768.0
}

fn default_canvas_offset() -> Position {
    Position::new(1366.0 / 5.0, 0.0)
}

fn default_degree() -> usize {
    3
}

fn default_point_radius() -> f64 {
    5.0
}

fn default_curve_samples() -> usize {
    2000
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            canvas_offset: default_canvas_offset(),
            degree: default_degree(),
            point_radius: default_point_radius(),
            curve_samples: default_curve_samples(),
            colors: SceneColors::default(),
        }
    }
}

impl CanvasConfig {
    /// Directory name under the user config dir
    pub const ID: &'static str = "polycanvas";

    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::ID).join("config.json"))
    }

    /// Load configuration from the default location, or return defaults if unavailable
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("Could not determine config directory, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from `path`, or return defaults if unavailable
    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("validating {}", path.display()))?;
        Ok(config)
    }

    /// Reject settings the fit engine cannot honour
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.degree <= MAX_DEGREE,
            "degree {} is above the maximum of {}",
            self.degree,
            MAX_DEGREE
        );
        Ok(())
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Placement region, in canvas coordinates
    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(self.canvas_width, self.canvas_height)
    }

    pub fn placement(&self) -> Placement {
        Placement {
            radius: self.point_radius,
            bounds: self.bounds(),
        }
    }

    /// Translate a window position into canvas coordinates
    pub fn to_canvas(&self, window: Position) -> Position {
        window.translate(-self.canvas_offset.x, -self.canvas_offset.y)
    }
}
