//! Replay driver
//!
//! Feeds recorded window events through the interaction controller, then
//! renders the resulting scene to PNG and reports the fit.

use std::path::PathBuf;

use anyhow::Context;

use super::script::{self, ScriptEvent};
use crate::config::CanvasConfig;
use crate::domain::PointSet;
use crate::render::image::PixmapCanvas;
use crate::render::scene::draw_scene;
use crate::session::{InteractionState, Outcome, handle_event};

/// Options for one replay run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub script: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub degree: Option<usize>,
    pub save_config: bool,
}

/// Point set plus interaction state driven by window events
pub struct Session {
    config: CanvasConfig,
    points: PointSet,
    state: InteractionState,
}

impl Session {
    pub fn new(config: CanvasConfig) -> Self {
        let points = PointSet::new(config.degree);
        Self {
            config,
            points,
            state: InteractionState::default(),
        }
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Apply one window event, `None` when it had no effect
    pub fn apply(&mut self, event: ScriptEvent) -> Option<Outcome> {
        let input = event.to_input(&self.config);
        let placement = self.config.placement();
        match handle_event(&mut self.state, &mut self.points, &placement, input) {
            Ok(outcome) => {
                if outcome.changed_points() {
                    self.log_fit();
                }
                Some(outcome)
            }
            Err(err) => {
                log::debug!("ignoring {:?}: {}", input, err);
                None
            }
        }
    }

    pub fn replay(&mut self, events: impl IntoIterator<Item = ScriptEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    /// Rasterize the current scene
    pub fn render(&self) -> anyhow::Result<PixmapCanvas> {
        let width = self.config.canvas_width.ceil() as u32;
        let height = self.config.canvas_height.ceil() as u32;
        let mut canvas = PixmapCanvas::new(width, height)
            .with_context(|| format!("invalid canvas size {}x{}", width, height))?;
        draw_scene(
            &mut canvas,
            &self.points,
            self.config.bounds(),
            &self.config.colors,
            self.config.curve_samples,
        );
        Ok(canvas)
    }

    /// One-line description of the current fit
    pub fn fit_summary(&self) -> String {
        let fit = self.points.fit();
        match fit.coefficients() {
            Some(coefficients) => {
                let terms: Vec<String> = coefficients.iter().map(|c| format!("{c:.6e}")).collect();
                match fit.r_squared(self.points.positions()) {
                    Some(r2) => format!("coefficients [{}], r2 {:.6}", terms.join(", "), r2),
                    None => format!("coefficients [{}]", terms.join(", ")),
                }
            }
            None => format!("no fit ({} points)", self.points.len()),
        }
    }

    fn log_fit(&self) {
        log::info!("{} points, {}", self.points.len(), self.fit_summary());
    }
}

/// Default output path, timestamped under the pictures directory
pub fn get_img_path() -> Option<PathBuf> {
    let mut path =
        dirs::picture_dir().or_else(|| dirs::home_dir().map(|h| h.join("Pictures")))?;
    let name = chrono::Local::now()
        .format("Polyfit_%Y-%m-%d_%H-%M-%S.png")
        .to_string();
    path.push(name);
    Some(path)
}

pub fn run(options: RunOptions) -> anyhow::Result<()> {
    let mut config = match &options.config {
        Some(path) => CanvasConfig::load_from(path),
        None => CanvasConfig::load(),
    };
    if let Some(degree) = options.degree {
        config.degree = degree;
    }
    config.validate()?;

    if options.save_config {
        let path = options
            .config
            .clone()
            .or_else(CanvasConfig::default_path)
            .context("no config path available")?;
        config.save_to(&path)?;
        log::info!("saved config to {}", path.display());
    }

    let events = script::load(&options.script)?;
    log::info!("replaying {} events at degree {}", events.len(), config.degree);

    let mut session = Session::new(config);
    session.replay(events);

    let output = options
        .output
        .or_else(get_img_path)
        .context("no output path available")?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    session.render()?.save_png(&output)?;

    println!("{}", session.fit_summary());
    println!("{}", output.display());
    Ok(())
}
