//! Recorded window events
//!
//! A script is a JSON array of events in window coordinates, for example:
//!
//! ```json
//! [
//!   { "type": "press", "button": "primary", "x": 400, "y": 300 },
//!   { "type": "modifier_down" },
//!   { "type": "move", "x": 420, "y": 280 },
//!   { "type": "modifier_up" }
//! ]
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::config::CanvasConfig;
use crate::domain::Position;
use crate::session::{InputEvent, PointerButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptButton {
    Primary,
    Secondary,
}

impl From<ScriptButton> for PointerButton {
    fn from(button: ScriptButton) -> Self {
        match button {
            ScriptButton::Primary => PointerButton::Primary,
            ScriptButton::Secondary => PointerButton::Secondary,
        }
    }
}

/// One event in window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Press { button: ScriptButton, x: f64, y: f64 },
    Move { x: f64, y: f64 },
    ModifierDown,
    ModifierUp,
}

impl ScriptEvent {
    /// Convert to a controller event in canvas coordinates
    pub fn to_input(self, config: &CanvasConfig) -> InputEvent {
        match self {
            ScriptEvent::Press { button, x, y } => {
                InputEvent::PointerPressed(button.into(), config.to_canvas(Position::new(x, y)))
            }
            ScriptEvent::Move { x, y } => {
                InputEvent::PointerMoved(config.to_canvas(Position::new(x, y)))
            }
            ScriptEvent::ModifierDown => InputEvent::GrabModifierPressed,
            ScriptEvent::ModifierUp => InputEvent::GrabModifierReleased,
        }
    }
}

pub fn parse(text: &str) -> anyhow::Result<Vec<ScriptEvent>> {
    Ok(serde_json::from_str(text)?)
}

pub fn load(path: &Path) -> anyhow::Result<Vec<ScriptEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing script {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let events = parse(
            r#"[
                { "type": "press", "button": "primary", "x": 300, "y": 40 },
                { "type": "press", "button": "secondary", "x": 1.5, "y": 2 },
                { "type": "modifier_down" },
                { "type": "move", "x": 10, "y": 20 },
                { "type": "modifier_up" }
            ]"#,
        )
        .unwrap();
        assert_eq!(
            events,
            vec![
                ScriptEvent::Press {
                    button: ScriptButton::Primary,
                    x: 300.0,
                    y: 40.0
                },
                ScriptEvent::Press {
                    button: ScriptButton::Secondary,
                    x: 1.5,
                    y: 2.0
                },
                ScriptEvent::ModifierDown,
                ScriptEvent::Move { x: 10.0, y: 20.0 },
                ScriptEvent::ModifierUp,
            ]
        );
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        assert!(parse(r#"[{ "type": "scroll", "x": 1, "y": 2 }]"#).is_err());
    }

    #[test]
    fn test_to_input_applies_canvas_offset() {
        let config = CanvasConfig {
            canvas_offset: Position::new(100.0, 0.0),
            ..CanvasConfig::default()
        };
        let event = ScriptEvent::Press {
            button: ScriptButton::Secondary,
            x: 150.0,
            y: 60.0,
        };
        assert_eq!(
            event.to_input(&config),
            InputEvent::PointerPressed(PointerButton::Secondary, Position::new(50.0, 60.0))
        );
        assert_eq!(
            ScriptEvent::ModifierUp.to_input(&config),
            InputEvent::GrabModifierReleased
        );
    }
}
