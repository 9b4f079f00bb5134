//! Input events and controller outcomes
//!
//! Positions carried here are already in canvas coordinates. Translating from
//! window coordinates is the caller's job.

use crate::domain::{Point, PointHandle, Position};

/// Pointer button that triggered a press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button: place, or grab while the grab modifier is held
    Primary,
    /// Right button: remove
    Secondary,
}

/// Input event fed to the interaction controller
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Button pressed at position
    PointerPressed(PointerButton, Position),
    /// Pointer moved to position
    PointerMoved(Position),
    /// Grab modifier pressed
    GrabModifierPressed,
    /// Grab modifier released
    GrabModifierReleased,
}

/// What the controller did with an event
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A new point was placed
    Placed(PointHandle),
    /// A point was removed
    Removed(Point),
    /// A point is now held for dragging
    Grabbed(PointHandle),
    /// The held point followed the pointer
    Moved(PointHandle),
    /// The held point was let go
    Released,
    /// The event does not map to any operation in the current state
    Idle,
}

impl Outcome {
    /// Whether the point set changed, so the scene needs a redraw
    pub fn changed_points(&self) -> bool {
        matches!(
            self,
            Outcome::Placed(_) | Outcome::Removed(_) | Outcome::Moved(_)
        )
    }
}
