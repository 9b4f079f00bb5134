//! Pointer interaction over a point set
//!
//! This module contains:
//! - Input events and outcomes
//! - Explicit interaction state (grab modifier, grabbed point)
//! - The controller deciding which operation an event triggers

pub mod controller;
pub mod messages;
pub mod state;

pub use controller::handle_event;
pub use messages::{InputEvent, Outcome, PointerButton};
pub use state::{InteractionState, Placement};
