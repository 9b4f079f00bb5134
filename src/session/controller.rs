//! Decides which point operation an input event triggers
//!
//! - Primary press places a point, or grabs the topmost point under the cursor
//!   while the grab modifier is held.
//! - Secondary press removes the topmost point under the cursor.
//! - Pointer motion drags the grabbed point.
//! - Releasing the grab modifier lets go of the grabbed point.

use super::messages::{InputEvent, Outcome, PointerButton};
use super::state::{InteractionState, Placement};
use crate::domain::error::Result;
use crate::domain::{CanvasError, PointSet, Position};

/// Handle one input event, mutating `points` and `state`
///
/// Errors mean the event had no effect.
pub fn handle_event(
    state: &mut InteractionState,
    points: &mut PointSet,
    placement: &Placement,
    event: InputEvent,
) -> Result<Outcome> {
    match event {
        InputEvent::GrabModifierPressed => {
            state.grab_modifier_held = true;
            Ok(Outcome::Idle)
        }
        InputEvent::GrabModifierReleased => {
            state.grab_modifier_held = false;
            Ok(match state.grabbed.take() {
                Some(_) => Outcome::Released,
                None => Outcome::Idle,
            })
        }
        InputEvent::PointerPressed(PointerButton::Primary, position) => {
            if state.grab_modifier_held {
                grab(state, points, position)
            } else {
                let handle = points.place(position, placement.radius, placement.bounds)?;
                Ok(Outcome::Placed(handle))
            }
        }
        InputEvent::PointerPressed(PointerButton::Secondary, position) => {
            let removed = points.remove_at(position)?;
            state.forget_stale(points);
            Ok(Outcome::Removed(removed))
        }
        InputEvent::PointerMoved(position) => drag(state, points, position),
    }
}

fn grab(state: &mut InteractionState, points: &PointSet, position: Position) -> Result<Outcome> {
    state.grabbed = points.find_at(position);
    match state.grabbed {
        Some(handle) => Ok(Outcome::Grabbed(handle)),
        None => Err(CanvasError::NoPointHit),
    }
}

fn drag(
    state: &mut InteractionState,
    points: &mut PointSet,
    position: Position,
) -> Result<Outcome> {
    let Some(handle) = state.grabbed else {
        return Ok(Outcome::Idle);
    };
    if let Err(err) = points.move_point(handle, position) {
        state.grabbed = None;
        return Err(err);
    }
    Ok(Outcome::Moved(handle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bounds;
    use crate::regression::FitState;

    fn placement() -> Placement {
        Placement {
            radius: 5.0,
            bounds: Bounds::from_size(100.0, 100.0),
        }
    }

    fn press(button: PointerButton, x: f64, y: f64) -> InputEvent {
        InputEvent::PointerPressed(button, Position::new(x, y))
    }

    fn run(
        state: &mut InteractionState,
        points: &mut PointSet,
        events: &[InputEvent],
    ) -> Vec<Result<Outcome>> {
        events
            .iter()
            .map(|event| handle_event(state, points, &placement(), *event))
            .collect()
    }

    #[test]
    fn test_primary_press_places_point() {
        let mut state = InteractionState::default();
        let mut points = PointSet::new(1);
        let outcomes = run(
            &mut state,
            &mut points,
            &[
                press(PointerButton::Primary, 10.0, 10.0),
                press(PointerButton::Primary, 20.0, 30.0),
            ],
        );
        assert!(matches!(outcomes[0], Ok(Outcome::Placed(_))));
        assert!(matches!(outcomes[1], Ok(Outcome::Placed(_))));
        assert_eq!(points.len(), 2);
        assert_eq!(points.fit().state(), FitState::Fitted);
    }

    #[test]
    fn test_press_outside_canvas_is_rejected() {
        let mut state = InteractionState::default();
        let mut points = PointSet::new(1);
        let result = handle_event(
            &mut state,
            &mut points,
            &placement(),
            press(PointerButton::Primary, 150.0, 20.0),
        );
        assert!(matches!(result, Err(CanvasError::OutOfBounds { .. })));
        assert!(points.is_empty());
    }

    #[test]
    fn test_secondary_press_removes_point() {
        let mut state = InteractionState::default();
        let mut points = PointSet::new(1);
        let outcomes = run(
            &mut state,
            &mut points,
            &[
                press(PointerButton::Primary, 10.0, 10.0),
                press(PointerButton::Secondary, 12.0, 10.0),
                press(PointerButton::Secondary, 12.0, 10.0),
            ],
        );
        assert!(matches!(outcomes[1], Ok(Outcome::Removed(_))));
        assert_eq!(outcomes[2], Err(CanvasError::NoPointHit));
        assert!(points.is_empty());
    }

    #[test]
    fn test_grab_drag_release() {
        let mut state = InteractionState::default();
        let mut points = PointSet::new(1);
        let outcomes = run(
            &mut state,
            &mut points,
            &[
                press(PointerButton::Primary, 10.0, 10.0),
                press(PointerButton::Primary, 20.0, 20.0),
                InputEvent::GrabModifierPressed,
                press(PointerButton::Primary, 21.0, 21.0),
                InputEvent::PointerMoved(Position::new(20.0, 40.0)),
                InputEvent::GrabModifierReleased,
                InputEvent::PointerMoved(Position::new(90.0, 90.0)),
            ],
        );
        assert!(matches!(outcomes[3], Ok(Outcome::Grabbed(_))));
        assert!(matches!(outcomes[4], Ok(Outcome::Moved(_))));
        assert_eq!(outcomes[5], Ok(Outcome::Released));
        assert_eq!(outcomes[6], Ok(Outcome::Idle));
        assert_eq!(state, InteractionState::default());

        let positions: Vec<Position> = points.positions().collect();
        assert_eq!(positions, vec![Position::new(10.0, 10.0), Position::new(20.0, 40.0)]);
        let slope = points.fit().coefficients().unwrap()[1];
        assert!((slope - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_grab_on_empty_space_holds_nothing() {
        let mut state = InteractionState::default();
        let mut points = PointSet::new(1);
        let outcomes = run(
            &mut state,
            &mut points,
            &[
                InputEvent::GrabModifierPressed,
                press(PointerButton::Primary, 50.0, 50.0),
                InputEvent::PointerMoved(Position::new(60.0, 60.0)),
            ],
        );
        assert_eq!(outcomes[1], Err(CanvasError::NoPointHit));
        assert_eq!(outcomes[2], Ok(Outcome::Idle));
        assert!(points.is_empty());
    }

    #[test]
    fn test_removing_grabbed_point_drops_grab() {
        let mut state = InteractionState::default();
        let mut points = PointSet::new(1);
        let outcomes = run(
            &mut state,
            &mut points,
            &[
                press(PointerButton::Primary, 10.0, 10.0),
                InputEvent::GrabModifierPressed,
                press(PointerButton::Primary, 10.0, 10.0),
                press(PointerButton::Secondary, 10.0, 10.0),
                press(PointerButton::Primary, 70.0, 70.0),
                InputEvent::PointerMoved(Position::new(30.0, 30.0)),
            ],
        );
        assert!(matches!(outcomes[3], Ok(Outcome::Removed(_))));
        assert_eq!(state.grabbed, None);
        assert_eq!(outcomes[4], Err(CanvasError::NoPointHit));
        assert_eq!(outcomes[5], Ok(Outcome::Idle));
    }

    #[test]
    fn test_drag_with_stale_handle_is_rejected() {
        let mut points = PointSet::new(1);
        let handle = points
            .place(Position::new(10.0, 10.0), 5.0, placement().bounds)
            .unwrap();
        points.remove(handle).unwrap();

        let mut state = InteractionState {
            grab_modifier_held: true,
            grabbed: Some(handle),
        };
        let result = handle_event(
            &mut state,
            &mut points,
            &placement(),
            InputEvent::PointerMoved(Position::new(40.0, 40.0)),
        );
        assert_eq!(result, Err(CanvasError::StaleHandle));
        assert_eq!(state.grabbed, None);
        assert!(points.is_empty());
    }
}
