use crate::domain::{Bounds, PointHandle, PointSet};

/// Interaction state carried between events
///
/// The grabbed handle is only ever set while the grab modifier is held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub grab_modifier_held: bool,
    pub grabbed: Option<PointHandle>,
}

impl InteractionState {
    /// Drop the grab if its point no longer exists
    pub fn forget_stale(&mut self, points: &PointSet) {
        if let Some(handle) = self.grabbed
            && !points.contains(handle)
        {
            self.grabbed = None;
        }
    }
}

/// Where and how new points are placed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub radius: f64,
    pub bounds: Bounds,
}
