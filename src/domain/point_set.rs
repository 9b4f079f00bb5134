//! Ordered point collection with generation-checked handles
//!
//! Points live in an arena of slots. A [`PointHandle`] records the slot index
//! together with the slot generation at the time it was issued; removing a
//! point bumps the generation, so handles to removed points stop resolving even
//! after the slot is reused.
//!
//! The set owns its [`RegressionEngine`] and refits before every mutating call
//! returns.

use super::error::{CanvasError, Result};
use super::geometry::{Bounds, Position};
use super::point::Point;
use crate::regression::RegressionEngine;

/// Stable reference to a point in a [`PointSet`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointHandle {
    index: usize,
    generation: u32,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    point: Option<Point>,
}

#[derive(Clone, Debug)]
pub struct PointSet {
    slots: Vec<Slot>,
    free: Vec<usize>,
    /// Live slot indices, oldest first
    order: Vec<usize>,
    fit: RegressionEngine,
}

impl PointSet {
    pub fn new(degree: usize) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            order: Vec::new(),
            fit: RegressionEngine::new(degree),
        }
    }

    pub fn degree(&self) -> usize {
        self.fit.degree()
    }

    /// The fit over the current points
    pub fn fit(&self) -> &RegressionEngine {
        &self.fit
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Append a point if `position` lies inside `bounds`, then refit
    pub fn place(
        &mut self,
        position: Position,
        radius: f64,
        bounds: Bounds,
    ) -> Result<PointHandle> {
        if !bounds.contains(position) {
            return Err(CanvasError::OutOfBounds {
                x: position.x,
                y: position.y,
            });
        }
        let point = Point::new(position, radius)?;

        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index].point = Some(point);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    point: Some(point),
                });
                self.slots.len() - 1
            }
        };
        self.order.push(index);
        self.refit();

        Ok(PointHandle {
            index,
            generation: self.slots[index].generation,
        })
    }

    /// Remove the most recently placed point under the cursor, then refit
    pub fn remove_at(&mut self, cursor: Position) -> Result<Point> {
        let handle = self.find_at(cursor).ok_or(CanvasError::NoPointHit)?;
        self.remove(handle)
    }

    /// Remove the point behind `handle`, then refit
    pub fn remove(&mut self, handle: PointHandle) -> Result<Point> {
        let slot = self
            .slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .ok_or(CanvasError::StaleHandle)?;
        let point = slot.point.take().ok_or(CanvasError::StaleHandle)?;
        slot.generation = slot.generation.wrapping_add(1);

        self.order.retain(|&index| index != handle.index);
        self.free.push(handle.index);
        self.refit();
        Ok(point)
    }

    /// Most recently placed point under the cursor
    pub fn find_at(&self, cursor: Position) -> Option<PointHandle> {
        self.order.iter().rev().find_map(|&index| {
            let slot = &self.slots[index];
            let point = slot.point.as_ref()?;
            point.hit_test(cursor).then_some(PointHandle {
                index,
                generation: slot.generation,
            })
        })
    }

    /// Move the point behind `handle`, then refit
    pub fn move_point(&mut self, handle: PointHandle, position: Position) -> Result<()> {
        let point = self.get_mut(handle).ok_or(CanvasError::StaleHandle)?;
        point.move_to(position);
        self.refit();
        Ok(())
    }

    /// Resolve a handle, `None` once the point has been removed
    pub fn get(&self, handle: PointHandle) -> Option<&Point> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.point.as_ref())
    }

    pub fn contains(&self, handle: PointHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Points in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (PointHandle, &Point)> + '_ {
        self.order.iter().filter_map(|&index| {
            let slot = &self.slots[index];
            let point = slot.point.as_ref()?;
            Some((
                PointHandle {
                    index,
                    generation: slot.generation,
                },
                point,
            ))
        })
    }

    /// Point positions in insertion order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter().map(|(_, point)| point.position())
    }

    fn get_mut(&mut self, handle: PointHandle) -> Option<&mut Point> {
        self.slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.point.as_mut())
    }

    fn refit(&mut self) {
        let positions: Vec<Position> = self.positions().collect();
        self.fit.recompute(positions);
    }
}
