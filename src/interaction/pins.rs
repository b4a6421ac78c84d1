//! User-pinned angles
//!
//! Ids are assigned from a monotonic counter starting at 1 and never reused,
//! even after deletion. At most one pin is selected at a time.

use glam::DVec2;

use crate::geometry::{Viewport, distance_to_segment};
use crate::trig::AngleInfo;

pub type PinId = u32;

/// An angle the user committed with a tap/click
#[derive(Debug, Clone)]
pub struct PinnedAngle {
    pub id: PinId,
    /// Math-space angle in [0, 2π)
    pub angle: f64,
    /// Canvas position of the terminal point when the pin was created
    pub point: DVec2,
    /// Trig info captured at creation
    pub info: AngleInfo,
}

impl PinnedAngle {
    /// Terminal point in the current viewport
    ///
    /// Derived from `angle` rather than `point` so pins follow resizes.
    pub fn endpoint(&self, viewport: &Viewport) -> DVec2 {
        viewport.point_on_circle(self.angle)
    }
}

/// Ordered collection of pins plus the current selection
#[derive(Debug)]
pub struct PinStore {
    pins: Vec<PinnedAngle>,
    next_id: PinId,
    selected: Option<PinId>,
}

impl Default for PinStore {
    fn default() -> Self {
        Self {
            pins: Vec::new(),
            next_id: 1,
            selected: None,
        }
    }
}

impl PinStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pin and return its id
    pub fn create(&mut self, angle: f64, point: DVec2, info: AngleInfo) -> PinId {
        let id = self.next_id;
        self.next_id += 1;
        self.pins.push(PinnedAngle {
            id,
            angle,
            point,
            info,
        });
        id
    }

    /// Remove a pin, clearing the selection if it pointed at it
    ///
    /// Returns false if no such pin exists.
    pub fn delete(&mut self, id: PinId) -> bool {
        let Some(index) = self.pins.iter().position(|p| p.id == id) else {
            return false;
        };
        self.pins.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        true
    }

    /// Remove every pin. The id counter keeps running.
    pub fn clear(&mut self) {
        self.pins.clear();
        self.selected = None;
    }

    /// Select a pin, or deselect it if it is already selected
    ///
    /// Unknown ids leave the selection untouched. Returns the new selection.
    pub fn toggle_select(&mut self, id: PinId) -> Option<PinId> {
        if self.get(id).is_some() {
            self.selected = if self.selected == Some(id) { None } else { Some(id) };
        }
        self.selected()
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Current selection; a dangling id reads as nothing selected
    pub fn selected(&self) -> Option<PinId> {
        self.selected_pin().map(|p| p.id)
    }

    pub fn selected_pin(&self) -> Option<&PinnedAngle> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: PinId) -> Option<&PinnedAngle> {
        self.pins.iter().find(|p| p.id == id)
    }

    /// Pins in creation order
    pub fn pins(&self) -> &[PinnedAngle] {
        &self.pins
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Closest pin to a canvas point, within `threshold` pixels
    ///
    /// Each pin is tested at its endpoint first; only if that misses is the
    /// center→endpoint segment considered.
    pub fn find_nearest(&self, pos: DVec2, viewport: &Viewport, threshold: f64) -> Option<PinId> {
        let mut best = threshold;
        let mut hit = None;

        for pin in &self.pins {
            let end = pin.endpoint(viewport);
            let d_end = pos.distance(end);
            if d_end < best {
                best = d_end;
                hit = Some(pin.id);
                continue;
            }
            let d_line = distance_to_segment(pos, viewport.center, end);
            if d_line < best {
                best = d_line;
                hit = Some(pin.id);
            }
        }

        hit
    }
}
