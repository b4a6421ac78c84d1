//! Pointer state machine
//!
//! Consumes unified pointer events and decides whether interaction is active,
//! which pin is hovered or selected, when a pin is created, and what needs
//! refreshing. Handlers run to completion and report their side effects in
//! an [`Outcome`]; the caller performs them synchronously.

use glam::DVec2;

use super::event::{PointerEvent, PointerKind, PointerSource};
use super::pins::{PinId, PinStore, PinnedAngle};
use crate::consts::{ANGLE_HYSTERESIS, PIN_HIT_THRESHOLD, TOUCH_MOVE_THRESHOLD};
use crate::geometry::Viewport;
use crate::platform::CursorStyle;
use crate::settings::Options;
use crate::trig::{AngleInfo, angle_info, normalize, snap};

/// High-level controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    /// Pointer is near the circle and the live angle follows it
    Hovering,
    /// A pin is selected; the displayed angle is frozen to it
    PinSelected,
}

/// Mutable pointer state, owned by the controller
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub is_interaction_active: bool,
    pub pointer_pos: Option<DVec2>,
    /// Live angle in [0, 2π)
    pub current_angle: f64,
    /// Canvas point on the circle for `current_angle`
    pub current_point: DVec2,
    pub hovered_pin: Option<PinId>,
    pub touch_moved: bool,
    touch_start: Option<DVec2>,
    pressed: bool,
    cursor: CursorStyle,
}

/// Side effects requested by a handler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub redraw: bool,
    pub refresh_info: bool,
    pub pins_changed: bool,
    /// New cursor, only when it changed
    pub cursor: Option<CursorStyle>,
}

impl Outcome {
    fn refresh() -> Self {
        Self {
            redraw: true,
            refresh_info: true,
            ..Default::default()
        }
    }

    fn pins() -> Self {
        Self {
            pins_changed: true,
            ..Self::refresh()
        }
    }

    fn merge(&mut self, other: Outcome) {
        self.redraw |= other.redraw;
        self.refresh_info |= other.refresh_info;
        self.pins_changed |= other.pins_changed;
        if other.cursor.is_some() {
            self.cursor = other.cursor;
        }
    }

    /// True if nothing needs doing
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Default)]
pub struct InteractionController {
    state: InteractionState,
    pins: PinStore,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn pins(&self) -> &PinStore {
        &self.pins
    }

    pub fn mode(&self) -> Mode {
        if self.pins.selected().is_some() {
            Mode::PinSelected
        } else if self.state.is_interaction_active {
            Mode::Hovering
        } else {
            Mode::Idle
        }
    }

    pub fn selected_pin(&self) -> Option<&PinnedAngle> {
        self.pins.selected_pin()
    }

    /// Angle the diagram and info panel should show, if any
    pub fn display_angle(&self) -> Option<f64> {
        if let Some(pin) = self.pins.selected_pin() {
            Some(pin.angle)
        } else if self.state.is_interaction_active {
            Some(self.state.current_angle)
        } else {
            None
        }
    }

    /// Info for [`Self::display_angle`]; a selected pin reports its snapshot
    pub fn display_info(&self) -> Option<AngleInfo> {
        if let Some(pin) = self.pins.selected_pin() {
            Some(pin.info.clone())
        } else if self.state.is_interaction_active {
            Some(angle_info(self.state.current_angle))
        } else {
            None
        }
    }

    /// Terminal point of the displayed angle in the current viewport
    pub fn display_point(&self, viewport: &Viewport) -> Option<DVec2> {
        if let Some(pin) = self.pins.selected_pin() {
            Some(pin.endpoint(viewport))
        } else if self.state.is_interaction_active {
            Some(self.state.current_point)
        } else {
            None
        }
    }

    /// Re-derive viewport-dependent state after the surface changed size
    ///
    /// The live point is moved onto the new circle and the hovered pin is
    /// re-tested at the last pointer position.
    pub fn relayout(&mut self, viewport: &Viewport) -> Outcome {
        self.state.current_point = viewport.point_on_circle(self.state.current_angle);
        let hovered = self
            .state
            .pointer_pos
            .and_then(|pos| self.pins.find_nearest(pos, viewport, PIN_HIT_THRESHOLD));
        self.state.hovered_pin = hovered;

        let mut outcome = Outcome {
            redraw: true,
            ..Default::default()
        };
        outcome.merge(self.sync_cursor());
        outcome
    }

    /// Single entry point for pointer input
    pub fn handle_event(&mut self, event: PointerEvent, viewport: &Viewport, options: &Options) -> Outcome {
        let mut outcome = match event.kind {
            PointerKind::Down => self.pointer_down(event, viewport, options),
            PointerKind::Move => self.pointer_move(event, viewport, options),
            PointerKind::Up => self.pointer_up(event, viewport),
            PointerKind::Leave | PointerKind::Cancel => self.pointer_end(),
        };
        outcome.merge(self.sync_cursor());
        outcome
    }

    fn pointer_down(&mut self, event: PointerEvent, viewport: &Viewport, options: &Options) -> Outcome {
        let Some(pos) = event.pos else {
            return Outcome::default();
        };

        self.state.pressed = true;
        if event.source == PointerSource::Touch {
            self.state.touch_start = Some(pos);
            self.state.touch_moved = false;
        }

        if !viewport.is_interactive(pos) {
            self.state.pointer_pos = Some(pos);
            return Outcome::default();
        }

        let mut outcome = Outcome::default();
        if !self.state.is_interaction_active {
            self.state.is_interaction_active = true;
            outcome.merge(Outcome::refresh());
        }
        outcome.merge(self.pointer_move(event, viewport, options));
        outcome
    }

    fn pointer_move(&mut self, event: PointerEvent, viewport: &Viewport, options: &Options) -> Outcome {
        let Some(pos) = event.pos else {
            return Outcome::default();
        };
        let mut outcome = Outcome::default();
        self.state.pointer_pos = Some(pos);

        if event.source == PointerSource::Touch {
            if let Some(start) = self.state.touch_start {
                if pos.distance(start) > TOUCH_MOVE_THRESHOLD {
                    self.state.touch_moved = true;
                }
            }
        }

        let hovered = self.pins.find_nearest(pos, viewport, PIN_HIT_THRESHOLD);
        if hovered != self.state.hovered_pin {
            self.state.hovered_pin = hovered;
            outcome.redraw = true;
        }

        // Selection freezes the displayed angle
        if self.pins.selected().is_some() {
            return outcome;
        }

        let active = viewport.is_interactive(pos);
        if active != self.state.is_interaction_active {
            log::debug!("interaction {}", if active { "active" } else { "inactive" });
            self.state.is_interaction_active = active;
            outcome.merge(Outcome::refresh());
        }
        if !active {
            return outcome;
        }

        let raw = normalize(viewport.angle_of(pos));
        let angle = if options.snap_to_angles { snap(raw) } else { raw };
        if (angle - self.state.current_angle).abs() > ANGLE_HYSTERESIS {
            if angle != raw {
                log::debug!("snapped {raw:.4} -> {angle:.4}");
            }
            self.state.current_angle = angle;
            outcome.merge(Outcome::refresh());
        }
        self.state.current_point = viewport.point_on_circle(self.state.current_angle);

        outcome
    }

    fn pointer_up(&mut self, event: PointerEvent, viewport: &Viewport) -> Outcome {
        let Some(pos) = event.pos else {
            return Outcome::default();
        };
        if !std::mem::take(&mut self.state.pressed) {
            return Outcome::default();
        }
        if event.source == PointerSource::Touch && self.state.touch_moved {
            // a drag, not a tap
            return Outcome::default();
        }

        if let Some(id) = self.pins.find_nearest(pos, viewport, PIN_HIT_THRESHOLD) {
            let selected = self.pins.toggle_select(id);
            log::debug!("pin {id} {}", if selected.is_some() { "selected" } else { "deselected" });
            return Outcome::pins();
        }

        let inside = viewport.is_interactive(pos);
        if let Some(id) = self.pins.selected() {
            if inside {
                // Consumes the click: creating a new pin takes a second one
                self.pins.deselect();
                log::debug!("pin {id} deselected");
                return Outcome::pins();
            }
            return Outcome::default();
        }

        if inside {
            let angle = self.state.current_angle;
            let point = viewport.point_on_circle(angle);
            let id = self.pins.create(angle, point, angle_info(angle));
            self.pins.toggle_select(id);
            log::info!("pinned angle {id} at {:.2}°", angle.to_degrees());
            return Outcome::pins();
        }

        Outcome::default()
    }

    fn pointer_end(&mut self) -> Outcome {
        let mut outcome = Outcome::default();
        if self.state.is_interaction_active || self.state.hovered_pin.is_some() {
            self.state.is_interaction_active = false;
            self.state.hovered_pin = None;
            outcome = Outcome::refresh();
        }
        self.state.touch_moved = false;
        self.state.touch_start = None;
        self.state.pressed = false;
        outcome
    }

    /// Select or deselect a pin from the pinned list
    pub fn toggle_pin(&mut self, id: PinId) -> Outcome {
        if self.pins.get(id).is_none() {
            return Outcome::default();
        }
        self.pins.toggle_select(id);
        Outcome::pins()
    }

    pub fn delete_pin(&mut self, id: PinId) -> Outcome {
        if !self.pins.delete(id) {
            return Outcome::default();
        }
        if self.state.hovered_pin == Some(id) {
            self.state.hovered_pin = None;
        }
        log::info!("deleted pin {id}");
        let mut outcome = Outcome::pins();
        outcome.merge(self.sync_cursor());
        outcome
    }

    pub fn clear_pins(&mut self) -> Outcome {
        if self.pins.is_empty() {
            return Outcome::default();
        }
        log::info!("cleared {} pins", self.pins.len());
        self.pins.clear();
        self.state.hovered_pin = None;
        let mut outcome = Outcome::pins();
        outcome.merge(self.sync_cursor());
        outcome
    }

    fn sync_cursor(&mut self) -> Outcome {
        let cursor = if self.state.hovered_pin.is_some() {
            CursorStyle::Pointer
        } else if self.state.is_interaction_active {
            CursorStyle::Crosshair
        } else {
            CursorStyle::Default
        };
        if cursor == self.state.cursor {
            return Outcome::default();
        }
        self.state.cursor = cursor;
        Outcome {
            cursor: Some(cursor),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn setup() -> (InteractionController, Viewport, Options) {
        (
            InteractionController::new(),
            Viewport::from_size(500.0, 500.0),
            Options::default(),
        )
    }

    /// Canvas point at a math angle (degrees) and radius fraction
    fn at(vp: &Viewport, degrees: f64, scale: f64) -> DVec2 {
        vp.point_at(degrees.to_radians(), scale)
    }

    fn send(c: &mut InteractionController, vp: &Viewport, o: &Options, kind: PointerKind, p: DVec2) -> Outcome {
        c.handle_event(PointerEvent::mouse(kind, p.x, p.y), vp, o)
    }

    #[test]
    fn test_down_inside_activates_and_tracks() {
        let (mut c, vp, o) = setup();
        let out = send(&mut c, &vp, &o, PointerKind::Down, at(&vp, 100.0, 0.8));
        assert!(out.redraw && out.refresh_info);
        assert_eq!(out.cursor, Some(CursorStyle::Crosshair));
        assert_eq!(c.mode(), Mode::Hovering);
        assert!((c.state().current_angle - 100.0_f64.to_radians()).abs() < 1e-9);
    }

    #[test]
    fn test_down_outside_is_ignored() {
        let (mut c, vp, o) = setup();
        let out = send(&mut c, &vp, &o, PointerKind::Down, at(&vp, 10.0, 1.5));
        assert!(out.is_noop());
        assert_eq!(c.mode(), Mode::Idle);
    }

    #[test]
    fn test_snapping_and_hysteresis() {
        let (mut c, vp, o) = setup();
        send(&mut c, &vp, &o, PointerKind::Down, at(&vp, 44.9, 0.9));
        assert_eq!(c.state().current_angle, FRAC_PI_4);

        let out = send(&mut c, &vp, &o, PointerKind::Move, at(&vp, 45.3, 0.9));
        assert_eq!(c.state().current_angle, FRAC_PI_4);
        assert!(!out.refresh_info);
    }

    #[test]
    fn test_no_snapping_when_disabled() {
        let (mut c, vp, mut o) = setup();
        o.snap_to_angles = false;
        send(&mut c, &vp, &o, PointerKind::Down, at(&vp, 44.9, 0.9));
        assert!((c.state().current_angle - 44.9_f64.to_radians()).abs() < 1e-9);
    }

    #[test]
    fn test_small_moves_do_not_update_angle() {
        let (mut c, vp, mut o) = setup();
        o.snap_to_angles = false;
        send(&mut c, &vp, &o, PointerKind::Down, at(&vp, 20.0, 0.9));
        let before = c.state().current_angle;
        let out = send(&mut c, &vp, &o, PointerKind::Move, vp.point_at(before + 0.0005, 0.9));
        assert_eq!(c.state().current_angle, before);
        assert!(out.is_noop());
    }

    #[test]
    fn test_tap_creates_and_selects_pin() {
        let (mut c, vp, o) = setup();
        let p = at(&vp, 60.0, 0.7);
        send(&mut c, &vp, &o, PointerKind::Down, p);
        let out = send(&mut c, &vp, &o, PointerKind::Up, p);
        assert!(out.pins_changed);
        assert_eq!(c.pins().len(), 1);
        assert_eq!(c.mode(), Mode::PinSelected);
        let pin = c.selected_pin().unwrap();
        assert_eq!(pin.id, 1);
        assert!(pin.info.is_exact());
        assert_eq!(pin.point, vp.point_on_circle(pin.angle));
    }

    #[test]
    fn test_click_inside_with_selection_only_deselects() {
        let (mut c, vp, o) = setup();
        let p = at(&vp, 60.0, 0.7);
        send(&mut c, &vp, &o, PointerKind::Down, p);
        send(&mut c, &vp, &o, PointerKind::Up, p);

        // elsewhere inside the circle, away from the pin
        let q = at(&vp, 200.0, 0.6);
        send(&mut c, &vp, &o, PointerKind::Down, q);
        send(&mut c, &vp, &o, PointerKind::Up, q);
        assert_eq!(c.pins().len(), 1);
        assert_eq!(c.mode(), Mode::Hovering);

        // second click creates
        send(&mut c, &vp, &o, PointerKind::Down, q);
        send(&mut c, &vp, &o, PointerKind::Up, q);
        assert_eq!(c.pins().len(), 2);
        assert_eq!(c.selected_pin().unwrap().id, 2);
    }

    #[test]
    fn test_click_on_pin_toggles_it() {
        let (mut c, vp, o) = setup();
        let p = at(&vp, 30.0, 0.7);
        send(&mut c, &vp, &o, PointerKind::Down, p);
        send(&mut c, &vp, &o, PointerKind::Up, p);
        assert_eq!(c.pins().selected(), Some(1));

        let end = vp.point_on_circle(PI / 6.0);
        send(&mut c, &vp, &o, PointerKind::Down, end);
        send(&mut c, &vp, &o, PointerKind::Up, end);
        assert_eq!(c.pins().selected(), None);

        send(&mut c, &vp, &o, PointerKind::Down, end);
        send(&mut c, &vp, &o, PointerKind::Up, end);
        assert_eq!(c.pins().selected(), Some(1));
        assert_eq!(c.pins().len(), 1);
    }

    #[test]
    fn test_selection_freezes_angle() {
        let (mut c, vp, o) = setup();
        let p = at(&vp, 90.0, 0.7);
        send(&mut c, &vp, &o, PointerKind::Down, p);
        send(&mut c, &vp, &o, PointerKind::Up, p);
        assert_eq!(c.display_angle(), Some(FRAC_PI_2));

        send(&mut c, &vp, &o, PointerKind::Move, at(&vp, 200.0, 0.8));
        assert_eq!(c.display_angle(), Some(FRAC_PI_2));
        assert_eq!(c.state().current_angle, FRAC_PI_2);
    }

    #[test]
    fn test_hover_pin_changes_cursor() {
        let (mut c, vp, o) = setup();
        let p = at(&vp, 0.0, 0.5);
        send(&mut c, &vp, &o, PointerKind::Down, p);
        send(&mut c, &vp, &o, PointerKind::Up, p);

        let out = send(&mut c, &vp, &o, PointerKind::Move, vp.point_on_circle(0.0));
        assert_eq!(c.state().hovered_pin, Some(1));
        assert_eq!(out.cursor, Some(CursorStyle::Pointer));
        assert!(out.redraw);
    }

    #[test]
    fn test_touch_drag_does_not_commit() {
        let (mut c, vp, o) = setup();
        let start = at(&vp, 30.0, 0.7);
        let end = at(&vp, 80.0, 0.7);
        c.handle_event(PointerEvent::touch(PointerKind::Down, start.x, start.y), &vp, &o);
        c.handle_event(PointerEvent::touch(PointerKind::Move, end.x, end.y), &vp, &o);
        assert!(c.state().touch_moved);
        let out = c.handle_event(PointerEvent::touch(PointerKind::Up, end.x, end.y), &vp, &o);
        assert!(!out.pins_changed);
        assert!(c.pins().is_empty());
    }

    #[test]
    fn test_touch_tap_commits() {
        let (mut c, vp, o) = setup();
        let p = at(&vp, 150.0, 0.7);
        c.handle_event(PointerEvent::touch(PointerKind::Down, p.x, p.y), &vp, &o);
        c.handle_event(PointerEvent::touch(PointerKind::Move, p.x + 2.0, p.y), &vp, &o);
        c.handle_event(PointerEvent::touch(PointerKind::Up, p.x + 2.0, p.y), &vp, &o);
        assert_eq!(c.pins().len(), 1);
    }

    #[test]
    fn test_missing_coordinates_are_noops() {
        let (mut c, vp, o) = setup();
        for kind in [PointerKind::Down, PointerKind::Move, PointerKind::Up] {
            let out = c.handle_event(PointerEvent::new(kind, PointerSource::Touch, None), &vp, &o);
            assert!(out.is_noop());
        }
        assert_eq!(c.mode(), Mode::Idle);
    }

    #[test]
    fn test_up_without_down_is_ignored() {
        let (mut c, vp, o) = setup();
        let out = send(&mut c, &vp, &o, PointerKind::Up, at(&vp, 45.0, 0.5));
        assert!(out.is_noop());
        assert!(c.pins().is_empty());
    }

    #[test]
    fn test_leave_clears_activity() {
        let (mut c, vp, o) = setup();
        send(&mut c, &vp, &o, PointerKind::Move, at(&vp, 45.0, 0.5));
        assert_eq!(c.mode(), Mode::Hovering);

        let out = c.handle_event(PointerEvent::leave(PointerSource::Mouse), &vp, &o);
        assert!(out.redraw && out.refresh_info);
        assert_eq!(out.cursor, Some(CursorStyle::Default));
        assert_eq!(c.mode(), Mode::Idle);
        assert!(c.display_info().is_none());

        let again = c.handle_event(PointerEvent::leave(PointerSource::Mouse), &vp, &o);
        assert!(again.is_noop());
    }

    #[test]
    fn test_live_point_follows_angle_at_zero() {
        let (mut c, vp, o) = setup();
        send(&mut c, &vp, &o, PointerKind::Down, at(&vp, 0.3, 0.8));
        assert_eq!(c.state().current_angle, 0.0);
        assert_eq!(c.state().current_point, vp.point_on_circle(0.0));
        assert_eq!(c.display_point(&vp), Some(vp.point_on_circle(0.0)));
    }

    #[test]
    fn test_cancel_clears_hover_without_activity() {
        let (mut c, vp, o) = setup();
        let p = at(&vp, 60.0, 0.7);
        send(&mut c, &vp, &o, PointerKind::Down, p);
        send(&mut c, &vp, &o, PointerKind::Up, p);
        c.handle_event(PointerEvent::leave(PointerSource::Mouse), &vp, &o);

        // selection skips activation, so only the hover is set
        send(&mut c, &vp, &o, PointerKind::Move, vp.point_on_circle(PI / 3.0));
        assert!(!c.state().is_interaction_active);
        assert_eq!(c.state().hovered_pin, Some(1));

        let out = c.handle_event(PointerEvent::new(PointerKind::Cancel, PointerSource::Touch, None), &vp, &o);
        assert_eq!(
            out,
            Outcome {
                redraw: true,
                refresh_info: true,
                pins_changed: false,
                cursor: Some(CursorStyle::Default),
            }
        );
        assert_eq!(c.state().hovered_pin, None);
        assert_eq!(c.pins().selected(), Some(1));
    }

    #[test]
    fn test_relayout_moves_live_point_and_rehits_pins() {
        let (mut c, vp, o) = setup();
        let p = at(&vp, 0.0, 0.5);
        send(&mut c, &vp, &o, PointerKind::Down, p);
        send(&mut c, &vp, &o, PointerKind::Up, p);
        c.toggle_pin(1);
        send(&mut c, &vp, &o, PointerKind::Move, at(&vp, 90.0, 0.5));
        assert_eq!(c.state().hovered_pin, None);

        // Shifted circle puts the pin's ray under the unmoved pointer
        let moved = Viewport {
            center: DVec2::new(200.0, vp.center.y - vp.radius * 0.5),
            ..vp
        };
        let out = c.relayout(&moved);
        assert!(out.redraw);
        assert_eq!(c.state().hovered_pin, Some(1));
        assert_eq!(out.cursor, Some(CursorStyle::Pointer));
        assert_eq!(c.state().current_point, moved.point_on_circle(FRAC_PI_2));
    }

    #[test]
    fn test_move_outside_deactivates() {
        let (mut c, vp, o) = setup();
        send(&mut c, &vp, &o, PointerKind::Move, at(&vp, 45.0, 0.5));
        let out = send(&mut c, &vp, &o, PointerKind::Move, at(&vp, 45.0, 2.0));
        assert!(out.redraw);
        assert_eq!(c.mode(), Mode::Idle);
    }

    #[test]
    fn test_delete_selected_pin_from_list() {
        let (mut c, vp, o) = setup();
        let p = at(&vp, 120.0, 0.7);
        send(&mut c, &vp, &o, PointerKind::Down, p);
        send(&mut c, &vp, &o, PointerKind::Up, p);

        let out = c.delete_pin(1);
        assert!(out.pins_changed);
        assert!(c.pins().is_empty());
        assert_eq!(c.pins().selected(), None);
        assert!(c.delete_pin(1).is_noop());
    }
}
