//! Application shell
//!
//! Owns the controller, the option toggles and the three surfaces. Every
//! entry point runs the controller, then performs the requested redraw, info
//! refresh and list update before returning.

use crate::interaction::{InteractionController, Outcome, PinId, PointerEvent};
use crate::platform::{InfoPanel, PinnedList, RenderSurface};
use crate::renderer;
use crate::settings::{OptionKey, Options};

pub struct App<R, P, L> {
    controller: InteractionController,
    options: Options,
    surface: R,
    panel: P,
    list: L,
}

impl<R: RenderSurface, P: InfoPanel, L: PinnedList> App<R, P, L> {
    pub fn new(surface: R, panel: P, list: L, options: Options) -> Self {
        let mut app = Self {
            controller: InteractionController::new(),
            options,
            surface,
            panel,
            list,
        };
        app.apply(Outcome {
            redraw: true,
            refresh_info: true,
            pins_changed: true,
            cursor: None,
        });
        app
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    /// Feed one pointer event through the state machine
    pub fn handle_event(&mut self, event: PointerEvent) -> Outcome {
        let viewport = self.surface.viewport();
        let outcome = self.controller.handle_event(event, &viewport, &self.options);
        self.apply(outcome);
        outcome
    }

    pub fn toggle_pin(&mut self, id: PinId) {
        let outcome = self.controller.toggle_pin(id);
        self.apply(outcome);
    }

    pub fn delete_pin(&mut self, id: PinId) {
        let outcome = self.controller.delete_pin(id);
        self.apply(outcome);
    }

    pub fn clear_pins(&mut self) {
        let outcome = self.controller.clear_pins();
        self.apply(outcome);
    }

    pub fn set_option(&mut self, key: OptionKey, value: bool) {
        if self.options.get(key) == value {
            return;
        }
        log::debug!("{} = {value}", key.as_str());
        self.options.set(key, value);
        self.apply(Outcome {
            redraw: true,
            refresh_info: true,
            ..Default::default()
        });
    }

    /// The surface changed size; pins are re-derived on the next draw
    pub fn resize(&mut self) {
        let viewport = self.surface.viewport();
        let outcome = self.controller.relayout(&viewport);
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: Outcome) {
        if let Some(cursor) = outcome.cursor {
            self.surface.set_cursor(cursor);
        }
        if outcome.pins_changed {
            let pins = self.controller.pins();
            self.list.render(pins.pins(), pins.selected());
        }
        if outcome.redraw {
            renderer::draw(&mut self.surface, &self.controller, &self.options);
        }
        if outcome.refresh_info {
            match self.controller.display_info() {
                Some(info) => self.panel.show(&info, &self.options),
                None => self.panel.clear(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::PointerKind;
    use crate::platform::recording::{DrawCall, RecordingList, RecordingPanel, RecordingSurface};
    use glam::DVec2;
    use std::f64::consts::FRAC_PI_2;

    type TestApp = App<RecordingSurface, RecordingPanel, RecordingList>;

    fn app() -> TestApp {
        App::new(
            RecordingSurface::new(400.0, 400.0),
            RecordingPanel::default(),
            RecordingList::default(),
            Options::default(),
        )
    }

    fn tap(app: &mut TestApp, degrees: f64) {
        let p = app.surface().viewport().point_at(degrees.to_radians(), 0.7);
        app.handle_event(PointerEvent::mouse(PointerKind::Down, p.x, p.y));
        app.handle_event(PointerEvent::mouse(PointerKind::Up, p.x, p.y));
    }

    #[test]
    fn test_initial_render() {
        let app = app();
        assert_eq!(app.surface().frames, 1);
        assert_eq!(app.list().renders, 1);
        assert!(app.panel().report.is_none());
    }

    #[test]
    fn test_option_change_refreshes() {
        let mut app = app();
        tap(&mut app, 30.0);
        assert!(app.panel().report.as_ref().unwrap().csc.is_none());

        app.set_option(OptionKey::ShowExtraTrig, true);
        assert_eq!(app.panel().report.as_ref().unwrap().csc.as_deref(), Some("2"));

        let frames = app.surface().frames;
        app.set_option(OptionKey::ShowExtraTrig, true);
        assert_eq!(app.surface().frames, frames);
    }

    #[test]
    fn test_list_actions() {
        let mut app = app();
        tap(&mut app, 30.0);
        tap(&mut app, 200.0); // deselects
        tap(&mut app, 200.0); // creates
        assert_eq!(app.list().rows.len(), 2);
        assert!(app.list().rows[1].selected);

        app.toggle_pin(1);
        assert!(app.list().rows[0].selected);
        assert!(!app.list().rows[1].selected);

        app.delete_pin(1);
        assert_eq!(app.list().rows.len(), 1);
        assert_eq!(app.controller().pins().selected(), None);

        app.clear_pins();
        assert!(app.list().rows.is_empty());
        tap(&mut app, 45.0);
        assert_eq!(app.list().rows[0].id, 3);
    }

    #[test]
    fn test_resize_keeps_pins_on_circle() {
        let mut app = app();
        tap(&mut app, 45.0);
        app.surface_mut().resize(800.0, 600.0);
        app.resize();

        let vp = app.surface().viewport();
        let tip = vp.point_on_circle(std::f64::consts::FRAC_PI_4);
        let pin = app.controller().selected_pin().unwrap();
        assert_eq!(pin.endpoint(&vp), tip);
        assert_ne!(pin.point, tip);
    }

    #[test]
    fn test_resize_moves_live_ray() {
        let mut app = app();
        let p = app.surface().viewport().point_at(FRAC_PI_2, 0.7);
        app.handle_event(PointerEvent::mouse(PointerKind::Move, p.x, p.y));
        app.surface_mut().resize(800.0, 600.0);
        app.resize();

        let vp = app.surface().viewport();
        let tip = vp.point_on_circle(FRAC_PI_2);
        assert_eq!(app.controller().state().current_point, tip);
        let ray_ends: Vec<DVec2> = app
            .surface()
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Line { from, to, .. } if *from == vp.center => Some(*to),
                _ => None,
            })
            .collect();
        assert!(ray_ends.contains(&tip));
    }
}
