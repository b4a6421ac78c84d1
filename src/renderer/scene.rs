//! Diagram composition
//!
//! Draws the whole diagram through a [`RenderSurface`]. Geometry is derived
//! from the surface's current viewport on every frame; nothing is cached.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::geometry::{AngleArc, Viewport, reference_arc, reference_triangle, standard_arc};
use crate::interaction::{InteractionController, PinnedAngle};
use crate::platform::{RenderSurface, Stroke, TextStyle};
use crate::settings::Options;
use crate::trig::{AngleInfo, format_degrees, format_radians, special_angles};
use crate::trig::format::decimal_pair;

const AXIS: Stroke = Stroke::solid("#9aa5b1", 1.0);
const CIRCLE: Stroke = Stroke::solid("#334e68", 2.0);
const RAY: Stroke = Stroke::solid("#d64545", 2.5);
const TRIANGLE: Stroke = Stroke::dashed("#627d98", 1.5);
const STANDARD_ARC: Stroke = Stroke::solid("#f0b429", 2.0);
const REFERENCE_ARC: Stroke = Stroke::solid("#27ab83", 2.0);
const PIN: Stroke = Stroke::solid("#829ab1", 1.5);
const PIN_HOVERED: Stroke = Stroke::solid("#486581", 2.5);
const PIN_SELECTED: Stroke = Stroke::solid("#8719e0", 3.0);

const MARKER_COLOR: &str = "#bcccdc";
const POINT_COLOR: &str = "#d64545";

const LABEL: TextStyle = TextStyle {
    font: "13px sans-serif",
    color: "#102a43",
};
const COORD_LABEL: TextStyle = TextStyle {
    font: "bold 14px sans-serif",
    color: "#d64545",
};

/// Axes extend past the circle by this factor
const AXIS_EXTENT: f64 = 1.15;
/// Coordinate label distance as a fraction of the radius
const COORD_LABEL_SCALE: f64 = 1.14;
const MARKER_RADIUS: f64 = 3.0;
const POINT_RADIUS: f64 = 5.5;

/// Draw a full frame
pub fn draw<S: RenderSurface>(surface: &mut S, controller: &InteractionController, options: &Options) {
    let vp = surface.viewport();
    surface.clear();

    draw_axes(surface, &vp);
    surface.arc(vp.center, vp.radius, 0.0, TAU, false, &CIRCLE);
    for special in special_angles() {
        surface.fill_circle(vp.point_on_circle(special.radians), MARKER_RADIUS, MARKER_COLOR);
    }

    let pins = controller.pins();
    let hovered = controller.state().hovered_pin;
    for pin in pins.pins() {
        let stroke = if pins.selected() == Some(pin.id) {
            &PIN_SELECTED
        } else if hovered == Some(pin.id) {
            &PIN_HOVERED
        } else {
            &PIN
        };
        draw_pin(surface, &vp, pin, stroke);
    }

    if let (Some(angle), Some(tip), Some(info)) = (
        controller.display_angle(),
        controller.display_point(&vp),
        controller.display_info(),
    ) {
        draw_angle(surface, &vp, angle, tip, &info, options);
    }
}

fn draw_axes<S: RenderSurface>(surface: &mut S, vp: &Viewport) {
    let reach = vp.radius * AXIS_EXTENT;
    let c = vp.center;
    surface.line(c - DVec2::new(reach, 0.0), c + DVec2::new(reach, 0.0), &AXIS);
    surface.line(c - DVec2::new(0.0, reach), c + DVec2::new(0.0, reach), &AXIS);
}

fn draw_pin<S: RenderSurface>(surface: &mut S, vp: &Viewport, pin: &PinnedAngle, stroke: &Stroke) {
    let end = pin.endpoint(vp);
    surface.line(vp.center, end, stroke);
    surface.fill_circle(end, stroke.width + 2.0, stroke.color);
}

fn draw_angle<S: RenderSurface>(
    surface: &mut S,
    vp: &Viewport,
    angle: f64,
    tip: DVec2,
    info: &AngleInfo,
    options: &Options,
) {
    if options.show_ref_triangle {
        if let Some([center, foot, end]) = reference_triangle(angle, vp) {
            surface.line(center, foot, &TRIANGLE);
            surface.line(foot, end, &TRIANGLE);
        }
    }

    if options.show_angle_arcs {
        let standard = standard_arc(angle, vp);
        let text = if options.show_degrees {
            Some(format_degrees(info.degrees()))
        } else if options.show_radians {
            Some(format_radians(info.radians()))
        } else {
            None
        };
        draw_arc(surface, vp, &standard, text.as_deref(), &STANDARD_ARC);

        if options.show_ref_angle {
            if let Some(reference) = reference_arc(angle, vp) {
                let text = format_degrees(info.reference_angle().to_degrees());
                draw_arc(surface, vp, &reference, Some(&text), &REFERENCE_ARC);
            }
        }
    }

    surface.line(vp.center, tip, &RAY);
    surface.fill_circle(tip, POINT_RADIUS, POINT_COLOR);

    if options.show_coordinates {
        let coords = info.coords();
        let text = info
            .exact_coords()
            .map(str::to_string)
            .unwrap_or_else(|| decimal_pair(coords.x, coords.y));
        centered_text(surface, vp.point_at(angle, COORD_LABEL_SCALE), &text, &COORD_LABEL);
    }
}

fn draw_arc<S: RenderSurface>(
    surface: &mut S,
    vp: &Viewport,
    arc: &AngleArc,
    text: Option<&str>,
    stroke: &Stroke,
) {
    let sweep = arc.sweep;
    surface.arc(vp.center, arc.radius, sweep.start, sweep.end, sweep.anticlockwise, stroke);
    if let (Some(label), Some(text)) = (arc.label, text) {
        centered_text(surface, label.position, text, &LABEL);
    }
}

/// Draw text centered horizontally and vertically on `pos`
fn centered_text<S: RenderSurface>(surface: &mut S, pos: DVec2, text: &str, style: &TextStyle) {
    let width = surface.measure_text(text, style);
    surface.text(pos + DVec2::new(-width / 2.0, 4.0), text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{PointerEvent, PointerKind};
    use crate::platform::recording::{DrawCall, RecordingSurface};

    fn hover(controller: &mut InteractionController, surface: &RecordingSurface, degrees: f64) {
        let vp = surface.viewport();
        let p = vp.point_at(degrees.to_radians(), 0.8);
        controller.handle_event(PointerEvent::mouse(PointerKind::Move, p.x, p.y), &vp, &Options::default());
    }

    #[test]
    fn test_idle_frame_has_circle_and_markers_only() {
        let mut surface = RecordingSurface::new(600.0, 600.0);
        let controller = InteractionController::new();
        draw(&mut surface, &controller, &Options::default());

        assert_eq!(surface.calls[0], DrawCall::Clear);
        let markers = surface
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillCircle { .. }))
            .count();
        assert_eq!(markers, 16);
        assert_eq!(surface.arcs().count(), 1);
        assert!(surface.texts().is_empty());
    }

    #[test]
    fn test_active_angle_draws_arcs_and_labels() {
        let mut surface = RecordingSurface::new(600.0, 600.0);
        let mut controller = InteractionController::new();
        hover(&mut controller, &surface, 150.0);
        draw(&mut surface, &controller, &Options::default());

        // circle + standard + reference
        assert_eq!(surface.arcs().count(), 3);
        let texts = surface.texts();
        assert!(texts.contains(&"150°"));
        assert!(texts.contains(&"30°"));
        assert!(texts.contains(&"(-√3/2, 1/2)"));
    }

    #[test]
    fn test_options_hide_annotations() {
        let mut surface = RecordingSurface::new(600.0, 600.0);
        let mut controller = InteractionController::new();
        hover(&mut controller, &surface, 150.0);
        let options = Options {
            show_angle_arcs: false,
            show_coordinates: false,
            show_ref_triangle: false,
            ..Default::default()
        };
        draw(&mut surface, &controller, &options);

        assert_eq!(surface.arcs().count(), 1);
        assert!(surface.texts().is_empty());
        let dashed = surface
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { stroke, .. } if stroke.dashed))
            .count();
        assert_eq!(dashed, 0);
    }

    #[test]
    fn test_axis_angle_has_no_reference_arc() {
        let mut surface = RecordingSurface::new(600.0, 600.0);
        let mut controller = InteractionController::new();
        hover(&mut controller, &surface, 90.0);
        draw(&mut surface, &controller, &Options::default());
        assert_eq!(surface.arcs().count(), 2);
    }
}
