//! Arc and label layout for angle annotations
//!
//! Angles are stored in math space (counter-clockwise from east). The canvas
//! arc API measures clockwise from east, so a math angle `a` is canvas `-a`.
//!
//! Every arc is described by its math-space bounds `lo..=hi` and drawn on the
//! canvas clockwise from `-hi` to `-lo`.

use std::f64::consts::{PI, TAU};

use glam::DVec2;

use super::transform::Viewport;
use crate::consts::{
    LABEL_OFFSET_FACTOR, REFERENCE_ARC_FRACTION, REFERENCE_LABEL_MIN, STANDARD_ARC_FRACTION,
    STANDARD_LABEL_MIN_DEGREES,
};
use crate::trig::{Quadrant, normalize, quadrant, reference_angle};

/// Arc bounds in canvas convention
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSweep {
    pub start: f64,
    pub end: f64,
    pub anticlockwise: bool,
}

/// Where an arc's label goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    /// Math-space angle of the label, in [0, 2π)
    pub angle: f64,
    /// Canvas position
    pub position: DVec2,
}

/// An annotation arc around the circle center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleArc {
    pub radius: f64,
    /// Math-space lower bound
    pub lo: f64,
    /// Math-space upper bound
    pub hi: f64,
    pub sweep: ArcSweep,
    pub label: Option<LabelPlacement>,
}

pub type StandardArc = AngleArc;
pub type ReferenceArc = AngleArc;

impl AngleArc {
    fn new(viewport: &Viewport, radius: f64, lo: f64, hi: f64, show_label: bool) -> Self {
        let label = show_label.then(|| {
            let mut mid = (lo + hi) / 2.0;
            if mid >= TAU {
                mid -= TAU;
            }
            LabelPlacement {
                angle: mid,
                position: viewport.point_at(mid, radius * LABEL_OFFSET_FACTOR / viewport.radius),
            }
        });
        Self {
            radius,
            lo,
            hi,
            sweep: ArcSweep {
                start: -hi,
                end: -lo,
                anticlockwise: false,
            },
            label,
        }
    }

    /// Angular extent in radians
    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }
}

/// Arc from the positive x-axis to the terminal ray
pub fn standard_arc(angle: f64, viewport: &Viewport) -> StandardArc {
    let a = normalize(angle);
    let radius = viewport.radius * STANDARD_ARC_FRACTION;
    let show_label = a.to_degrees() >= STANDARD_LABEL_MIN_DEGREES;
    AngleArc::new(viewport, radius, 0.0, a, show_label)
}

/// Arc between the terminal ray and the nearest side of the x-axis
///
/// `None` when the angle lies on an axis.
pub fn reference_arc(angle: f64, viewport: &Viewport) -> Option<ReferenceArc> {
    let a = normalize(angle);
    let (lo, hi) = match quadrant(a) {
        Quadrant::I => (0.0, a),
        Quadrant::II => (a, PI),
        Quadrant::III => (PI, a),
        Quadrant::IV => (a, TAU),
        Quadrant::XAxis | Quadrant::YAxis => return None,
    };
    let radius = viewport.radius * REFERENCE_ARC_FRACTION;
    let show_label = reference_angle(a) >= REFERENCE_LABEL_MIN;
    Some(AngleArc::new(viewport, radius, lo, hi, show_label))
}

/// Center, foot on the x-axis, and terminal point (canvas space)
///
/// `None` when the angle lies on an axis and the triangle collapses.
pub fn reference_triangle(angle: f64, viewport: &Viewport) -> Option<[DVec2; 3]> {
    if quadrant(angle).is_axis() {
        return None;
    }
    let tip = viewport.point_on_circle(angle);
    let foot = DVec2::new(tip.x, viewport.center.y);
    Some([viewport.center, foot, tip])
}
