//! Unit Circle - an interactive angle explorer
//!
//! Core modules:
//! - `trig`: Special angle table, exact-value formatting, angle engine
//! - `geometry`: Canvas/math transforms and annotation arc layout
//! - `interaction`: Pointer state machine and pinned angles
//! - `renderer`: Scene composition over an abstract drawing surface
//! - `platform`: Surface traits, recording surfaces, browser bindings
//! - `app`: Wires the controller, options and surfaces together

pub mod app;
pub mod geometry;
pub mod interaction;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod trig;

pub use app::App;
pub use settings::{OptionKey, Options};

use glam::DVec2;

/// Engine configuration constants
pub mod consts {
    /// Maximum circular distance (radians) for snapping to a special angle
    pub const SNAP_TOLERANCE: f64 = 0.02;
    /// Denominators below this magnitude are treated as zero
    pub const EPSILON: f64 = 1e-10;
    /// Tolerance when matching a value against an exact constant
    pub const EXACT_TOLERANCE: f64 = 1e-4;
    /// Tolerance when matching a radian value against a fraction of π
    pub const RADIAN_FRACTION_TOLERANCE: f64 = 0.001;
    /// Minimum angle change (radians) before the live angle is updated
    pub const ANGLE_HYSTERESIS: f64 = 0.001;

    /// Pointer is "on the circle" within radius × this factor
    pub const INTERACTIVE_RADIUS_FACTOR: f64 = 1.3;
    /// Pin hit-test threshold (pixels)
    pub const PIN_HIT_THRESHOLD: f64 = 15.0;
    /// A touch that travels further than this (pixels) is a drag, not a tap
    pub const TOUCH_MOVE_THRESHOLD: f64 = 10.0;

    /// Circle radius as a fraction of min(width, height)
    pub const VIEWPORT_RADIUS_FRACTION: f64 = 0.38;

    /// Standard-angle arc radius as a fraction of the circle radius
    pub const STANDARD_ARC_FRACTION: f64 = 0.18;
    /// Reference-angle arc radius as a fraction of the circle radius
    pub const REFERENCE_ARC_FRACTION: f64 = 0.28;
    /// Labels sit at arc radius × this factor
    pub const LABEL_OFFSET_FACTOR: f64 = 1.45;
    /// Standard arc label is hidden below this angle (degrees)
    pub const STANDARD_LABEL_MIN_DEGREES: f64 = 0.1;
    /// Reference arc label is hidden below this reference angle (radians)
    pub const REFERENCE_LABEL_MIN: f64 = 0.01;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    use std::f64::consts::TAU;
    let wrapped = ((angle % TAU) + TAU) % TAU;
    // (-tiny % TAU) + TAU rounds to exactly TAU
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y) in math space
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) in math space to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: DVec2) -> (f64, f64) {
    (pos.length(), pos.y.atan2(pos.x))
}
