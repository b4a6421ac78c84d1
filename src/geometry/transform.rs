//! Canvas ↔ math space mapping
//!
//! Canvas space has its origin at the top-left with y growing downward. Math
//! space is centered on the circle with y growing upward.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{INTERACTIVE_RADIUS_FACTOR, VIEWPORT_RADIUS_FRACTION};
use crate::{cartesian_to_polar, polar_to_cartesian};

/// Current drawing area, owned by the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Circle center in canvas space
    pub center: DVec2,
    /// Circle radius in pixels
    pub radius: f64,
}

impl Viewport {
    /// Center the circle and size it to fit the area
    pub fn from_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center: DVec2::new(width / 2.0, height / 2.0),
            radius: width.min(height) * VIEWPORT_RADIUS_FRACTION,
        }
    }

    /// Canvas → math
    #[inline]
    pub fn to_math(&self, canvas: DVec2) -> DVec2 {
        DVec2::new(canvas.x - self.center.x, self.center.y - canvas.y)
    }

    /// Math → canvas
    #[inline]
    pub fn to_canvas(&self, math: DVec2) -> DVec2 {
        DVec2::new(math.x + self.center.x, self.center.y - math.y)
    }

    /// Distance from the circle center (canvas input)
    #[inline]
    pub fn distance_from_center(&self, canvas: DVec2) -> f64 {
        cartesian_to_polar(self.to_math(canvas)).0
    }

    /// Whether a canvas point is close enough to the circle to interact
    pub fn is_interactive(&self, canvas: DVec2) -> bool {
        self.distance_from_center(canvas) <= self.radius * INTERACTIVE_RADIUS_FACTOR
    }

    /// Canvas point at `scale × radius` along a math-space angle
    pub fn point_at(&self, angle: f64, scale: f64) -> DVec2 {
        self.to_canvas(polar_to_cartesian(self.radius * scale, angle))
    }

    /// Canvas point on the circle at a math-space angle
    #[inline]
    pub fn point_on_circle(&self, angle: f64) -> DVec2 {
        self.point_at(angle, 1.0)
    }

    /// Math-space angle of a canvas point, unnormalized (-π, π]
    pub fn angle_of(&self, canvas: DVec2) -> f64 {
        cartesian_to_polar(self.to_math(canvas)).1
    }
}
