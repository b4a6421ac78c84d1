//! Plane geometry for the diagram
//!
//! Coordinate transforms, annotation layout and distance queries.

pub mod annotation;
pub mod transform;

pub use annotation::{
    AngleArc, ArcSweep, LabelPlacement, ReferenceArc, StandardArc, reference_arc,
    reference_triangle, standard_arc,
};
pub use transform::Viewport;

use glam::DVec2;

/// Distance from `p` to the closed segment `a`-`b`
pub fn distance_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_distance_interior() {
        let d = distance_to_segment(DVec2::new(5.0, 3.0), DVec2::ZERO, DVec2::new(10.0, 0.0));
        assert!((d - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_distance_clamps_to_endpoints() {
        let a = DVec2::ZERO;
        let b = DVec2::new(10.0, 0.0);
        assert!((distance_to_segment(DVec2::new(-3.0, 4.0), a, b) - 5.0).abs() < 1e-12);
        assert!((distance_to_segment(DVec2::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_distance_degenerate() {
        let a = DVec2::new(1.0, 1.0);
        assert!((distance_to_segment(DVec2::new(4.0, 5.0), a, a) - 5.0).abs() < 1e-12);
    }
}
