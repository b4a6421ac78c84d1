//! Angle engine
//!
//! Normalization, snapping, quadrant classification and derived trig info for
//! a single angle. All functions are pure; nothing here panics or fails.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::special::{SpecialAngle, TrigStrings, TrigValues, special_angles};
use crate::consts::{EPSILON, SNAP_TOLERANCE};

/// Where the terminal ray of an angle lies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    I,
    II,
    III,
    IV,
    XAxis,
    YAxis,
}

impl Quadrant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::I => "I",
            Quadrant::II => "II",
            Quadrant::III => "III",
            Quadrant::IV => "IV",
            Quadrant::XAxis => "X-Axis",
            Quadrant::YAxis => "Y-Axis",
        }
    }

    /// True for the two axis pseudo-quadrants
    pub fn is_axis(&self) -> bool {
        matches!(self, Quadrant::XAxis | Quadrant::YAxis)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trig info for an angle that is not in the special table
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedAngle {
    pub radians: f64,
    pub degrees: f64,
    pub coords: DVec2,
    pub values: TrigValues,
    pub strings: TrigStrings,
}

/// Derived facts about one angle
///
/// Either borrows an entry of the special table (exact) or carries freshly
/// computed values (approximate).
#[derive(Debug, Clone)]
pub enum AngleInfo {
    Exact(&'static SpecialAngle),
    Approximate(ComputedAngle),
}

impl AngleInfo {
    pub fn is_exact(&self) -> bool {
        matches!(self, AngleInfo::Exact(_))
    }

    pub fn radians(&self) -> f64 {
        match self {
            AngleInfo::Exact(s) => s.radians,
            AngleInfo::Approximate(c) => c.radians,
        }
    }

    pub fn degrees(&self) -> f64 {
        match self {
            AngleInfo::Exact(s) => s.degrees,
            AngleInfo::Approximate(c) => c.degrees,
        }
    }

    /// `(cos, sin)` of the angle
    pub fn coords(&self) -> DVec2 {
        match self {
            AngleInfo::Exact(s) => s.coords,
            AngleInfo::Approximate(c) => c.coords,
        }
    }

    /// Exact coordinate string, only for special angles
    pub fn exact_coords(&self) -> Option<&str> {
        match self {
            AngleInfo::Exact(s) => Some(&s.exact_coords),
            AngleInfo::Approximate(_) => None,
        }
    }

    pub fn values(&self) -> &TrigValues {
        match self {
            AngleInfo::Exact(s) => &s.values,
            AngleInfo::Approximate(c) => &c.values,
        }
    }

    pub fn strings(&self) -> &TrigStrings {
        match self {
            AngleInfo::Exact(s) => &s.strings,
            AngleInfo::Approximate(c) => &c.strings,
        }
    }

    pub fn quadrant(&self) -> Quadrant {
        quadrant(self.radians())
    }

    pub fn reference_angle(&self) -> f64 {
        reference_angle(self.radians())
    }
}

/// Wrap into [0, 2π)
#[inline]
pub fn normalize(angle: f64) -> f64 {
    crate::normalize_angle(angle)
}

/// Circular distance between two angles, in [0, π]
#[inline]
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (normalize(a) - normalize(b)).abs();
    d.min(TAU - d)
}

/// Nearest special angle within the snap tolerance
///
/// Ties go to the earliest table entry.
pub fn find_special(angle: f64) -> Option<&'static SpecialAngle> {
    let mut best: Option<(&'static SpecialAngle, f64)> = None;
    for special in special_angles() {
        let d = circular_distance(special.radians, angle);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((special, d));
        }
    }
    best.filter(|&(_, d)| d < SNAP_TOLERANCE).map(|(s, _)| s)
}

/// Replace a near-special angle with its exact value
pub fn snap(angle: f64) -> f64 {
    find_special(angle).map_or(angle, |s| s.radians)
}

/// Full trig info for an angle
pub fn angle_info(angle: f64) -> AngleInfo {
    if let Some(special) = find_special(angle) {
        return AngleInfo::Exact(special);
    }

    let radians = normalize(angle);
    let (y, x) = radians.sin_cos();
    let values = TrigValues::from_unit_point(x, y, EPSILON);
    AngleInfo::Approximate(ComputedAngle {
        radians,
        degrees: radians.to_degrees(),
        coords: DVec2::new(x, y),
        strings: TrigStrings::from_values(&values),
        values,
    })
}

/// Acute angle between the terminal ray and the x-axis, in [0, π/2]
pub fn reference_angle(angle: f64) -> f64 {
    let a = normalize(angle);
    if a <= FRAC_PI_2 {
        a
    } else if a <= PI {
        PI - a
    } else if a <= 3.0 * FRAC_PI_2 {
        a - PI
    } else {
        TAU - a
    }
}

/// Classify an angle by quadrant, with axis angles reported separately
pub fn quadrant(angle: f64) -> Quadrant {
    let a = normalize(angle);
    let near = |target: f64| (a - target).abs() < EPSILON;

    if near(0.0) || near(PI) || near(TAU) {
        Quadrant::XAxis
    } else if near(FRAC_PI_2) || near(3.0 * FRAC_PI_2) {
        Quadrant::YAxis
    } else if a < FRAC_PI_2 {
        Quadrant::I
    } else if a < PI {
        Quadrant::II
    } else if a < 3.0 * FRAC_PI_2 {
        Quadrant::III
    } else {
        Quadrant::IV
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_snap_exact_entries() {
        for s in special_angles() {
            assert_eq!(snap(s.radians), s.radians);
        }
    }

    #[test]
    fn test_snap_within_and_outside_tolerance() {
        for s in special_angles() {
            assert_eq!(snap(s.radians + 0.01), s.radians);
            let outside = s.radians + 0.05;
            assert_eq!(snap(outside), outside);
        }
    }

    #[test]
    fn test_snap_wraps_around_zero() {
        assert_eq!(snap(TAU - 0.005), 0.0);
        assert_eq!(snap(-0.005), 0.0);
    }

    #[test]
    fn test_quadrants() {
        assert_eq!(quadrant(0.0), Quadrant::XAxis);
        assert_eq!(quadrant(PI), Quadrant::XAxis);
        assert_eq!(quadrant(FRAC_PI_2), Quadrant::YAxis);
        assert_eq!(quadrant(3.0 * FRAC_PI_2), Quadrant::YAxis);
        assert_eq!(quadrant(FRAC_PI_4), Quadrant::I);
        assert_eq!(quadrant(3.0 * FRAC_PI_4), Quadrant::II);
        assert_eq!(quadrant(5.0 * FRAC_PI_4), Quadrant::III);
        assert_eq!(quadrant(7.0 * FRAC_PI_4), Quadrant::IV);
        assert_eq!(quadrant(-FRAC_PI_4), Quadrant::IV);
        assert_eq!(Quadrant::XAxis.to_string(), "X-Axis");
    }

    #[test]
    fn test_reference_angle() {
        assert!((reference_angle(2.0 * PI / 3.0) - PI / 3.0).abs() < 1e-12);
        assert!((reference_angle(7.0 * PI / 6.0) - PI / 6.0).abs() < 1e-12);
        assert!((reference_angle(5.0 * PI / 3.0) - PI / 3.0).abs() < 1e-12);
        assert!((reference_angle(0.3) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_angle_info_exact() {
        let info = angle_info(FRAC_PI_4 + 0.005);
        assert!(info.is_exact());
        assert_eq!(info.radians(), FRAC_PI_4);
        assert_eq!(info.exact_coords(), Some("(√2/2, √2/2)"));
        assert_eq!(info.strings().sin, "√2/2");
        assert_eq!(info.quadrant(), Quadrant::I);
    }

    #[test]
    fn test_angle_info_approximate() {
        let info = angle_info(1.0);
        assert!(!info.is_exact());
        assert_eq!(info.exact_coords(), None);
        assert!((info.coords().x - 1.0_f64.cos()).abs() < 1e-12);
        assert_eq!(info.strings().sin, format!("{:.3}", 1.0_f64.sin()));
        assert!((info.degrees() - 1.0_f64.to_degrees()).abs() < 1e-9);
    }

    #[test]
    fn test_angle_info_is_total_for_negative_input() {
        let info = angle_info(-1.0);
        assert!((info.radians() - (TAU - 1.0)).abs() < 1e-12);
        assert!(info.values().tan.is_finite());
    }
}
