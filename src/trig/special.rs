//! Table of the 16 special angles
//!
//! Multiples of 30° and 45° have coordinates built from 0, 1/2, √2/2, √3/2 and
//! 1, so their trig values have exact symbolic forms. The table is built once
//! and never mutated.

use std::sync::LazyLock;

use glam::DVec2;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

use crate::consts::EPSILON;

use super::format::{exact_pair, exact_reciprocal_string, exact_string};

/// The six trig functions of one angle
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct TrigValues {
    pub sin: f64,
    pub cos: f64,
    pub tan: f64,
    pub csc: f64,
    pub sec: f64,
    pub cot: f64,
}

impl TrigValues {
    /// Derive all six from a point on the unit circle
    ///
    /// A denominator with magnitude below `zero_below` yields `f64::INFINITY`.
    pub fn from_unit_point(x: f64, y: f64, zero_below: f64) -> Self {
        let ratio = |num: f64, den: f64| {
            if den.abs() < zero_below {
                f64::INFINITY
            } else {
                num / den
            }
        };
        Self {
            sin: y,
            cos: x,
            tan: ratio(y, x),
            csc: ratio(1.0, y),
            sec: ratio(1.0, x),
            cot: ratio(x, y),
        }
    }
}

/// String forms of the six trig values
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TrigStrings {
    pub sin: String,
    pub cos: String,
    pub tan: String,
    pub csc: String,
    pub sec: String,
    pub cot: String,
}

impl TrigStrings {
    pub fn from_values(v: &TrigValues) -> Self {
        Self {
            sin: exact_string(v.sin),
            cos: exact_string(v.cos),
            tan: exact_string(v.tan),
            csc: exact_reciprocal_string(v.csc),
            sec: exact_reciprocal_string(v.sec),
            cot: exact_string(v.cot),
        }
    }
}

/// One entry of the special angle table
#[derive(Debug, Clone)]
pub struct SpecialAngle {
    pub radians: f64,
    pub degrees: f64,
    /// Exact `(cos, sin)`
    pub coords: DVec2,
    pub exact_coords: String,
    pub values: TrigValues,
    pub strings: TrigStrings,
}

impl SpecialAngle {
    /// `num/den × π` with unit-circle point `(x, y)`
    fn new(num: f64, den: f64, x: f64, y: f64) -> Self {
        let values = TrigValues::from_unit_point(x, y, EPSILON);
        Self {
            radians: PI * num / den,
            degrees: 180.0 * num / den,
            coords: DVec2::new(x, y),
            exact_coords: exact_pair(x, y),
            strings: TrigStrings::from_values(&values),
            values,
        }
    }
}

static SPECIAL_ANGLES: LazyLock<Vec<SpecialAngle>> = LazyLock::new(|| {
    let h = 0.5;
    let r2 = FRAC_1_SQRT_2;
    let r3 = 3.0_f64.sqrt() / 2.0;
    vec![
        SpecialAngle::new(0.0, 1.0, 1.0, 0.0),
        SpecialAngle::new(1.0, 6.0, r3, h),
        SpecialAngle::new(1.0, 4.0, r2, r2),
        SpecialAngle::new(1.0, 3.0, h, r3),
        SpecialAngle::new(1.0, 2.0, 0.0, 1.0),
        SpecialAngle::new(2.0, 3.0, -h, r3),
        SpecialAngle::new(3.0, 4.0, -r2, r2),
        SpecialAngle::new(5.0, 6.0, -r3, h),
        SpecialAngle::new(1.0, 1.0, -1.0, 0.0),
        SpecialAngle::new(7.0, 6.0, -r3, -h),
        SpecialAngle::new(5.0, 4.0, -r2, -r2),
        SpecialAngle::new(4.0, 3.0, -h, -r3),
        SpecialAngle::new(3.0, 2.0, 0.0, -1.0),
        SpecialAngle::new(5.0, 3.0, h, -r3),
        SpecialAngle::new(7.0, 4.0, r2, -r2),
        SpecialAngle::new(11.0, 6.0, r3, -h),
    ]
});

/// All special angles in ascending order of radians
pub fn special_angles() -> &'static [SpecialAngle] {
    &SPECIAL_ANGLES
}
