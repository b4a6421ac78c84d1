//! Exact/approximate string forms for trig values and angles
//!
//! Every function here is total: values that match no known constant fall
//! back to a fixed-precision decimal.

use std::f64::consts::PI;

use crate::consts::{EXACT_TOLERANCE, RADIAN_FRACTION_TOLERANCE};

/// Irrational constants recognised by [`exact_string`]
fn exact_constants() -> [(f64, &'static str); 5] {
    let sqrt3 = 3.0_f64.sqrt();
    [
        (0.5, "1/2"),
        (sqrt3 / 2.0, "√3/2"),
        (std::f64::consts::FRAC_1_SQRT_2, "√2/2"),
        (1.0 / sqrt3, "1/√3"),
        (sqrt3, "√3"),
    ]
}

/// Reciprocal constants (csc/sec of special angles)
fn reciprocal_constants() -> [(f64, &'static str); 3] {
    [
        (2.0, "2"),
        (std::f64::consts::SQRT_2, "√2"),
        (2.0 / 3.0_f64.sqrt(), "2/√3"),
    ]
}

fn match_signed(value: f64, table: &[(f64, &'static str)]) -> Option<String> {
    for &(constant, name) in table {
        if (value - constant).abs() < EXACT_TOLERANCE {
            return Some(name.to_string());
        }
        if (value + constant).abs() < EXACT_TOLERANCE {
            return Some(format!("-{name}"));
        }
    }
    None
}

/// Symbolic form of a trig value, or a 3-decimal fallback
///
/// Infinite and NaN values are `"undefined"`.
pub fn exact_string(value: f64) -> String {
    if !value.is_finite() {
        return "undefined".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value == 1.0 {
        return "1".to_string();
    }
    if value == -1.0 {
        return "-1".to_string();
    }
    match_signed(value, &exact_constants()).unwrap_or_else(|| format!("{value:.3}"))
}

/// Like [`exact_string`] but also recognises `2`, `√2` and `2/√3`
pub fn exact_reciprocal_string(value: f64) -> String {
    if value.is_finite() {
        if let Some(s) = match_signed(value, &reciprocal_constants()) {
            return s;
        }
    }
    exact_string(value)
}

/// Numerators/denominators of the fractions of π with a symbolic form
const PI_FRACTIONS: [(u32, u32); 14] = [
    (1, 6),
    (1, 4),
    (1, 3),
    (1, 2),
    (2, 3),
    (3, 4),
    (5, 6),
    (7, 6),
    (5, 4),
    (4, 3),
    (3, 2),
    (5, 3),
    (7, 4),
    (11, 6),
];

/// Radian value as a fraction of π (`"π/6"`, `"5π/4"`), or 2 decimals
pub fn format_radians(angle: f64) -> String {
    let magnitude = angle.abs();
    let sign = if angle < 0.0 { "-" } else { "" };
    let near = |target: f64| (magnitude - target).abs() < RADIAN_FRACTION_TOLERANCE;

    if near(0.0) {
        return "0".to_string();
    }
    if near(PI) {
        return format!("{sign}π");
    }
    if near(2.0 * PI) {
        return format!("{sign}2π");
    }

    for (num, den) in PI_FRACTIONS {
        if near(PI * num as f64 / den as f64) {
            return if num == 1 {
                format!("{sign}π/{den}")
            } else {
                format!("{sign}{num}π/{den}")
            };
        }
    }

    format!("{angle:.2}")
}

/// Degrees with a trailing `°`; whole degrees drop the decimal
pub fn format_degrees(degrees: f64) -> String {
    let rounded = degrees.round();
    if (degrees - rounded).abs() < 1e-9 {
        // avoid "-0°"
        format!("{}°", rounded as i64)
    } else {
        format!("{degrees:.1}°")
    }
}

/// `(x, y)` with each coordinate in exact form where possible
pub fn exact_pair(x: f64, y: f64) -> String {
    format!("({}, {})", exact_string(x), exact_string(y))
}

/// `(x, y)` with 3 decimals
pub fn decimal_pair(x: f64, y: f64) -> String {
    format!("({x:.3}, {y:.3})")
}
