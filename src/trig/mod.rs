//! Trigonometry core
//!
//! Pure math only: no pointer state, no drawing.

pub mod engine;
pub mod format;
pub mod report;
pub mod special;

pub use engine::{
    AngleInfo, ComputedAngle, Quadrant, angle_info, circular_distance, find_special, normalize,
    quadrant, reference_angle, snap,
};
pub use format::{exact_string, format_degrees, format_radians};
pub use report::InfoReport;
pub use special::{SpecialAngle, TrigStrings, TrigValues, special_angles};
