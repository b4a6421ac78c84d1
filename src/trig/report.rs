//! Info panel model
//!
//! Flattens an [`AngleInfo`] into display strings, hiding whatever the options
//! turn off. Serializable so the web panel and the native demo can consume it
//! as JSON.

use serde::Serialize;

use super::engine::AngleInfo;
use super::format::{decimal_pair, format_degrees, format_radians};
use crate::settings::Options;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoReport {
    pub degrees: Option<String>,
    pub radians: Option<String>,
    pub coordinates: Option<String>,
    pub sin: String,
    pub cos: String,
    pub tan: String,
    pub csc: Option<String>,
    pub sec: Option<String>,
    pub cot: Option<String>,
    pub reference_angle: Option<String>,
    pub quadrant: Option<String>,
    pub is_exact: bool,
}

impl InfoReport {
    pub fn new(info: &AngleInfo, options: &Options) -> Self {
        let strings = info.strings();
        let coords = info.coords();
        let extra = |s: &String| options.show_extra_trig.then(|| s.clone());

        let reference = info.reference_angle();
        let reference_angle = options.show_ref_angle.then(|| {
            format!(
                "{} ({})",
                format_degrees(reference.to_degrees()),
                format_radians(reference)
            )
        });

        Self {
            degrees: options
                .show_degrees
                .then(|| format_degrees(info.degrees())),
            radians: options
                .show_radians
                .then(|| format_radians(info.radians())),
            coordinates: options.show_coordinates.then(|| {
                info.exact_coords()
                    .map(str::to_string)
                    .unwrap_or_else(|| decimal_pair(coords.x, coords.y))
            }),
            sin: strings.sin.clone(),
            cos: strings.cos.clone(),
            tan: strings.tan.clone(),
            csc: extra(&strings.csc),
            sec: extra(&strings.sec),
            cot: extra(&strings.cot),
            reference_angle,
            quadrant: options
                .show_quadrant
                .then(|| info.quadrant().to_string()),
            is_exact: info.is_exact(),
        }
    }
}
