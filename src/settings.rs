//! Display and behaviour toggles
//!
//! Mutated by the UI checkboxes; the engine only reads them.

use serde::{Deserialize, Serialize};

/// Names one of the nine option toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKey {
    ShowDegrees,
    ShowRadians,
    ShowCoordinates,
    ShowRefTriangle,
    SnapToAngles,
    ShowExtraTrig,
    ShowRefAngle,
    ShowQuadrant,
    ShowAngleArcs,
}

impl OptionKey {
    pub const ALL: [OptionKey; 9] = [
        OptionKey::ShowDegrees,
        OptionKey::ShowRadians,
        OptionKey::ShowCoordinates,
        OptionKey::ShowRefTriangle,
        OptionKey::SnapToAngles,
        OptionKey::ShowExtraTrig,
        OptionKey::ShowRefAngle,
        OptionKey::ShowQuadrant,
        OptionKey::ShowAngleArcs,
    ];

    /// Element id of the matching checkbox
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::ShowDegrees => "showDegrees",
            OptionKey::ShowRadians => "showRadians",
            OptionKey::ShowCoordinates => "showCoordinates",
            OptionKey::ShowRefTriangle => "showRefTriangle",
            OptionKey::SnapToAngles => "snapToAngles",
            OptionKey::ShowExtraTrig => "showExtraTrig",
            OptionKey::ShowRefAngle => "showRefAngle",
            OptionKey::ShowQuadrant => "showQuadrant",
            OptionKey::ShowAngleArcs => "showAngleArcs",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == s)
    }
}

/// Option toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    // === Labels ===
    /// Show the angle in degrees
    pub show_degrees: bool,
    /// Show the angle in radians
    pub show_radians: bool,
    /// Show the terminal point's coordinates
    pub show_coordinates: bool,

    // === Diagram ===
    /// Draw the reference triangle
    pub show_ref_triangle: bool,
    /// Draw the standard and reference angle arcs
    pub show_angle_arcs: bool,

    // === Behaviour ===
    /// Snap the live angle to special angles
    pub snap_to_angles: bool,

    // === Info panel ===
    /// Show csc, sec and cot
    pub show_extra_trig: bool,
    /// Show the reference angle
    pub show_ref_angle: bool,
    /// Show the quadrant
    pub show_quadrant: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            show_degrees: true,
            show_radians: true,
            show_coordinates: true,

            show_ref_triangle: true,
            show_angle_arcs: true,

            snap_to_angles: true,

            show_extra_trig: false,
            show_ref_angle: true,
            show_quadrant: true,
        }
    }
}

impl Options {
    pub fn get(&self, key: OptionKey) -> bool {
        match key {
            OptionKey::ShowDegrees => self.show_degrees,
            OptionKey::ShowRadians => self.show_radians,
            OptionKey::ShowCoordinates => self.show_coordinates,
            OptionKey::ShowRefTriangle => self.show_ref_triangle,
            OptionKey::SnapToAngles => self.snap_to_angles,
            OptionKey::ShowExtraTrig => self.show_extra_trig,
            OptionKey::ShowRefAngle => self.show_ref_angle,
            OptionKey::ShowQuadrant => self.show_quadrant,
            OptionKey::ShowAngleArcs => self.show_angle_arcs,
        }
    }

    pub fn set(&mut self, key: OptionKey, value: bool) {
        let slot = match key {
            OptionKey::ShowDegrees => &mut self.show_degrees,
            OptionKey::ShowRadians => &mut self.show_radians,
            OptionKey::ShowCoordinates => &mut self.show_coordinates,
            OptionKey::ShowRefTriangle => &mut self.show_ref_triangle,
            OptionKey::SnapToAngles => &mut self.snap_to_angles,
            OptionKey::ShowExtraTrig => &mut self.show_extra_trig,
            OptionKey::ShowRefAngle => &mut self.show_ref_angle,
            OptionKey::ShowQuadrant => &mut self.show_quadrant,
            OptionKey::ShowAngleArcs => &mut self.show_angle_arcs,
        };
        *slot = value;
    }

    /// Flip a toggle, returning the new value
    pub fn toggle(&mut self, key: OptionKey) -> bool {
        let value = !self.get(key);
        self.set(key, value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_round_trip() {
        for key in OptionKey::ALL {
            assert_eq!(OptionKey::from_str(key.as_str()), Some(key));
        }
        assert_eq!(OptionKey::from_str("showFps"), None);
    }

    #[test]
    fn test_toggle_and_set() {
        let mut options = Options::default();
        assert!(!options.show_extra_trig);
        assert!(options.toggle(OptionKey::ShowExtraTrig));
        assert!(options.show_extra_trig);

        options.set(OptionKey::SnapToAngles, false);
        assert!(!options.get(OptionKey::SnapToAngles));
    }

    #[test]
    fn test_options_json() {
        let options = Options::default();
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("\"snap_to_angles\":true"));
        let back: Options = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
