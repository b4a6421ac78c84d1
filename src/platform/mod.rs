//! Platform abstraction layer
//!
//! The engine talks to the outside world through three surfaces:
//! - `RenderSurface`: 2D drawing primitives plus the current viewport
//! - `InfoPanel`: receives the displayed angle's info, or a clear signal
//! - `PinnedList`: receives the pin collection and current selection
//!
//! `recording` implements all three in memory for tests and the native demo;
//! `web` implements them on a canvas and DOM (wasm32 only).

pub mod recording;
#[cfg(target_arch = "wasm32")]
pub mod web;

use glam::DVec2;

use crate::geometry::Viewport;
use crate::interaction::{PinId, PinnedAngle};
use crate::settings::Options;
use crate::trig::AngleInfo;

/// Pointer cursor affordance over the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Crosshair,
    Pointer,
}

impl CursorStyle {
    /// CSS `cursor` value
    pub fn as_css(&self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Crosshair => "crosshair",
            CursorStyle::Pointer => "pointer",
        }
    }
}

/// Line appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
    pub dashed: bool,
}

impl Stroke {
    pub const fn solid(color: &'static str, width: f64) -> Self {
        Self {
            color,
            width,
            dashed: false,
        }
    }

    pub const fn dashed(color: &'static str, width: f64) -> Self {
        Self {
            color,
            width,
            dashed: true,
        }
    }
}

/// Text appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: &'static str,
    pub color: &'static str,
}

/// 2D drawing surface
///
/// Angles follow the canvas convention: radians clockwise from east.
pub trait RenderSurface {
    /// Current drawing area; queried on every draw and hit-test
    fn viewport(&self) -> Viewport;
    fn clear(&mut self);
    fn line(&mut self, from: DVec2, to: DVec2, stroke: &Stroke);
    fn arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64, anticlockwise: bool, stroke: &Stroke);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str);
    /// Width in pixels the text would occupy
    fn measure_text(&mut self, text: &str, style: &TextStyle) -> f64;
    /// Draw text with its left baseline at `pos`
    fn text(&mut self, pos: DVec2, text: &str, style: &TextStyle);
    fn set_cursor(&mut self, cursor: CursorStyle);
}

/// Angle info display
pub trait InfoPanel {
    fn show(&mut self, info: &AngleInfo, options: &Options);
    fn clear(&mut self);
}

/// Pinned angle list display
pub trait PinnedList {
    fn render(&mut self, pins: &[PinnedAngle], selected: Option<PinId>);
}
