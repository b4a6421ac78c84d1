//! In-memory surfaces that record what they are asked to do
//!
//! Used by the tests and the native demo; nothing is actually drawn.

use glam::DVec2;

use super::{CursorStyle, InfoPanel, PinnedList, RenderSurface, Stroke, TextStyle};
use crate::geometry::Viewport;
use crate::interaction::{PinId, PinnedAngle};
use crate::settings::Options;
use crate::trig::{AngleInfo, InfoReport, format_degrees};

/// Approximate glyph width used by [`RecordingSurface::measure_text`]
const GLYPH_WIDTH: f64 = 7.0;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Line {
        from: DVec2,
        to: DVec2,
        stroke: Stroke,
    },
    Arc {
        center: DVec2,
        radius: f64,
        start: f64,
        end: f64,
        anticlockwise: bool,
        stroke: Stroke,
    },
    FillCircle {
        center: DVec2,
        radius: f64,
        color: String,
    },
    Text {
        pos: DVec2,
        text: String,
    },
}

#[derive(Debug)]
pub struct RecordingSurface {
    pub viewport: Viewport,
    /// Calls since the last clear
    pub calls: Vec<DrawCall>,
    pub cursor: CursorStyle,
    /// Number of clears, i.e. frames started
    pub frames: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport::from_size(width, height),
            calls: Vec::new(),
            cursor: CursorStyle::Default,
            frames: 0,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::from_size(width, height);
    }

    /// All text drawn in the current frame
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn arcs(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Arc { .. }))
    }
}

impl RenderSurface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
        self.frames += 1;
    }

    fn line(&mut self, from: DVec2, to: DVec2, stroke: &Stroke) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64, anticlockwise: bool, stroke: &Stroke) {
        self.calls.push(DrawCall::Arc {
            center,
            radius,
            start,
            end,
            anticlockwise,
            stroke: *stroke,
        });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str) {
        self.calls.push(DrawCall::FillCircle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn measure_text(&mut self, text: &str, _style: &TextStyle) -> f64 {
        text.chars().count() as f64 * GLYPH_WIDTH
    }

    fn text(&mut self, pos: DVec2, text: &str, _style: &TextStyle) {
        self.calls.push(DrawCall::Text {
            pos,
            text: text.to_string(),
        });
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
    }
}

/// Keeps the last report shown
#[derive(Debug, Default)]
pub struct RecordingPanel {
    pub report: Option<InfoReport>,
    pub updates: usize,
}

impl InfoPanel for RecordingPanel {
    fn show(&mut self, info: &AngleInfo, options: &Options) {
        self.report = Some(InfoReport::new(info, options));
        self.updates += 1;
    }

    fn clear(&mut self) {
        self.report = None;
        self.updates += 1;
    }
}

/// One rendered row of the pinned list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinRow {
    pub id: PinId,
    pub label: String,
    pub selected: bool,
}

/// Keeps the rows from the last render
#[derive(Debug, Default)]
pub struct RecordingList {
    pub rows: Vec<PinRow>,
    pub renders: usize,
}

impl PinnedList for RecordingList {
    fn render(&mut self, pins: &[PinnedAngle], selected: Option<PinId>) {
        self.rows = pins
            .iter()
            .map(|pin| PinRow {
                id: pin.id,
                label: format_degrees(pin.info.degrees()),
                selected: selected == Some(pin.id),
            })
            .collect();
        self.renders += 1;
    }
}
