//! Unified pointer events
//!
//! Mouse and touch input are coalesced into one sample per event before they
//! reach the controller.

use glam::DVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Leave,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// One pointer sample in canvas space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub source: PointerSource,
    /// `None` when the host event carried no coordinates (e.g. empty touch list)
    pub pos: Option<DVec2>,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, source: PointerSource, pos: Option<DVec2>) -> Self {
        Self { kind, source, pos }
    }

    pub fn mouse(kind: PointerKind, x: f64, y: f64) -> Self {
        Self::new(kind, PointerSource::Mouse, Some(DVec2::new(x, y)))
    }

    pub fn touch(kind: PointerKind, x: f64, y: f64) -> Self {
        Self::new(kind, PointerSource::Touch, Some(DVec2::new(x, y)))
    }

    /// Leave/cancel carry no position
    pub fn leave(source: PointerSource) -> Self {
        Self::new(PointerKind::Leave, source, None)
    }
}
