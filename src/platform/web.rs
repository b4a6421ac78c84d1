//! Browser surfaces: Canvas2D drawing and DOM panels

use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use super::{CursorStyle, InfoPanel, PinnedList, RenderSurface, Stroke, TextStyle};
use crate::geometry::Viewport;
use crate::interaction::{PinId, PinnedAngle};
use crate::settings::Options;
use crate::trig::{AngleInfo, InfoReport, format_degrees, format_radians};

const DASH: [f64; 2] = [5.0, 4.0];

/// Draws on a `<canvas>` through its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        Some(Self { canvas, ctx, dpr })
    }

    /// Match the backing store to the CSS size and device pixel ratio
    fn sync_backing_store(&mut self) {
        let vp = self.viewport();
        let width = (vp.width * self.dpr) as u32;
        let height = (vp.height * self.dpr) as u32;
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
        if let Err(e) = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0) {
            log::warn!("set_transform failed: {e:?}");
        }
    }

    fn apply_stroke(&self, stroke: &Stroke) {
        self.ctx.set_stroke_style_str(stroke.color);
        self.ctx.set_line_width(stroke.width);
        let dash = js_sys::Array::new();
        if stroke.dashed {
            for d in DASH {
                dash.push(&wasm_bindgen::JsValue::from(d));
            }
        }
        if let Err(e) = self.ctx.set_line_dash(&dash) {
            log::warn!("set_line_dash failed: {e:?}");
        }
    }
}

impl RenderSurface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        Viewport::from_size(self.canvas.client_width() as f64, self.canvas.client_height() as f64)
    }

    fn clear(&mut self) {
        self.sync_backing_store();
        let vp = self.viewport();
        self.ctx.clear_rect(0.0, 0.0, vp.width, vp.height);
    }

    fn line(&mut self, from: DVec2, to: DVec2, stroke: &Stroke) {
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64, anticlockwise: bool, stroke: &Stroke) {
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc_with_anticlockwise(center.x, center.y, radius, start, end, anticlockwise)
        {
            log::warn!("arc failed: {e:?}");
            return;
        }
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
            .is_ok()
        {
            self.ctx.set_fill_style_str(color);
            self.ctx.fill();
        }
    }

    fn measure_text(&mut self, text: &str, style: &TextStyle) -> f64 {
        self.ctx.set_font(style.font);
        self.ctx.measure_text(text).map_or(0.0, |m| m.width())
    }

    fn text(&mut self, pos: DVec2, text: &str, style: &TextStyle) {
        self.ctx.set_font(style.font);
        self.ctx.set_fill_style_str(style.color);
        if let Err(e) = self.ctx.fill_text(text, pos.x, pos.y) {
            log::warn!("fill_text failed: {e:?}");
        }
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        if let Err(e) = self.canvas.style().set_property("cursor", cursor.as_css()) {
            log::warn!("cursor update failed: {e:?}");
        }
    }
}

fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn set_visible(el: &Element, visible: bool) {
    let class = if visible { "info-row" } else { "info-row hidden" };
    let _ = el.set_attribute("class", class);
}

/// Fills the `#info-*` elements of the info panel
pub struct DomInfoPanel {
    document: Document,
}

impl DomInfoPanel {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Write one optional field and hide its row when absent
    fn field(&self, name: &str, value: Option<&str>) {
        let id = format!("info-{name}");
        set_text(&self.document, &id, value.unwrap_or(""));
        if let Some(row) = self.document.get_element_by_id(&format!("{id}-row")) {
            set_visible(&row, value.is_some());
        }
    }
}

impl InfoPanel for DomInfoPanel {
    fn show(&mut self, info: &AngleInfo, options: &Options) {
        let report = InfoReport::new(info, options);
        self.field("degrees", report.degrees.as_deref());
        self.field("radians", report.radians.as_deref());
        self.field("coordinates", report.coordinates.as_deref());
        self.field("sin", Some(&report.sin));
        self.field("cos", Some(&report.cos));
        self.field("tan", Some(&report.tan));
        self.field("csc", report.csc.as_deref());
        self.field("sec", report.sec.as_deref());
        self.field("cot", report.cot.as_deref());
        self.field("reference", report.reference_angle.as_deref());
        self.field("quadrant", report.quadrant.as_deref());
        self.field("exact", Some(if report.is_exact { "exact" } else { "approx." }));

        if let Some(panel) = self.document.get_element_by_id("info-panel") {
            let _ = panel.set_attribute("class", "");
            if let Ok(json) = serde_json::to_string(&report) {
                let _ = panel.set_attribute("data-report", &json);
            }
        }
    }

    fn clear(&mut self) {
        if let Some(panel) = self.document.get_element_by_id("info-panel") {
            let _ = panel.set_attribute("class", "empty");
            let _ = panel.remove_attribute("data-report");
        }
    }
}

/// Renders `<li>` rows into `#pinned-list`
pub struct DomPinnedList {
    document: Document,
}

impl DomPinnedList {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl PinnedList for DomPinnedList {
    fn render(&mut self, pins: &[PinnedAngle], selected: Option<PinId>) {
        let Some(list) = self.document.get_element_by_id("pinned-list") else {
            return;
        };
        let rows: String = pins
            .iter()
            .map(|pin| {
                let class = if selected == Some(pin.id) { "pin-row selected" } else { "pin-row" };
                format!(
                    "<li class=\"{class}\" data-pin-id=\"{id}\">\
                     <span class=\"pin-label\">{deg} ({rad})</span>\
                     <button class=\"pin-delete\" data-pin-id=\"{id}\" title=\"Delete\">×</button></li>",
                    id = pin.id,
                    deg = format_degrees(pin.info.degrees()),
                    rad = format_radians(pin.info.radians()),
                )
            })
            .collect();
        list.set_inner_html(&rows);
        set_text(&self.document, "pin-count", &pins.len().to_string());
    }
}
