//! [`Surface`] implementation over the browser's Canvas 2D API.

use std::f64::consts::TAU;

use drift_engine::{Rgba, Surface};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Last CSS color handed to the context, to skip redundant style changes.
    fill: Option<Rgba>,
    stroke: Option<(Rgba, f32)>,
}

impl CanvasSurface {
    /// Wrap a canvas. `Ok(None)` when the browser refuses a 2D context.
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Option<Self>, JsValue> {
        let Some(ctx) = canvas.get_context("2d")? else {
            return Ok(None);
        };
        let ctx: CanvasRenderingContext2d = ctx.dyn_into()?;
        Ok(Some(Self {
            canvas,
            ctx,
            fill: None,
            stroke: None,
        }))
    }

    #[allow(deprecated)]
    fn set_fill(&mut self, color: Rgba) {
        if self.fill != Some(color) {
            self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
            self.fill = Some(color);
        }
    }

    #[allow(deprecated)]
    fn set_stroke(&mut self, color: Rgba, width: f32) {
        if self.stroke != Some((color, width)) {
            self.ctx.set_stroke_style(&JsValue::from_str(&color.to_css()));
            self.ctx.set_line_width(width as f64);
            self.stroke = Some((color, width));
        }
    }
}

impl Surface for CanvasSurface {
    fn is_ready(&self) -> bool {
        self.canvas.is_connected() && self.canvas.width() > 0 && self.canvas.height() > 0
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.set_fill(color);
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.set_stroke(color, width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        // Resizing a canvas resets its context state.
        self.fill = None;
        self.stroke = None;
    }
}
