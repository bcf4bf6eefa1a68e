//! `CanvasRenderingContext2d` draw surface (wasm32 only)

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::renderer::{Color, DrawSurface, TextAlign, colors};
use crate::sim::{Playfield, Vector2};

/// Draws straight onto a 2D canvas context
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    playfield: Playfield,
}

impl CanvasSurface {
    /// Wrap `canvas`. Its current pixel size becomes the playfield.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let playfield = Playfield::new(canvas.width() as f64, canvas.height() as f64)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { context, playfield })
    }
}

impl DrawSurface for CanvasSurface {
    fn playfield(&self) -> Playfield {
        self.playfield
    }

    fn clear(&mut self, color: Color) {
        self.fill_rect(self.playfield.center(), self.playfield.width, self.playfield.height, color);
    }

    fn fill_circle(&mut self, center: Vector2, radius: f64, color: Color) {
        let ctx = &self.context;
        ctx.begin_path();
        if let Err(e) = ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU) {
            log::warn!("Canvas arc failed: {:?}", e);
        }
        ctx.set_fill_style_str(&colors::css(color));
        ctx.fill();
        ctx.close_path();
    }

    fn fill_rect(&mut self, center: Vector2, width: f64, height: f64, color: Color) {
        let ctx = &self.context;
        ctx.begin_path();
        ctx.rect(center.x - width / 2.0, center.y - height / 2.0, width, height);
        ctx.set_fill_style_str(&colors::css(color));
        ctx.fill();
        ctx.close_path();
    }

    fn line(&mut self, from: Vector2, to: Vector2, color: Color) {
        let ctx = &self.context;
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.set_stroke_style_str(&colors::css(color));
        ctx.stroke();
        ctx.close_path();
    }

    fn text(&mut self, text: &str, position: Vector2, align: TextAlign, font: &str, color: Color) {
        let ctx = &self.context;
        ctx.set_fill_style_str(&colors::css(color));
        ctx.set_text_align(align.as_str());
        ctx.set_font(font);
        if let Err(e) = ctx.fill_text(text, position.x, position.y) {
            log::warn!("Canvas fill_text failed: {:?}", e);
        }
    }
}
