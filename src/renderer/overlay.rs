//! 2D canvas overlay for text
//!
//! WebGPU draws the geometry; labels and readouts go on a transparent
//! `<canvas>` stacked above it.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::draw_list::DrawList;
use super::vertex::colors;
use crate::error::{AppError, Result};

pub struct TextOverlay {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl TextOverlay {
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self> {
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| AppError::RenderInit(format!("get_context: {e:?}")))?
            .ok_or_else(|| AppError::RenderInit("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::RenderInit("not a 2d context".into()))?;
        ctx.set_text_baseline("top");
        Ok(Self {
            ctx,
            width: width as f64,
            height: height as f64,
        })
    }

    /// Redraw every text run of the frame
    pub fn draw(&self, frame: &DrawList) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        for item in &frame.texts {
            self.ctx
                .set_font(&format!("{}px sans-serif", item.style.size_px()));
            self.ctx.set_fill_style_str(&colors::to_css(item.color));
            if let Err(e) = self
                .ctx
                .fill_text(&item.text, item.pos.x as f64, item.pos.y as f64)
            {
                log::warn!("fill_text failed: {:?}", e);
            }
        }
    }
}
