//! Canvas 2D surface (WASM only)

use web_sys::{CanvasRenderingContext2d, Window};

use crate::platform::Surface;
use crate::sim::Color;

/// Draws onto a browser canvas and alerts through `window.alert`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    window: Window,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, window: Window) -> Self {
        Self { ctx, window }
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(color.css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color) {
        self.ctx.set_fill_style_str(color.css());
        self.ctx.set_font(font);
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("alert failed: {:?}", e);
        }
    }
}
