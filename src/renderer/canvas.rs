//! 2D canvas backend (WASM only)

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::Surface;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    /// Canvas pixels per playfield unit
    scale: f64,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx, scale: 1.0 }
    }

    /// Scale playfield units to canvas pixels (e.g. device pixel ratio)
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        let s = self.scale;
        self.ctx
            .clear_rect(0.0, 0.0, width as f64 * s, height as f64 * s);
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        let s = self.scale;
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(x as f64 * s, y as f64 * s, radius as f64 * s, 0.0, TAU)
        {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        let s = self.scale;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            x as f64 * s,
            y as f64 * s,
            width as f64 * s,
            height as f64 * s,
        );
    }
}
