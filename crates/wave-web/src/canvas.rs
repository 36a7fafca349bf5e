//! `Surface` over a Canvas 2D context.

use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use wave_core::surface::{AlphaMask, Blend, Font, Paint, Surface};
use wave_core::Viewport;
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            viewport: Viewport::default(),
        })
    }

    fn paint_value(&self, paint: &Paint) -> JsValue {
        match paint {
            Paint::Solid(c) => JsValue::from_str(&c.to_string()),
            Paint::Linear(g) => {
                let grad = self.ctx.create_linear_gradient(g.from.x, g.from.y, g.to.x, g.to.y);
                for s in &g.stops {
                    _ = grad.add_color_stop(s.offset as f32, &s.color.to_string());
                }
                grad.into()
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, viewport: &Viewport) {
        self.viewport = *viewport;
        let (bw, bh) = viewport.backing_size();
        self.canvas.set_width(bw);
        self.canvas.set_height(bh);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", viewport.width));
        _ = style.set_property("height", &format!("{}px", viewport.height));
        _ = self
            .ctx
            .set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_blend(&mut self, blend: Blend) {
        _ = self.ctx.set_global_composite_operation(blend.as_css());
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: DVec2) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: DVec2) {
        self.ctx.line_to(p.x, p.y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    #[allow(deprecated)]
    fn set_fill(&mut self, paint: &Paint) {
        let v = self.paint_value(paint);
        self.ctx.set_fill_style(&v);
    }

    #[allow(deprecated)]
    fn set_stroke(&mut self, paint: &Paint) {
        let v = self.paint_value(paint);
        self.ctx.set_stroke_style(&v);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    #[allow(deprecated)]
    fn fill_text(&mut self, text: &str, at: DVec2, font: Font) {
        self.ctx.set_font(&font.to_css());
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style(&JsValue::from_str("#fff"));
        _ = self.ctx.fill_text(text, at.x, at.y);
    }

    fn read_alpha(&mut self) -> AlphaMask {
        let (bw, bh) = self.viewport.backing_size();
        if bw == 0 || bh == 0 {
            return AlphaMask::default();
        }
        match self.ctx.get_image_data(0.0, 0.0, bw as f64, bh as f64) {
            Ok(img) => AlphaMask::from_rgba(bw as usize, bh as usize, &img.data().0)
                .with_scale(self.viewport.dpr),
            Err(e) => {
                log::error!("[mask] get_image_data failed: {:?}", e);
                AlphaMask::default()
            }
        }
    }
}
