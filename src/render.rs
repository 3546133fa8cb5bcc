use crate::constants::{GLOW_BLUR_PX, LINK_WIDTH_PX};
use crate::core::ParticleField;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D painter for the particle background.
pub struct FieldPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl FieldPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }

    /// Clear, then draw every particle followed by the links between
    /// neighbours.
    pub fn paint(&self, field: &ParticleField, elapsed_sec: f32) {
        let bounds = field.bounds();
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);

        for p in field.particles() {
            let alpha = field.pulse_opacity(p, elapsed_sec);
            ctx.begin_path();
            _ = ctx.arc(
                p.position.x as f64,
                p.position.y as f64,
                p.radius as f64,
                0.0,
                TAU,
            );
            ctx.set_fill_style_str(&p.color.rgba(alpha));
            ctx.set_shadow_blur(GLOW_BLUR_PX);
            ctx.set_shadow_color(&p.color.hex());
            ctx.fill();
        }
        ctx.set_shadow_blur(0.0);

        let particles = field.particles();
        ctx.set_line_width(LINK_WIDTH_PX);
        for link in field.connections() {
            let (a, b) = (&particles[link.a], &particles[link.b]);
            ctx.begin_path();
            ctx.move_to(a.position.x as f64, a.position.y as f64);
            ctx.line_to(b.position.x as f64, b.position.y as f64);
            ctx.set_stroke_style_str(&a.color.rgba(link.opacity));
            ctx.stroke();
        }
    }
}
