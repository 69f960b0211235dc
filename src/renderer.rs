// Renderer struct that handles the canvas 2d calls. Owns the context and
// turns a field snapshot into the frame's fills and strokes; the simulation
// itself never touches web-sys.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::constants::{
    BACKDROP_COLOR, LINK_LINE_WIDTH, PARTICLE_ALPHA, PARTICLE_COLOR, POINTER_LINE_WIDTH,
    POINTER_LINK_COLOR, TRAIL_ALPHA,
};
use crate::field::{self, ParticleField};

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    context: Option<CanvasRenderingContext2d>,
}

impl CanvasRenderer {
    // On creation grabs a reference to the 2d context from the canvas on the
    // DOM. The grab is retried on every frame until it succeeds, so a canvas
    // that cannot hand one out yet simply renders nothing.
    pub fn new(canvas: HtmlCanvasElement) -> CanvasRenderer {
        let mut renderer = CanvasRenderer {
            canvas,
            context: None,
        };
        renderer.acquire_context();
        renderer
    }

    fn acquire_context(&mut self) -> Option<CanvasRenderingContext2d> {
        if self.context.is_none() {
            self.context = self
                .canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|object| object.dyn_into::<CanvasRenderingContext2d>().ok());
        }
        self.context.clone()
    }

    /// Draw one frame: trail fade, particle dots, particle links, pointer
    /// links, in that order so the lines sit on top of the dots.
    pub fn draw(&mut self, field: &ParticleField) {
        let ctx = match self.acquire_context() {
            Some(ctx) => ctx,
            None => return,
        };
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let particles = field.particles();

        // Translucent fill over the previous frame instead of a clear.
        fill_style(&ctx, &BACKDROP_COLOR.css(TRAIL_ALPHA));
        ctx.fill_rect(0.0, 0.0, width, height);

        fill_style(&ctx, &PARTICLE_COLOR.css(PARTICLE_ALPHA));
        for p in particles {
            ctx.begin_path();
            let _ = ctx.arc(p.pos[0], p.pos[1], p.radius, 0.0, 2.0 * PI);
            ctx.fill();
        }

        ctx.set_line_width(LINK_LINE_WIDTH);
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let dist = field::distance(particles[i].pos, particles[j].pos);
                if let Some(alpha) = field::link_alpha(dist) {
                    stroke_style(&ctx, &PARTICLE_COLOR.css(alpha));
                    ctx.begin_path();
                    ctx.move_to(particles[i].pos[0], particles[i].pos[1]);
                    ctx.line_to(particles[j].pos[0], particles[j].pos[1]);
                    ctx.stroke();
                }
            }
        }

        if let Some(pointer) = field.pointer() {
            ctx.set_line_width(POINTER_LINE_WIDTH);
            for p in particles {
                let dist = field::distance(p.pos, pointer);
                if let Some(alpha) = field::pointer_link_alpha(dist) {
                    stroke_style(&ctx, &POINTER_LINK_COLOR.css(alpha));
                    ctx.begin_path();
                    ctx.move_to(p.pos[0], p.pos[1]);
                    ctx.line_to(pointer[0], pointer[1]);
                    ctx.stroke();
                }
            }
        }
    }
}

#[allow(deprecated)]
fn fill_style(ctx: &CanvasRenderingContext2d, style: &str) {
    ctx.set_fill_style(&JsValue::from_str(style));
}

#[allow(deprecated)]
fn stroke_style(ctx: &CanvasRenderingContext2d, style: &str) {
    ctx.set_stroke_style(&JsValue::from_str(style));
}
