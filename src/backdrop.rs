// The full-viewport particle backdrop. This is the wasm-facing animator: it
// owns the field, the renderer, and every registration made against the
// window (resize, mousemove, the frame loop), and hands the host a handle
// that can take all of it down again.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, Window};

use crate::field::ParticleField;
use crate::frame_loop::FrameLoop;
use crate::listener::ListenerHandle;
use crate::renderer::CanvasRenderer;
use crate::Timer;

#[wasm_bindgen]
pub struct ParticleBackdrop {
    field: Rc<RefCell<ParticleField>>,
    frame_loop: Option<FrameLoop>,
    listeners: Vec<ListenerHandle>,
}

#[wasm_bindgen]
impl ParticleBackdrop {
    /// Mount the animator onto the host's full-viewport canvas. The canvas
    /// backing store is sized to the window here and again on every resize;
    /// the particles are spawned once and survive resizes.
    pub fn mount(canvas: HtmlCanvasElement) -> Result<ParticleBackdrop, JsValue> {
        let _timer = Timer::new("ParticleBackdrop::mount");
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let (width, height) = viewport_size(&window);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let field = Rc::new(RefCell::new(ParticleField::new(width, height)));

        let mut listeners = Vec::with_capacity(2);
        {
            let field = field.clone();
            let canvas = canvas.clone();
            listeners.push(ListenerHandle::attach(
                &window,
                "resize",
                Box::new(move |_event: Event| {
                    if let Some(window) = web_sys::window() {
                        let (width, height) = viewport_size(&window);
                        canvas.set_width(width as u32);
                        canvas.set_height(height as u32);
                        field.borrow_mut().resize(width, height);
                        log::debug!("backdrop resized to {}x{}", width as u32, height as u32);
                    }
                }),
            )?);
        }
        {
            let field = field.clone();
            listeners.push(ListenerHandle::attach(
                &window,
                "mousemove",
                Box::new(move |event: Event| {
                    let event = event.unchecked_into::<MouseEvent>();
                    // The canvas fills the viewport from its top-left corner,
                    // so client coordinates are canvas coordinates.
                    field
                        .borrow_mut()
                        .set_pointer(event.client_x() as f64, event.client_y() as f64);
                }),
            )?);
        }

        let mut renderer = CanvasRenderer::new(canvas);
        let frame_loop = {
            let field = field.clone();
            FrameLoop::start(move || {
                let mut field = field.borrow_mut();
                field.step();
                renderer.draw(&field);
            })?
        };

        log::info!(
            "particle backdrop mounted: {} particles at {}x{}",
            field.borrow().particles().len(),
            width as u32,
            height as u32
        );

        Ok(ParticleBackdrop {
            field,
            frame_loop: Some(frame_loop),
            listeners,
        })
    }

    /// Stop the frame loop and detach every listener. Idempotent; a second
    /// call finds nothing left to release.
    pub fn cancel(&mut self) {
        if let Some(mut frame_loop) = self.frame_loop.take() {
            frame_loop.cancel();
        }
        for listener in &mut self.listeners {
            listener.detach();
        }
        self.listeners.clear();
        log::debug!("particle backdrop cancelled");
    }

    /// True while the frame loop is scheduled.
    pub fn is_active(&self) -> bool {
        self.frame_loop.as_ref().map_or(false, FrameLoop::is_active)
    }

    /// Number of window listeners currently attached.
    pub fn listener_count(&self) -> usize {
        self.listeners.iter().filter(|l| l.is_attached()).count()
    }

    pub fn particle_count(&self) -> usize {
        self.field.borrow().particles().len()
    }
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (width, height)
}
