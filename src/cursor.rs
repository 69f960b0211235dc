// Custom cursor follower: a ring and a dot that trail the pointer, plus a
// `hovering` class on the ring while the pointer is over an interactive
// element. Hover tracking is delegated through mouseover/mouseout on the
// window; a closest() check decides whether the target counts, which also
// covers elements added after mount.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent};

use crate::constants::{CURSOR_DOT_SIZE, CURSOR_RING_SIZE};
use crate::listener::ListenerHandle;

/// Elements that grow the cursor ring on hover.
const HOVER_TARGETS: &str = "a, button, [data-cursor-hover]";
const HOVER_CLASS: &str = "hovering";

#[wasm_bindgen]
pub struct CursorFollower {
    listeners: Vec<ListenerHandle>,
}

#[wasm_bindgen]
impl CursorFollower {
    /// Drive the host's ring and dot elements from pointer movement. Both
    /// elements are positioned by their top-left corner, so each is offset
    /// by half its own size to center on the pointer.
    pub fn mount(ring: HtmlElement, dot: HtmlElement) -> Result<CursorFollower, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let mut listeners = Vec::with_capacity(3);
        {
            let ring = ring.clone();
            let dot = dot.clone();
            listeners.push(ListenerHandle::attach(
                &window,
                "mousemove",
                Box::new(move |event: Event| {
                    let event = event.unchecked_into::<MouseEvent>();
                    let x = event.client_x() as f64;
                    let y = event.client_y() as f64;
                    position(&ring, x - CURSOR_RING_SIZE / 2.0, y - CURSOR_RING_SIZE / 2.0);
                    position(&dot, x - CURSOR_DOT_SIZE / 2.0, y - CURSOR_DOT_SIZE / 2.0);
                }),
            )?);
        }
        {
            let ring = ring.clone();
            listeners.push(ListenerHandle::attach(
                &window,
                "mouseover",
                Box::new(move |event: Event| {
                    if over_hover_target(&event) {
                        let _ = ring.class_list().add_1(HOVER_CLASS);
                    }
                }),
            )?);
        }
        {
            let ring = ring.clone();
            listeners.push(ListenerHandle::attach(
                &window,
                "mouseout",
                Box::new(move |event: Event| {
                    if over_hover_target(&event) {
                        let _ = ring.class_list().remove_1(HOVER_CLASS);
                    }
                }),
            )?);
        }

        Ok(CursorFollower { listeners })
    }

    /// Detach every listener. Idempotent.
    pub fn cancel(&mut self) {
        for listener in &mut self.listeners {
            listener.detach();
        }
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.iter().filter(|l| l.is_attached()).count()
    }
}

fn position(element: &HtmlElement, left: f64, top: f64) {
    let style = element.style();
    let _ = style.set_property("left", &format!("{}px", left));
    let _ = style.set_property("top", &format!("{}px", top));
}

fn over_hover_target(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(HOVER_TARGETS).ok().flatten())
        .is_some()
}
