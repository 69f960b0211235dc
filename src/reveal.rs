// Scroll-triggered reveal. The element starts shifted and transparent, and
// the first time it scrolls into view it transitions to its resting state.
// The observer's negative bottom margin makes elements clear the viewport
// edge by a little before the reveal fires.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::constants::{REVEAL_OFFSET_PX, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, REVEAL_TRANSITION};

/// Which edge the element slides in from.
#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Inline transform that hides the element before its reveal. Sliding "up"
/// means starting below the resting position, so the offset signs are
/// opposite to the direction names.
pub fn initial_transform(direction: RevealDirection) -> String {
    match direction {
        RevealDirection::Up => format!("translateY({}px)", REVEAL_OFFSET_PX),
        RevealDirection::Down => format!("translateY(-{}px)", REVEAL_OFFSET_PX),
        RevealDirection::Left => format!("translateX({}px)", REVEAL_OFFSET_PX),
        RevealDirection::Right => format!("translateX(-{}px)", REVEAL_OFFSET_PX),
    }
}

/// Transition shorthand with the per-element stagger delay baked in.
pub fn transition_value(delay_ms: u32) -> String {
    format!("all {} {}ms", REVEAL_TRANSITION, delay_ms)
}

#[wasm_bindgen]
pub struct ScrollReveal {
    observer: Option<IntersectionObserver>,
    callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
}

#[wasm_bindgen]
impl ScrollReveal {
    /// Hide `element` with the directional offset, then reveal it after
    /// `delay_ms` the first time it intersects the viewport. The reveal
    /// latches: once triggered the element is unobserved and stays put.
    pub fn mount(
        element: HtmlElement,
        direction: RevealDirection,
        delay_ms: u32,
    ) -> Result<ScrollReveal, JsValue> {
        let style = element.style();
        style.set_property("opacity", "0")?;
        style.set_property("transform", &initial_transform(direction))?;
        style.set_property("transition", &transition_value(delay_ms))?;

        let target = element.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = match entry.dyn_into() {
                        Ok(entry) => entry,
                        Err(_) => continue,
                    };
                    if entry.is_intersecting() {
                        let style = target.style();
                        let _ = style.set_property("opacity", "1");
                        let _ = style.set_property("transform", "translate(0)");
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options())?;
        observer.observe(&element);

        Ok(ScrollReveal {
            observer: Some(observer),
            callback: Some(callback),
        })
    }

    /// Disconnect the observer and drop the callback. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback.take();
    }

    pub fn is_active(&self) -> bool {
        self.observer.is_some()
    }
}

#[allow(deprecated)]
fn options() -> IntersectionObserverInit {
    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from(REVEAL_THRESHOLD));
    options.root_margin(REVEAL_ROOT_MARGIN);
    options
}
