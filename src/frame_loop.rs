// A repeating requestAnimationFrame task with a cancellation handle. The
// callback closure is owned here, never forgotten into JS; cancel drops it,
// which is also what stops the re-arm.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub struct FrameLoop {
    frame_id: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    /// Start running `tick` once per animation frame until `cancel`.
    pub fn start<F>(mut tick: F) -> Result<FrameLoop, JsValue>
    where
        F: FnMut() + 'static,
    {
        let frame_id = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let rearm_id = frame_id.clone();
        let rearm_callback = callback.clone();
        let closure = Closure::wrap(Box::new(move || {
            tick();
            // A cancelled loop has an empty closure slot; stop re-arming.
            if let Some(closure) = rearm_callback.borrow().as_ref() {
                rearm_id.set(schedule(closure).ok());
            }
        }) as Box<dyn FnMut()>);

        frame_id.set(Some(schedule(&closure)?));
        *callback.borrow_mut() = Some(closure);

        Ok(FrameLoop { frame_id, callback })
    }

    /// Cancel the pending frame and drop the callback. Safe to call twice.
    pub fn cancel(&mut self) {
        if let Some(id) = self.frame_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.callback.borrow_mut().take();
    }

    pub fn is_active(&self) -> bool {
        self.callback.borrow().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window to schedule frames on"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}
