// A DOM event listener bundled with everything needed to detach it again:
// the target, the event name, and the closure backing the JS callback.
// Detach happens explicitly during teardown or implicitly on drop.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget};

pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    callback: Option<Closure<dyn FnMut(Event)>>,
}

impl ListenerHandle {
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: Box<dyn FnMut(Event)>,
    ) -> Result<ListenerHandle, JsValue> {
        let callback = Closure::wrap(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;

        Ok(ListenerHandle {
            target: target.clone(),
            event,
            callback: Some(callback),
        })
    }

    pub fn detach(&mut self) {
        if let Some(callback) = self.callback.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, callback.as_ref().unchecked_ref());
        }
    }

    pub fn is_attached(&self) -> bool {
        self.callback.is_some()
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.detach();
    }
}
