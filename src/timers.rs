//! RAII wrappers over browser timers and event listeners.
//!
//! A registration stays active for exactly as long as its handle lives;
//! dropping the handle clears the browser-side registration and releases the
//! backing closure.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, Window};

use crate::error::UiError;

/// A repeating `setInterval` registration.
pub struct IntervalHandle {
    window: Window,
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl IntervalHandle {
    pub fn new(
        window: Window,
        tick: Closure<dyn FnMut()>,
        period_ms: i32,
    ) -> Result<IntervalHandle, UiError> {
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            period_ms,
        )?;
        Ok(IntervalHandle {
            window,
            id,
            _tick: tick,
        })
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.id);
    }
}

/// An `addEventListener` registration on any target.
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerHandle {
    pub fn new(
        target: EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<ListenerHandle, UiError> {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(ListenerHandle {
            target,
            event,
            callback,
        })
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
