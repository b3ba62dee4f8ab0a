//! Animated numeric counters.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;

use crate::error::UiError;

pub(crate) const TICK_MS: i32 = 16;

/// Per-tick increment covering `start..end` in `duration_ms` at the tick
/// cadence. Direction follows the sign of the range.
pub(crate) fn increment(start: f64, end: f64, duration_ms: f64) -> f64 {
    (end - start) / (duration_ms / f64::from(TICK_MS))
}

/// One interpolation step: the next running value, and whether the target was
/// reached or overshot (in which case the value is clamped to exactly `end`).
pub(crate) fn step(current: f64, increment: f64, end: f64) -> (f64, bool) {
    let next = current + increment;
    let done = (increment >= 0.0 && next >= end) || (increment < 0.0 && next <= end);
    if done { (end, true) } else { (next, false) }
}

/// Drives `element`'s text from `start` to `end`. The interval owns itself
/// through the closure cell and releases itself on the final tick;
/// wasm-bindgen defers the deallocation until that call returns.
pub(crate) fn animate(
    element: &HtmlElement,
    start: f64,
    end: f64,
    duration_ms: f64,
) -> Result<(), UiError> {
    if duration_ms <= 0.0 {
        element.set_text_content(Some(&end.floor().to_string()));
        return Ok(());
    }
    let window = crate::util::window()?;
    let inc = increment(start, end, duration_ms);
    let current = Rc::new(Cell::new(start));
    let interval_id = Rc::new(Cell::new(0i32));
    let tick_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick = {
        let element = element.clone();
        let window = window.clone();
        let current = current.clone();
        let interval_id = interval_id.clone();
        let tick_cell = tick_cell.clone();
        Closure::wrap(Box::new(move || {
            let (next, done) = step(current.get(), inc, end);
            current.set(next);
            element.set_text_content(Some(&next.floor().to_string()));
            if done {
                window.clear_interval_with_handle(interval_id.get());
                tick_cell.borrow_mut().take();
            }
        }) as Box<dyn FnMut()>)
    };
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(tick.as_ref().unchecked_ref(), TICK_MS)?;
    interval_id.set(id);
    *tick_cell.borrow_mut() = Some(tick);
    Ok(())
}
