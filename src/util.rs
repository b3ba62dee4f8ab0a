// Shared browser plumbing: console logging, clock access, DOM entry points.

use wasm_bindgen::JsValue;

use crate::error::UiError;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

pub fn cerror(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

/// Current Unix time in milliseconds.
///
/// `std::time::SystemTime` is unavailable on `wasm32-unknown-unknown`, so the
/// wasm path goes through `js_sys::Date`; the native path exists for the test
/// harness.
pub fn now_millis() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}

pub fn window() -> Result<web_sys::Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, UiError> {
    window()?.document().ok_or(UiError::NoDocument)
}
