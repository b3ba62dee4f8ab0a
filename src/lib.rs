//! Browser-side UI helpers for the CTF platform.
//!
//! Compiled to `wasm32-unknown-unknown` and loaded by the server-rendered
//! templates; everything here decorates markup the server already produced.
//! Pure logic (time formatting, flag validation, counter stepping) lives in
//! plain functions so it also runs under the native test harness.
//!
//! The `js_name` exports below are the page-facing API the templates call;
//! Rust callers should prefer [`UiEffects`] and [`PageBindings`] directly.

pub mod config;
pub mod effects;
pub mod error;
pub mod flag;
pub mod page;
pub mod timeago;
pub mod timers;
pub mod util;

pub use config::UiConfig;
pub use effects::{ToastKind, UiEffects};
pub use error::UiError;
pub use page::PageBindings;

use wasm_bindgen::prelude::*;

/// Wires the timestamp refresher, the form guard and the connectivity
/// notifier to the current page. Keep the returned bindings alive for as long
/// as they should run; `dispose()` tears everything down.
#[wasm_bindgen]
pub fn mount() -> Result<PageBindings, JsValue> {
    let effects = UiEffects::from_page()?;
    Ok(PageBindings::mount(&effects)?)
}

/// Relative-time string for a date-constructor-compatible value. Throws on an
/// unparseable date.
#[wasm_bindgen(js_name = timeAgo)]
pub fn time_ago(date: &str) -> Result<String, JsValue> {
    timeago::time_ago(date)
        .ok_or_else(|| JsValue::from_str(&format!("unparseable date: {date:?}")))
}

/// Copies `text` to the clipboard and reports the outcome with a toast.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let effects = UiEffects::from_page()?;
    effects.copy_to_clipboard(text);
    Ok(())
}

/// Shows a toast; `kind` is `"success"`, `"error"` or `"info"` (the default).
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) -> Result<(), JsValue> {
    let effects = UiEffects::from_page()?;
    let kind = kind
        .as_deref()
        .map(ToastKind::from_name)
        .unwrap_or(ToastKind::Info);
    Ok(effects.show_toast(message, kind)?)
}

#[wasm_bindgen(js_name = isValidFlag)]
pub fn is_valid_flag(flag: &str) -> bool {
    flag::is_valid_flag(flag)
}

/// Counts `element`'s text from `start` to `end` over `duration_ms`,
/// clamping to exactly `end` when done.
#[wasm_bindgen(js_name = animateNumber)]
pub fn animate_number(
    element: web_sys::HtmlElement,
    start: f64,
    end: f64,
    duration_ms: f64,
) -> Result<(), JsValue> {
    let effects = UiEffects::from_page()?;
    Ok(effects.animate_number(&element, start, end, duration_ms)?)
}

#[wasm_bindgen(js_name = createConfetti)]
pub fn create_confetti() -> Result<(), JsValue> {
    let effects = UiEffects::from_page()?;
    Ok(effects.confetti()?)
}

/// Vibrates with `pattern` (milliseconds, alternating on/off) or the
/// configured default; silently no-ops where unsupported.
#[wasm_bindgen]
pub fn vibrate(pattern: Option<Vec<u32>>) {
    let Ok(effects) = UiEffects::from_page() else {
        return;
    };
    match pattern {
        Some(pattern) => effects.vibrate_with(&pattern),
        None => effects.vibrate(),
    }
}

/// One immediate sweep of every `[data-timestamp]` element.
#[wasm_bindgen(js_name = updateTimestamps)]
pub fn update_timestamps() -> Result<(), JsValue> {
    let effects = UiEffects::from_page()?;
    Ok(page::refresh_timestamps(
        effects.document(),
        &effects.config().timestamp_suffix,
    )?)
}
