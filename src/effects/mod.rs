//! Visual and haptic feedback: toasts, clipboard, confetti, counters,
//! vibration.
//!
//! `UiEffects` is constructed once per page from the document and its
//! embedded config, then handed to whoever needs to show feedback — the
//! explicit replacement for the `window.ctfUtils` namespace the templates
//! used to reach for.

mod clipboard;
mod confetti;
mod counter;
mod toast;

use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

pub use toast::ToastKind;

use crate::config::UiConfig;
use crate::error::UiError;
use crate::util;

#[derive(Clone)]
pub struct UiEffects {
    document: Document,
    config: Rc<UiConfig>,
}

impl UiEffects {
    pub fn new(document: Document, config: UiConfig) -> UiEffects {
        UiEffects {
            document,
            config: Rc::new(config),
        }
    }

    /// Effects wired to the current page and its embedded config block.
    pub fn from_page() -> Result<UiEffects, UiError> {
        let document = util::document()?;
        let config = UiConfig::from_document(&document);
        Ok(UiEffects::new(document, config))
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }

    /// Shows a transient corner notification; it removes itself after the
    /// configured lifetime.
    pub fn show_toast(&self, message: &str, kind: ToastKind) -> Result<(), UiError> {
        toast::show(&self.document, &self.config, message, kind)
    }

    /// Asynchronously writes `text` to the system clipboard and reports the
    /// outcome with a toast either way.
    pub fn copy_to_clipboard(&self, text: &str) {
        clipboard::copy(self, text);
    }

    /// Counts the element's text from `start` to `end` over `duration_ms`.
    /// The counter clamps to exactly `end` and stops on its own.
    pub fn animate_number(
        &self,
        element: &HtmlElement,
        start: f64,
        end: f64,
        duration_ms: f64,
    ) -> Result<(), UiError> {
        counter::animate(element, start, end, duration_ms)
    }

    /// Rains the configured number of confetti particles down the viewport;
    /// each removes itself when its fall animation finishes.
    pub fn confetti(&self) -> Result<(), UiError> {
        confetti::burst(&self.document, &self.config)
    }

    /// Haptic feedback with the configured pattern; a silent no-op on devices
    /// without vibration support.
    pub fn vibrate(&self) {
        self.vibrate_with(&self.config.vibrate_pattern);
    }

    pub fn vibrate_with(&self, pattern: &[u32]) {
        let Ok(window) = util::window() else {
            return;
        };
        let navigator = window.navigator();
        let supported =
            js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("vibrate")).unwrap_or(false);
        if !supported {
            return;
        }
        let sequence = js_sys::Array::new();
        for ms in pattern {
            sequence.push(&JsValue::from_f64(f64::from(*ms)));
        }
        navigator.vibrate_with_pattern(&sequence);
    }
}
