//! Transient corner notifications.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement};

use crate::config::UiConfig;
use crate::error::UiError;
use crate::util;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Name used in the `toast-<kind>` class and accepted from JS callers.
    pub fn name(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    /// Unrecognized names fall back to `Info`.
    pub fn from_name(name: &str) -> ToastKind {
        match name {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }

    // Info gets its own variable (with a neutral fallback) instead of
    // borrowing the error color.
    fn background(self) -> &'static str {
        match self {
            ToastKind::Success => "var(--primary-color)",
            ToastKind::Error => "var(--danger-color)",
            ToastKind::Info => "var(--info-color, #58a6ff)",
        }
    }
}

pub(crate) fn toast_css(kind: ToastKind) -> String {
    format!(
        "position: fixed; bottom: 20px; right: 20px; padding: 1rem 1.5rem; \
         background: {}; color: var(--background); border-radius: 8px; \
         box-shadow: 0 4px 15px rgba(0, 0, 0, 0.3); z-index: 10000; \
         animation: slideIn 0.3s ease-out;",
        kind.background()
    )
}

/// Builds the toast node, schedules its dismissal and appends it to the body.
/// Both timeouts use self-freeing one-shot closures, so the node and its
/// callbacks are gone once the exit animation ends.
pub(crate) fn show(
    document: &Document,
    config: &UiConfig,
    message: &str,
    kind: ToastKind,
) -> Result<(), UiError> {
    let toast = document.create_element("div")?;
    toast.set_class_name(&format!("toast toast-{}", kind.name()));
    toast.set_text_content(Some(message));
    if let Some(el) = toast.dyn_ref::<HtmlElement>() {
        el.style().set_css_text(&toast_css(kind));
    }
    document.body().ok_or(UiError::NoBody)?.append_child(&toast)?;

    let window = util::window()?;
    let exit_ms = config.toast_exit_ms;
    let dismiss = {
        let window = window.clone();
        let toast = toast.clone();
        Closure::once_into_js(move || {
            // Replay the entry animation in reverse, then drop the node.
            if let Some(el) = toast.dyn_ref::<HtmlElement>() {
                let _ = el.style().set_property(
                    "animation",
                    &format!("slideIn {exit_ms}ms ease-out reverse"),
                );
            }
            let remove = {
                let toast = toast.clone();
                Closure::once_into_js(move || toast.remove())
            };
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                remove.unchecked_ref(),
                exit_ms,
            );
        })
    };
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        dismiss.unchecked_ref(),
        config.toast_duration_ms,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in [ToastKind::Success, ToastKind::Error, ToastKind::Info] {
            assert_eq!(ToastKind::from_name(kind.name()), kind);
        }
        assert_eq!(ToastKind::from_name("warning"), ToastKind::Info);
        assert_eq!(ToastKind::from_name(""), ToastKind::Info);
    }

    #[test]
    fn each_kind_styles_distinctly() {
        let success = toast_css(ToastKind::Success);
        let error = toast_css(ToastKind::Error);
        let info = toast_css(ToastKind::Info);
        assert!(success.contains("var(--primary-color)"));
        assert!(error.contains("var(--danger-color)"));
        assert_ne!(info, error);
        assert!(info.contains("--info-color"));
    }

    #[test]
    fn toasts_render_above_everything_fixed_to_the_corner() {
        let css = toast_css(ToastKind::Success);
        assert!(css.contains("position: fixed"));
        assert!(css.contains("z-index: 10000"));
        assert!(css.contains("bottom: 20px; right: 20px"));
    }
}
