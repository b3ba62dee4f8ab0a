//! Async clipboard writes with toast feedback.

use wasm_bindgen_futures::{JsFuture, spawn_local};

use super::{ToastKind, UiEffects};
use crate::util::{cerror, cwarn};

/// Requests a clipboard write and reports the outcome. Failures (permission
/// denied, insecure context) get an error toast as well as a console entry,
/// so the user is not left wondering whether the copy happened.
pub(crate) fn copy(effects: &UiEffects, text: &str) {
    let effects = effects.clone();
    let text = text.to_owned();
    spawn_local(async move {
        let Ok(window) = crate::util::window() else {
            return;
        };
        let write = window.navigator().clipboard().write_text(&text);
        let (message, kind) = match JsFuture::from(write).await {
            Ok(_) => (effects.config().copied_message.clone(), ToastKind::Success),
            Err(err) => {
                cerror(&format!("ctf-ui: clipboard write failed: {err:?}"));
                (effects.config().copy_failed_message.clone(), ToastKind::Error)
            }
        };
        if let Err(err) = effects.show_toast(&message, kind) {
            cwarn(&format!("ctf-ui: could not show clipboard toast: {err}"));
        }
    });
}
