//! Online/offline feedback.

use wasm_bindgen::closure::Closure;
use web_sys::Event;

use crate::effects::{ToastKind, UiEffects};
use crate::error::UiError;
use crate::timers::ListenerHandle;
use crate::util::{self, cwarn};

/// Window-level connectivity listeners: an error toast when the connection
/// drops, a success toast when it comes back.
pub struct ConnectivityNotifier {
    _listeners: [ListenerHandle; 2],
}

impl ConnectivityNotifier {
    pub fn attach(effects: &UiEffects) -> Result<ConnectivityNotifier, UiError> {
        let offline = Self::listener(
            "offline",
            effects.clone(),
            effects.config().offline_message.clone(),
            ToastKind::Error,
        )?;
        let online = Self::listener(
            "online",
            effects.clone(),
            effects.config().online_message.clone(),
            ToastKind::Success,
        )?;
        Ok(ConnectivityNotifier {
            _listeners: [offline, online],
        })
    }

    fn listener(
        event: &'static str,
        effects: UiEffects,
        message: String,
        kind: ToastKind,
    ) -> Result<ListenerHandle, UiError> {
        let window = util::window()?;
        let callback = Closure::wrap(Box::new(move |_: Event| {
            if let Err(err) = effects.show_toast(&message, kind) {
                cwarn(&format!("ctf-ui: could not show connectivity toast: {err}"));
            }
        }) as Box<dyn FnMut(Event)>);
        ListenerHandle::new(window.into(), event, callback)
    }
}
