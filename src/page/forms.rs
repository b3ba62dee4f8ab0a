//! Client-side guard against submitting empty required fields.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlFormElement, HtmlInputElement};

use crate::effects::{ToastKind, UiEffects};
use crate::error::UiError;
use crate::timers::ListenerHandle;
use crate::util::cwarn;

const REQUIRED_INPUTS: &str = "input[required]";

/// Submit interceptors for every form on the page. Valid submissions pass
/// through untouched; an empty required field cancels the submission, marks
/// the offending inputs and shows one error toast.
pub struct FormGuard {
    _listeners: Vec<ListenerHandle>,
}

impl FormGuard {
    pub fn install(effects: &UiEffects) -> Result<FormGuard, UiError> {
        let forms = effects.document().query_selector_all("form")?;
        let mut listeners = Vec::with_capacity(forms.length() as usize);
        for i in 0..forms.length() {
            let Some(form) = forms.get(i).and_then(|n| n.dyn_into::<HtmlFormElement>().ok())
            else {
                continue;
            };
            listeners.push(Self::guard(form, effects.clone())?);
        }
        Ok(FormGuard {
            _listeners: listeners,
        })
    }

    fn guard(form: HtmlFormElement, effects: UiEffects) -> Result<ListenerHandle, UiError> {
        let callback = {
            let form = form.clone();
            Closure::wrap(Box::new(move |event: Event| {
                let Ok(inputs) = form.query_selector_all(REQUIRED_INPUTS) else {
                    return;
                };
                let mut valid = true;
                for i in 0..inputs.length() {
                    let Some(input) =
                        inputs.get(i).and_then(|n| n.dyn_into::<HtmlInputElement>().ok())
                    else {
                        continue;
                    };
                    let filled = !input.value().trim().is_empty();
                    let border = if filled {
                        "var(--primary-color)"
                    } else {
                        "var(--danger-color)"
                    };
                    let _ = input.style().set_property("border-color", border);
                    valid &= filled;
                }
                if !valid {
                    event.prevent_default();
                    let message = effects.config().required_fields_message.clone();
                    if let Err(err) = effects.show_toast(&message, ToastKind::Error) {
                        cwarn(&format!("ctf-ui: could not show form toast: {err}"));
                    }
                }
            }) as Box<dyn FnMut(Event)>)
        };
        ListenerHandle::new(form.into(), "submit", callback)
    }
}
