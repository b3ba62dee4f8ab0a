//! Page-lifetime wiring: everything the host templates used to get from a
//! `DOMContentLoaded` hook, with explicit teardown.

mod connectivity;
mod forms;
mod refresh;

use wasm_bindgen::prelude::*;

pub use connectivity::ConnectivityNotifier;
pub use forms::FormGuard;
pub use refresh::{TIMESTAMP_ATTR, TIMESTAMP_SELECTOR, TimestampRefresher, refresh_timestamps};

use crate::effects::UiEffects;
use crate::error::UiError;

/// Holds every listener and timer the crate attached to the page. Dropping it
/// (or calling `dispose()` from JS) detaches them all.
#[wasm_bindgen]
pub struct PageBindings {
    _refresher: TimestampRefresher,
    _forms: FormGuard,
    _connectivity: ConnectivityNotifier,
}

impl PageBindings {
    pub fn mount(effects: &UiEffects) -> Result<PageBindings, UiError> {
        Ok(PageBindings {
            _refresher: TimestampRefresher::start(effects.document().clone(), effects.config())?,
            _forms: FormGuard::install(effects)?,
            _connectivity: ConnectivityNotifier::attach(effects)?,
        })
    }
}

#[wasm_bindgen]
impl PageBindings {
    /// Consumes the bindings, clearing the refresh interval and removing the
    /// form and connectivity listeners.
    pub fn dispose(self) {}
}
