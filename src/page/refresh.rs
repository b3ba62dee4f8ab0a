//! Periodic re-rendering of `[data-timestamp]` elements.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element};

use crate::config::UiConfig;
use crate::error::UiError;
use crate::timeago;
use crate::timers::IntervalHandle;
use crate::util::{self, cwarn};

pub const TIMESTAMP_ATTR: &str = "data-timestamp";
pub const TIMESTAMP_SELECTOR: &str = "[data-timestamp]";

pub(crate) fn display_text(relative: &str, suffix: &str) -> String {
    format!("{relative}{suffix}")
}

/// One sweep: recompute the display text of every tagged element on the page.
/// Elements whose attribute the date constructor rejects are left alone, with
/// a console warning.
pub fn refresh_timestamps(document: &Document, suffix: &str) -> Result<(), UiError> {
    let nodes = document.query_selector_all(TIMESTAMP_SELECTOR)?;
    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(raw) = element.get_attribute(TIMESTAMP_ATTR) else {
            continue;
        };
        match timeago::time_ago(&raw) {
            Some(relative) => element.set_text_content(Some(&display_text(&relative, suffix))),
            None => cwarn(&format!(
                "ctf-ui: skipping unparseable {TIMESTAMP_ATTR} value {raw:?}"
            )),
        }
    }
    Ok(())
}

/// Keeps the page's timestamps fresh until dropped.
pub struct TimestampRefresher {
    _interval: IntervalHandle,
}

impl TimestampRefresher {
    /// Runs one sweep immediately (so stale server-rendered text never
    /// survives a full period), then one per configured interval.
    pub fn start(document: Document, config: &UiConfig) -> Result<TimestampRefresher, UiError> {
        let suffix = config.timestamp_suffix.clone();
        refresh_timestamps(&document, &suffix)?;
        let tick = Closure::wrap(Box::new(move || {
            if let Err(err) = refresh_timestamps(&document, &suffix) {
                cwarn(&format!("ctf-ui: timestamp sweep failed: {err}"));
            }
        }) as Box<dyn FnMut()>);
        let interval = IntervalHandle::new(util::window()?, tick, config.refresh_interval_ms)?;
        Ok(TimestampRefresher {
            _interval: interval,
        })
    }

    /// Explicit teardown; equivalent to dropping the refresher.
    pub fn stop(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_is_appended_verbatim() {
        assert_eq!(display_text("30 segundos", " ago"), "30 segundos ago");
        assert_eq!(display_text("1 horas", ""), "1 horas");
    }

    #[test]
    fn selector_matches_the_attribute() {
        assert_eq!(TIMESTAMP_SELECTOR, format!("[{TIMESTAMP_ATTR}]"));
    }
}
