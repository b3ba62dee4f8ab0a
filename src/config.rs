//! Page-embedded configuration.
//!
//! Templates may ship overrides in a `<script type="application/json"
//! id="ctf-ui-config">` block (the host's `json_script` convention); anything
//! absent falls back to the defaults below, which match what the platform's
//! pages have always displayed.

use serde::Deserialize;
use web_sys::Document;

use crate::error::UiError;
use crate::util::cwarn;

pub const CONFIG_ELEMENT_ID: &str = "ctf-ui-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a toast stays fully visible, in milliseconds.
    pub toast_duration_ms: i32,
    /// Length of the toast exit animation, in milliseconds.
    pub toast_exit_ms: i32,
    /// Cadence of the `[data-timestamp]` sweep, in milliseconds.
    pub refresh_interval_ms: i32,
    /// Appended verbatim after every refreshed timestamp.
    pub timestamp_suffix: String,
    pub confetti_count: u32,
    pub confetti_colors: Vec<String>,
    /// Vibration pattern in milliseconds, alternating on/off.
    pub vibrate_pattern: Vec<u32>,
    pub copied_message: String,
    pub copy_failed_message: String,
    pub required_fields_message: String,
    pub offline_message: String,
    pub online_message: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3_000,
            toast_exit_ms: 300,
            refresh_interval_ms: 60_000,
            timestamp_suffix: " ago".to_owned(),
            confetti_count: 50,
            confetti_colors: ["#00ff41", "#ff00ff", "#00ffff", "#ffff00", "#ff0000"]
                .map(str::to_owned)
                .to_vec(),
            vibrate_pattern: vec![100, 50, 100],
            copied_message: "Copiado al portapapeles!".to_owned(),
            copy_failed_message: "No se pudo copiar al portapapeles".to_owned(),
            required_fields_message: "Por favor completa todos los campos".to_owned(),
            offline_message: "Conexión perdida. Reconectando...".to_owned(),
            online_message: "Conexión restaurada!".to_owned(),
        }
    }
}

impl UiConfig {
    /// Strict parse of a config block's JSON body.
    pub fn from_json(raw: &str) -> Result<UiConfig, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the page's config block, falling back to defaults when the block
    /// is absent. A malformed block is reported on the console and ignored
    /// rather than breaking the page.
    pub fn from_document(document: &Document) -> UiConfig {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return UiConfig::default();
        };
        match UiConfig::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                cwarn(&format!("ctf-ui: ignoring malformed config block: {err}"));
                UiConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let parsed: UiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, UiConfig::default());
    }

    #[test]
    fn partial_overrides_keep_remaining_defaults() {
        let parsed: UiConfig =
            serde_json::from_str(r#"{"confetti_count": 10, "timestamp_suffix": ""}"#).unwrap();
        assert_eq!(parsed.confetti_count, 10);
        assert_eq!(parsed.timestamp_suffix, "");
        assert_eq!(parsed.toast_duration_ms, 3_000);
        assert_eq!(parsed.offline_message, UiConfig::default().offline_message);
    }

    #[test]
    fn default_palette_has_five_colors() {
        let config = UiConfig::default();
        assert_eq!(config.confetti_colors.len(), 5);
        assert!(config.confetti_colors.iter().all(|c| c.starts_with('#')));
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        assert!(UiConfig::from_json(r#"{"not_a_field": 1}"#).is_ok());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(UiConfig::from_json("{not json").is_err());
        assert!(UiConfig::from_json(r#"{"confetti_count": "ten"}"#).is_err());
    }
}
