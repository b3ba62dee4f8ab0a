use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures surfaced by this crate. At the wasm boundary these convert into
/// plain `JsValue` messages so callers see an ordinary JS exception.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no <body>")]
    NoBody,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("invalid embedded config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<UiError> for JsValue {
    fn from(error: UiError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
