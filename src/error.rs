use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure reported by the JS host while wiring a behavior to the page.
#[derive(Error, Debug)]
pub enum BindError {
    #[error("failed to register '{event}' listener: {message}")]
    Listener { event: String, message: String },
    #[error("failed to create intersection observer: {0}")]
    Observer(String),
    #[error("failed to update style '{property}': {message}")]
    Style { property: String, message: String },
    #[error("element matching '{0}' has an unexpected type")]
    Cast(String),
}

pub type Result<T> = std::result::Result<T, BindError>;

/// Renders a thrown JS value for log output.
pub fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
