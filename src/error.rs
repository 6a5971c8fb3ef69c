//! Failures that can happen while building or attaching a zoom controller.
//!
//! The gesture pipeline itself never fails: bad finger counts and idle frames
//! are silent no-ops. Only configuration and DOM attachment report errors.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum ZoomError {
    #[error("invalid scale bound {name} = {value}: must be finite and greater than zero")]
    InvalidScale { name: &'static str, value: f64 },
    #[error("maxScale {max} is smaller than minScale {min}")]
    InvalidScaleRange { min: f64, max: f64 },
    #[error("invalid sensitivity {0}: must be finite and greater than zero")]
    InvalidSensitivity(f64),
    #[error("malformed options: {0}")]
    Options(#[from] serde_json::Error),
    #[error("zoom target has no parent element to scroll")]
    NoParent,
    #[error("no global window available")]
    NoWindow,
    #[error("javascript error: {0}")]
    Js(String),
}

impl ZoomError {
    /// Wrap a thrown JS value, keeping whatever string form it has.
    #[must_use]
    pub fn from_js(value: &JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<ZoomError> for JsValue {
    fn from(err: ZoomError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
