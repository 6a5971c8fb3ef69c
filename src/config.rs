//! Zoom options: defaults, caller overrides and validation.
//!
//! Overrides arrive as a JSON object with camelCase keys (`minScale`,
//! `maxScale`, `sensitivity`, `scrollCompensation`). Keys that are absent keep
//! their default and keys we do not know are ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::consts::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_SENSITIVITY};
use crate::error::ZoomError;

/// When the container scroll is adjusted to follow the scaled element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScrollCompensation {
    /// Only on axes where the element overflows its box (translate > 0).
    #[default]
    PositiveOverflow,
    /// On both axes every frame, including negative translates when zoomed out.
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoomOptions {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Scale units per pixel of finger separation change.
    pub sensitivity: f64,
    pub scroll_compensation: ScrollCompensation,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            sensitivity: DEFAULT_SENSITIVITY,
            scroll_compensation: ScrollCompensation::default(),
        }
    }
}

impl ZoomOptions {
    #[must_use]
    pub fn new(min_scale: f64, max_scale: f64) -> Self {
        Self { min_scale, max_scale, ..Self::default() }
    }

    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    #[must_use]
    pub fn with_scroll_compensation(mut self, policy: ScrollCompensation) -> Self {
        self.scroll_compensation = policy;
        self
    }

    /// Merge a JSON object over the defaults and validate the result.
    ///
    /// # Errors
    ///
    /// Returns `Options` if the text is not a JSON object with the expected
    /// value types, or any validation error from [`ZoomOptions::validate`].
    pub fn from_json(json: &str) -> Result<Self, ZoomError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Merge a JS options object over the defaults. `undefined` and `null`
    /// yield the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Js` if the value cannot be stringified, otherwise the same
    /// errors as [`ZoomOptions::from_json`].
    pub fn from_js(value: &JsValue) -> Result<Self, ZoomError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let json = js_sys::JSON::stringify(value).map_err(|e| ZoomError::from_js(&e))?;
        let json: String = json.into();
        Self::from_json(&json)
    }

    /// Check the ordering and positivity invariants the clamp relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ZoomError> {
        for (name, value) in [("minScale", self.min_scale), ("maxScale", self.max_scale)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ZoomError::InvalidScale { name, value });
            }
        }
        if self.max_scale < self.min_scale {
            return Err(ZoomError::InvalidScaleRange { min: self.min_scale, max: self.max_scale });
        }
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(ZoomError::InvalidSensitivity(self.sensitivity));
        }
        Ok(())
    }

    /// Clamp a raw scale into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}
