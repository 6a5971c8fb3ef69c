// Output of one rendered frame: the element transform and the container scroll.

/// Scale about the element's center, then translate in unscaled pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self { scale: 1.0, translate_x: 0.0, translate_y: 0.0 }
    }
}

impl ZoomTransform {
    /// CSS `transform` value, e.g. `scale(2) translate(50px, 25px)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.scale, self.translate_x, self.translate_y
        )
    }
}

/// New container scroll offsets; `None` leaves that axis alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollUpdate {
    pub left: Option<f64>,
    pub top: Option<f64>,
}

impl ScrollUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.top.is_none()
    }
}
