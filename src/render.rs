//! Per-frame zoom math.
//!
//! Everything here is pure: given the pinch state, the element's unscaled
//! size and the options, compute the scale, the centering translate and the
//! container scroll that keeps the zoomed region under the fingers.
//!
//! CSS applies `translate` after `scale` in the scaled coordinate space, so
//! the visual overflow `(size * scale - size) / 2` is divided by the scale to
//! express it in unscaled pixels.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::config::{ScrollCompensation, ZoomOptions};
use crate::geometry::{ScrollOffset, Size};
use crate::state::{InputState, ScrollUpdate, ZoomTransform};

/// What one active frame writes to the element and its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub transform: ZoomTransform,
    pub scroll: ScrollUpdate,
}

/// Scale for the current finger separation, clamped into the option bounds.
#[must_use]
pub fn pinch_scale(
    start_scale: f64,
    start_distance: f64,
    current_distance: f64,
    options: &ZoomOptions,
) -> f64 {
    let pixel_change = current_distance - start_distance;
    options.clamp_scale(start_scale + pixel_change * options.sensitivity)
}

/// Translate along one axis that re-centers an element of `extent` pixels
/// scaled by `scale`, in unscaled pixels.
#[must_use]
pub fn centering_translate(extent: f64, scale: f64) -> f64 {
    let overflow = (extent * scale - extent) / 2.0;
    overflow / scale
}

/// Container scroll for the given translate, per the compensation policy.
#[must_use]
pub fn scroll_compensation(
    anchor: ScrollOffset,
    translate_x: f64,
    translate_y: f64,
    policy: ScrollCompensation,
) -> ScrollUpdate {
    let axis = |anchor: f64, translate: f64| match policy {
        ScrollCompensation::Always => Some(anchor + translate),
        ScrollCompensation::PositiveOverflow if translate > 0.0 => Some(anchor + translate),
        ScrollCompensation::PositiveOverflow => None,
    };
    ScrollUpdate {
        left: axis(anchor.left, translate_x),
        top: axis(anchor.top, translate_y),
    }
}

/// Compute the frame for an active pinch, or `None` while idle.
///
/// Updates `input.current_scale` as a side effect; nothing else is touched.
pub fn compute_frame(input: &mut InputState, size: Size, options: &ZoomOptions) -> Option<Frame> {
    if !input.pinching {
        return None;
    }
    let scale = pinch_scale(
        input.start_scale,
        input.start_distance,
        input.finger_distance(),
        options,
    );
    input.current_scale = scale;

    let translate_x = centering_translate(size.width, scale);
    let translate_y = centering_translate(size.height, scale);
    Some(Frame {
        transform: ZoomTransform { scale, translate_x, translate_y },
        scroll: scroll_compensation(
            input.scroll_anchor,
            translate_x,
            translate_y,
            options.scroll_compensation,
        ),
    })
}
