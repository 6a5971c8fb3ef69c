//! Gesture-to-transform controller.
//!
//! [`GestureZoomController`] owns the options and the single [`InputState`]
//! for one zoomable element. Touch handlers only record finger positions;
//! [`GestureZoomController::render_frame`] is called once per display frame
//! and does the scale math, so input rate and render rate stay independent.
//!
//! The element and its scrolling parent are reached through [`ZoomTarget`],
//! implemented for the DOM in [`crate::dom`] and by a recording mock in tests.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use log::debug;

use crate::config::ZoomOptions;
use crate::consts::{INITIAL_SCALE, PINCH_CONTACTS};
use crate::error::ZoomError;
use crate::geometry::{Point, ScrollOffset, Size};
use crate::render::{centering_translate, compute_frame, Frame};
use crate::state::{InputState, ScrollUpdate, ZoomTransform};

/// The zoomed element together with its scroll container.
pub trait ZoomTarget {
    /// Untransformed layout size of the element.
    fn size(&self) -> Size;
    /// Current scroll offsets of the parent.
    fn scroll_offset(&self) -> ScrollOffset;
    fn apply_transform(&self, transform: &ZoomTransform);
    fn scroll_to(&self, update: ScrollUpdate);
}

/// Whether a touch handler claimed the event.
///
/// `Consumed` means the host must suppress the browser default and stop
/// propagation; `Ignored` leaves native scrolling alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchResponse {
    Consumed,
    Ignored,
}

impl TouchResponse {
    #[must_use]
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

pub struct GestureZoomController<T: ZoomTarget> {
    target: T,
    options: ZoomOptions,
    input: InputState,
}

impl<T: ZoomTarget> GestureZoomController<T> {
    /// # Errors
    ///
    /// Returns the first invariant `options` violates.
    pub fn new(target: T, options: ZoomOptions) -> Result<Self, ZoomError> {
        Self::starting_at(target, options, INITIAL_SCALE)
    }

    /// Like [`GestureZoomController::new`], but the first pinch grows from
    /// `scale` clamped into the option bounds. Used to carry zoom over when
    /// an element is re-attached with new options.
    ///
    /// # Errors
    ///
    /// Returns the first invariant `options` violates.
    pub fn starting_at(target: T, options: ZoomOptions, scale: f64) -> Result<Self, ZoomError> {
        options.validate()?;
        let input = InputState::with_scale(options.clamp_scale(scale));
        Ok(Self { target, options, input })
    }

    #[must_use]
    pub fn options(&self) -> &ZoomOptions {
        &self.options
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.input.pinching
    }

    #[must_use]
    pub fn current_scale(&self) -> f64 {
        self.input.current_scale
    }

    pub fn on_touch_start(&mut self, touches: &[Point]) -> TouchResponse {
        if self.force_end_on_extra_contacts(touches.len()) {
            return TouchResponse::Ignored;
        }
        if !self.input.store_fingers(touches) {
            return TouchResponse::Ignored;
        }
        self.input.begin(self.target.scroll_offset());
        debug!(
            "pinch start: distance={:.1} scale={:.3}",
            self.input.start_distance, self.input.start_scale
        );
        TouchResponse::Consumed
    }

    pub fn on_touch_move(&mut self, touches: &[Point]) -> TouchResponse {
        if self.force_end_on_extra_contacts(touches.len()) {
            return TouchResponse::Ignored;
        }
        if self.input.store_fingers(touches) {
            TouchResponse::Consumed
        } else {
            TouchResponse::Ignored
        }
    }

    /// Also used for `touchcancel`.
    pub fn on_touch_end(&mut self) -> TouchResponse {
        if !self.input.pinching {
            return TouchResponse::Ignored;
        }
        self.input.reset();
        debug!("pinch end: scale={:.3}", self.input.start_scale);
        TouchResponse::Consumed
    }

    /// Apply the current pinch to the target. Idle frames write nothing, so
    /// the last applied transform stays in effect.
    pub fn render_frame(&mut self) -> Option<Frame> {
        let frame = compute_frame(&mut self.input, self.target.size(), &self.options)?;
        self.target.apply_transform(&frame.transform);
        if !frame.scroll.is_empty() {
            self.target.scroll_to(frame.scroll);
        }
        Some(frame)
    }

    /// Write the resting transform for the current scale, without touching
    /// the container scroll.
    pub fn sync_transform(&self) -> ZoomTransform {
        let size = self.target.size();
        let scale = self.input.current_scale;
        let transform = ZoomTransform {
            scale,
            translate_x: centering_translate(size.width, scale),
            translate_y: centering_translate(size.height, scale),
        };
        self.target.apply_transform(&transform);
        transform
    }

    // A third contact during a pinch ends it where it stands.
    fn force_end_on_extra_contacts(&mut self, contacts: usize) -> bool {
        if contacts <= PINCH_CONTACTS {
            return false;
        }
        if self.input.pinching {
            self.input.reset();
            debug!("pinch ended by {contacts} contacts: scale={:.3}", self.input.start_scale);
        }
        true
    }
}
