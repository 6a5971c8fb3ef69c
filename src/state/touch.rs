// Two-finger pinch state, overwritten in place for every gesture.

#[cfg(test)]
#[path = "touch_test.rs"]
mod touch_test;

use crate::consts::INITIAL_SCALE;
use crate::geometry::{distance, Point, ScrollOffset};

#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    pub pinching: bool,
    /// Finger separation when the current pinch began; zero while idle.
    pub start_distance: f64,
    pub finger1: Point,
    pub finger2: Point,
    /// Scale the current pinch grows from; the previous pinch's final scale.
    pub start_scale: f64,
    /// Scale applied on the most recent rendered frame.
    pub current_scale: f64,
    /// Container scroll captured when the pinch began.
    pub scroll_anchor: ScrollOffset,
}

impl Default for InputState {
    fn default() -> Self {
        Self::with_scale(INITIAL_SCALE)
    }
}

impl InputState {
    /// Idle state whose next pinch grows from `scale`.
    #[must_use]
    pub fn with_scale(scale: f64) -> Self {
        Self {
            pinching: false,
            start_distance: 0.0,
            finger1: Point::default(),
            finger2: Point::default(),
            start_scale: scale,
            current_scale: scale,
            scroll_anchor: ScrollOffset::default(),
        }
    }

    /// Record both contact points. Returns `false` (and leaves the state
    /// untouched) unless exactly two points are given.
    pub fn store_fingers(&mut self, touches: &[Point]) -> bool {
        let [first, second] = touches else {
            return false;
        };
        self.finger1 = *first;
        self.finger2 = *second;
        true
    }

    #[must_use]
    pub fn finger_distance(&self) -> f64 {
        distance(self.finger1, self.finger2)
    }

    /// Start a pinch from the fingers already stored.
    pub fn begin(&mut self, scroll_anchor: ScrollOffset) {
        self.start_distance = self.finger_distance();
        self.pinching = true;
        self.scroll_anchor = scroll_anchor;
    }

    /// End the pinch, carrying the last rendered scale into the next one.
    pub fn reset(&mut self) {
        self.start_scale = self.current_scale;
        self.start_distance = 0.0;
        self.finger1 = Point::default();
        self.finger2 = Point::default();
        self.pinching = false;
    }
}
