//! Default tuning values for the pinch gesture.

/// Smallest scale a pinch may reach unless overridden.
pub const DEFAULT_MIN_SCALE: f64 = 0.5;

/// Largest scale a pinch may reach unless overridden.
pub const DEFAULT_MAX_SCALE: f64 = 3.0;

/// Scale units gained per pixel of finger separation change.
pub const DEFAULT_SENSITIVITY: f64 = 0.01;

/// Scale every controller starts from before its first pinch.
pub const INITIAL_SCALE: f64 = 1.0;

/// Exactly this many contact points make a pinch.
pub const PINCH_CONTACTS: usize = 2;
