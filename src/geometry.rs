//! Plain geometry shared by the gesture state and the render math.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A contact point in viewport-relative CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Untransformed layout size of the zoomed element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Scroll offsets of the container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub left: f64,
    pub top: f64,
}

impl ScrollOffset {
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}
