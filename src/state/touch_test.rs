#![allow(clippy::float_cmp)]

use super::*;

fn pair(a: (f64, f64), b: (f64, f64)) -> [Point; 2] {
    [Point::new(a.0, a.1), Point::new(b.0, b.1)]
}

#[test]
fn default_is_idle_at_unit_scale() {
    let s = InputState::default();
    assert!(!s.pinching);
    assert_eq!(s.start_distance, 0.0);
    assert_eq!(s.start_scale, 1.0);
    assert_eq!(s.current_scale, 1.0);
}

#[test]
fn with_scale_seeds_both_scales() {
    let s = InputState::with_scale(1.5);
    assert!(!s.pinching);
    assert_eq!(s.start_scale, 1.5);
    assert_eq!(s.current_scale, 1.5);
    assert_eq!(s.start_distance, 0.0);
}

#[test]
fn store_fingers_accepts_exactly_two() {
    let mut s = InputState::default();
    assert!(s.store_fingers(&pair((1.0, 2.0), (3.0, 4.0))));
    assert_eq!(s.finger1, Point::new(1.0, 2.0));
    assert_eq!(s.finger2, Point::new(3.0, 4.0));
}

#[test]
fn store_fingers_rejects_one_and_three() {
    let mut s = InputState::default();
    assert!(!s.store_fingers(&[Point::new(5.0, 5.0)]));
    let three = [Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 3.0)];
    assert!(!s.store_fingers(&three));
    assert_eq!(s, InputState::default());
}

#[test]
fn begin_records_distance_and_anchor() {
    let mut s = InputState::default();
    s.store_fingers(&pair((0.0, 0.0), (60.0, 80.0)));
    s.begin(ScrollOffset::new(10.0, 20.0));
    assert!(s.pinching);
    assert_eq!(s.start_distance, 100.0);
    assert_eq!(s.scroll_anchor, ScrollOffset::new(10.0, 20.0));
}

#[test]
fn reset_carries_scale_and_zeroes_gesture() {
    let mut s = InputState::default();
    s.store_fingers(&pair((0.0, 0.0), (100.0, 0.0)));
    s.begin(ScrollOffset::default());
    s.current_scale = 1.8;
    s.reset();
    assert!(!s.pinching);
    assert_eq!(s.start_distance, 0.0);
    assert_eq!(s.start_scale, 1.8);
    assert_eq!(s.finger1, Point::default());
    assert_eq!(s.finger2, Point::default());
}
