//! Browser tests: `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use pinch_zoom::dom::DomTarget;
use pinch_zoom::geometry::Point;
use pinch_zoom::{GestureZoomController, PinchZoom, ZoomError, ZoomOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn div(style: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    el.style().set_css_text(style);
    el
}

/// A 200x100 scroll viewport holding a 400x200 block; returns the block.
fn mounted_content() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let viewport = div("overflow:auto; width:200px; height:100px;");
    let content = div("width:400px; height:200px;");
    viewport.append_child(&content).unwrap();
    document.body().unwrap().append_child(&viewport).unwrap();
    content
}

#[wasm_bindgen_test]
fn attach_requires_a_parent() {
    let orphan = div("width:10px; height:10px;");
    let result = PinchZoom::attach(orphan, ZoomOptions::default());
    assert!(matches!(result, Err(ZoomError::NoParent)));
}

#[wasm_bindgen_test]
fn attach_starts_and_dispose_stops_the_loop() {
    let mut zoom = PinchZoom::attach(mounted_content(), ZoomOptions::default()).unwrap();
    assert!(zoom.is_running());
    zoom.stop();
    assert!(!zoom.is_running());
    zoom.start();
    assert!(zoom.is_running());
    zoom.dispose();
    assert!(!zoom.is_running());
    zoom.dispose();
}

#[wasm_bindgen_test]
fn js_options_merge_over_defaults() {
    let options = js_sys::JSON::parse(r#"{"maxScale": 4, "unknown": 1}"#).unwrap();
    let zoom = PinchZoom::new(mounted_content(), options).unwrap();
    assert_eq!(zoom.options().max_scale, 4.0);
    assert_eq!(zoom.options().min_scale, 0.5);
    assert_eq!(zoom.current_scale(), 1.0);
}

#[wasm_bindgen_test]
fn inverted_js_options_throw() {
    let options = js_sys::JSON::parse(r#"{"minScale": 2, "maxScale": 1}"#).unwrap();
    assert!(PinchZoom::new(mounted_content(), options).is_err());
}

#[wasm_bindgen_test]
fn undefined_options_use_defaults() {
    let zoom = PinchZoom::new(mounted_content(), JsValue::UNDEFINED).unwrap();
    assert_eq!(zoom.options(), ZoomOptions::default());
}

#[wasm_bindgen_test]
fn frame_writes_css_transform_and_scroll() {
    let content = mounted_content();
    let target = DomTarget::new(content.clone()).unwrap();
    let mut controller = GestureZoomController::new(target, ZoomOptions::default()).unwrap();

    controller.on_touch_start(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
    controller.on_touch_move(&[Point::new(0.0, 0.0), Point::new(200.0, 0.0)]);
    controller.render_frame().unwrap();

    let transform = content.style().get_property_value("transform").unwrap();
    assert!(transform.contains("scale(2)"), "unexpected transform {transform}");
    assert!(transform.contains("translate(100px, 50px)"), "unexpected transform {transform}");

    let viewport = content.parent_element().unwrap();
    assert_eq!(viewport.scroll_left(), 100);
    assert_eq!(viewport.scroll_top(), 50);
}

#[wasm_bindgen_test]
fn attach_at_resumes_and_clamps_carried_scale() {
    let content = mounted_content();
    let zoom = PinchZoom::attach_at(content.clone(), ZoomOptions::new(0.5, 2.0), 2.5).unwrap();
    assert_eq!(zoom.current_scale(), 2.0);
    let transform = content.style().get_property_value("transform").unwrap();
    assert!(transform.contains("scale(2)"), "unexpected transform {transform}");
}

#[wasm_bindgen_test]
fn attach_at_in_bounds_leaves_transform_alone() {
    let content = mounted_content();
    let zoom = PinchZoom::attach_at(content.clone(), ZoomOptions::default(), 2.5).unwrap();
    assert_eq!(zoom.current_scale(), 2.5);
    assert_eq!(content.style().get_property_value("transform").unwrap(), "");
}
