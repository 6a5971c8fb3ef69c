// touchstart / touchmove / touchend / touchcancel wiring for one element.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement, TouchEvent};

use crate::controller::{GestureZoomController, TouchResponse};
use crate::error::ZoomError;
use crate::geometry::Point;

use super::target::DomTarget;

pub(crate) type SharedController = Rc<RefCell<GestureZoomController<DomTarget>>>;

type TouchCallback = Closure<dyn FnMut(TouchEvent)>;

pub(crate) struct TouchListeners {
    element: HtmlElement,
    start: TouchCallback,
    moved: TouchCallback,
    end: TouchCallback,
}

impl TouchListeners {
    /// Register all four touch listeners on `element`.
    ///
    /// Listeners are non-passive so `preventDefault` can stop native
    /// scrolling and zooming once a pinch is recognized.
    pub(crate) fn attach(
        element: &HtmlElement,
        controller: &SharedController,
    ) -> Result<Self, ZoomError> {
        let start = {
            let controller = controller.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let touches = contact_points(&e);
                let response = controller.borrow_mut().on_touch_start(&touches);
                consume(&e, response);
            }) as Box<dyn FnMut(_)>)
        };
        let moved = {
            let controller = controller.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let touches = contact_points(&e);
                let response = controller.borrow_mut().on_touch_move(&touches);
                consume(&e, response);
            }) as Box<dyn FnMut(_)>)
        };
        let end = {
            let controller = controller.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let response = controller.borrow_mut().on_touch_end();
                consume(&e, response);
            }) as Box<dyn FnMut(_)>)
        };

        let listeners = Self { element: element.clone(), start, moved, end };
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        for (name, callback) in listeners.bindings() {
            let added = element.add_event_listener_with_callback_and_add_event_listener_options(
                name,
                callback.as_ref().unchecked_ref(),
                &options,
            );
            if let Err(e) = added {
                // Closures are dropped on return; nothing may stay registered.
                listeners.detach();
                return Err(ZoomError::from_js(&e));
            }
        }
        Ok(listeners)
    }

    pub(crate) fn detach(&self) {
        for (name, callback) in self.bindings() {
            if let Err(e) = self
                .element
                .remove_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
            {
                warn!("failed to remove {name} listener: {e:?}");
            }
        }
    }

    fn bindings(&self) -> [(&'static str, &TouchCallback); 4] {
        [
            ("touchstart", &self.start),
            ("touchmove", &self.moved),
            ("touchend", &self.end),
            ("touchcancel", &self.end),
        ]
    }
}

fn contact_points(event: &TouchEvent) -> Vec<Point> {
    let touches = event.touches();
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect()
}

fn consume(event: &TouchEvent, response: TouchResponse) {
    if response.is_consumed() {
        event.prevent_default();
        event.stop_propagation();
    }
}
