//! Browser binding for the zoom controller.
//!
//! [`PinchZoom`] attaches a [`GestureZoomController`] to an `HtmlElement`:
//! touch listeners feed it contact points and a `requestAnimationFrame` loop
//! renders it. Each instance owns its own state, so any number of elements
//! can be zoomable on one page. Dropping the handle (or calling `free()` from
//! JavaScript) disposes it.

mod frame_loop;
mod listeners;
mod target;

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::config::ZoomOptions;
use crate::consts::INITIAL_SCALE;
use crate::controller::GestureZoomController;
use crate::error::ZoomError;

pub use target::DomTarget;

use frame_loop::FrameLoop;
use listeners::{SharedController, TouchListeners};

#[wasm_bindgen]
pub struct PinchZoom {
    controller: SharedController,
    listeners: Option<TouchListeners>,
    frame_loop: Option<FrameLoop>,
}

impl PinchZoom {
    /// Make `element` pinch-zoomable inside its parent and start rendering.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad `options`, `NoParent` if the element
    /// has no parent element, `NoWindow` outside a browser, or `Js` if a
    /// listener cannot be registered.
    pub fn attach(element: HtmlElement, options: ZoomOptions) -> Result<Self, ZoomError> {
        Self::attach_at(element, options, INITIAL_SCALE)
    }

    /// Attach with the first pinch growing from `scale`, typically the
    /// [`PinchZoom::current_scale`] of a handle being replaced. If `scale`
    /// falls outside the new bounds the clamped transform is written at once
    /// so the element never shows a scale the controller does not hold.
    ///
    /// # Errors
    ///
    /// Same as [`PinchZoom::attach`].
    pub fn attach_at(
        element: HtmlElement,
        options: ZoomOptions,
        scale: f64,
    ) -> Result<Self, ZoomError> {
        let window = web_sys::window().ok_or(ZoomError::NoWindow)?;
        let target = DomTarget::new(element.clone())?;
        let controller = GestureZoomController::starting_at(target, options, scale)?;
        if controller.current_scale() != scale {
            controller.sync_transform();
        }
        let controller: SharedController = Rc::new(RefCell::new(controller));

        let listeners = TouchListeners::attach(&element, &controller)?;
        let frame_loop = {
            let controller = controller.clone();
            FrameLoop::new(window, move || {
                controller.borrow_mut().render_frame();
            })
        };
        frame_loop.start();
        debug!(
            "pinch zoom attached: scale range {}..={}, starting at {:.3}",
            options.min_scale,
            options.max_scale,
            controller.borrow().current_scale()
        );
        Ok(Self { controller, listeners: Some(listeners), frame_loop: Some(frame_loop) })
    }

    #[must_use]
    pub fn options(&self) -> ZoomOptions {
        *self.controller.borrow().options()
    }
}

#[wasm_bindgen]
impl PinchZoom {
    /// JS constructor: `new PinchZoom(element, { minScale, maxScale })`.
    ///
    /// # Errors
    ///
    /// Throws a JS `Error` carrying the [`ZoomError`] message.
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlElement, options: JsValue) -> Result<PinchZoom, JsValue> {
        let options = ZoomOptions::from_js(&options)?;
        Ok(Self::attach(element, options)?)
    }

    /// Resume rendering after `stop()`. No-op once disposed.
    pub fn start(&self) {
        if let Some(frame_loop) = &self.frame_loop {
            frame_loop.start();
        }
    }

    /// Halt rendering; touch input is still recorded.
    pub fn stop(&self) {
        if let Some(frame_loop) = &self.frame_loop {
            frame_loop.stop();
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frame_loop.as_ref().is_some_and(FrameLoop::is_running)
    }

    #[wasm_bindgen(js_name = isPinching)]
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.controller.borrow().is_pinching()
    }

    #[wasm_bindgen(js_name = currentScale)]
    #[must_use]
    pub fn current_scale(&self) -> f64 {
        self.controller.borrow().current_scale()
    }

    /// Stop the loop and remove every listener. The element keeps its last
    /// transform. Safe to call more than once.
    pub fn dispose(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.stop();
        }
        if let Some(listeners) = self.listeners.take() {
            listeners.detach();
            debug!("pinch zoom disposed");
        }
    }
}

impl Drop for PinchZoom {
    fn drop(&mut self) {
        self.dispose();
    }
}
