// requestAnimationFrame loop that can be started, stopped and restarted.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

#[derive(Default)]
struct LoopState {
    running: Cell<bool>,
    frame_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
    fn schedule(&self, window: &Window) {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.frame_id.set(Some(id)),
            Err(e) => {
                warn!("requestAnimationFrame failed, stopping zoom loop: {e:?}");
                self.frame_id.set(None);
                self.running.set(false);
            }
        }
    }
}

pub(crate) struct FrameLoop {
    window: Window,
    state: Rc<LoopState>,
}

impl FrameLoop {
    /// Build a stopped loop that calls `on_frame` once per display frame.
    pub(crate) fn new(window: Window, mut on_frame: impl FnMut() + 'static) -> Self {
        let state = Rc::new(LoopState::default());
        let weak: Weak<LoopState> = Rc::downgrade(&state);
        let window_loop = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            if !state.running.get() {
                return;
            }
            // Next frame is requested before this one does any work.
            state.schedule(&window_loop);
            on_frame();
        }) as Box<dyn FnMut()>);
        *state.callback.borrow_mut() = Some(callback);
        Self { window, state }
    }

    pub(crate) fn start(&self) {
        if self.state.running.replace(true) {
            return;
        }
        debug!("zoom loop started");
        self.state.schedule(&self.window);
    }

    pub(crate) fn stop(&self) {
        if !self.state.running.replace(false) {
            return;
        }
        if let Some(id) = self.state.frame_id.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                warn!("cancelAnimationFrame failed: {e:?}");
            }
        }
        debug!("zoom loop stopped");
    }

    pub(crate) fn is_running(&self) -> bool {
        self.state.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        self.state.callback.borrow_mut().take();
    }
}
