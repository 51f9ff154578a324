use crate::events::SharedController;
use crate::render::Renderer;
use lens_core::{FrameHandle, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame`-backed scheduler. The callback is installed once
/// after the controller exists and is reused for every request.
pub struct RafScheduler {
    window: web::Window,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn install(&self, callback: FrameCallback) {
        *self.callback.borrow_mut() = Some(callback);
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.callback.borrow();
        let Some(cb) = slot.as_ref() else {
            log::error!("[frame] no frame callback installed");
            return None;
        };
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// Install the per-frame callback and start the loop.
///
/// The callback only holds a weak reference to the controller; the
/// controller owns the scheduler, which owns the callback.
pub fn start_loop(controller: &SharedController, renderer: Renderer) {
    let weak = Rc::downgrade(controller);
    let callback = Closure::wrap(Box::new(move |_ts: f64| {
        let Some(controller) = weak.upgrade() else {
            return;
        };
        let output = controller.borrow_mut().on_frame();
        if let Some(out) = output {
            renderer.apply(&out);
        }
    }) as Box<dyn FnMut(f64)>);

    let mut ctrl = controller.borrow_mut();
    ctrl.scheduler().install(callback);
    ctrl.mount();
}
