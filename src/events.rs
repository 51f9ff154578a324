use crate::constants::*;
use crate::frame::RafScheduler;
use lens_core::LensController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedController = Rc<RefCell<LensController<RafScheduler>>>;

/// A registered DOM listener. Dropping it removes the same closure that was
/// added, so the subscription lives exactly as long as this value.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[inline]
pub fn window_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

pub fn wire_pointer_move(
    window: &web::Window,
    controller: &SharedController,
) -> anyhow::Result<EventListener> {
    let controller = controller.clone();
    EventListener::new(window, EVENT_POINTER_MOVE, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if !ev.is_primary() {
            return;
        }
        controller
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f64, ev.client_y() as f64);
    })
}

pub fn wire_resize(
    window: &web::Window,
    controller: &SharedController,
) -> anyhow::Result<EventListener> {
    let controller = controller.clone();
    let wnd = window.clone();
    EventListener::new(window, EVENT_RESIZE, move |_ev: web::Event| {
        let (w, h) = window_size(&wnd);
        controller.borrow_mut().on_resize(w, h);
    })
}

/// Enter/leave listeners for every link item, in link order.
pub fn wire_link_hover(
    items: &[web::Element],
    controller: &SharedController,
) -> anyhow::Result<Vec<EventListener>> {
    let mut listeners = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.iter().enumerate() {
        let enter = controller.clone();
        listeners.push(EventListener::new(item, EVENT_LINK_ENTER, move |_| {
            enter.borrow_mut().on_link_enter(i);
        })?);
        let leave = controller.clone();
        listeners.push(EventListener::new(item, EVENT_LINK_LEAVE, move |_| {
            leave.borrow_mut().on_link_leave();
        })?);
    }
    Ok(listeners)
}
