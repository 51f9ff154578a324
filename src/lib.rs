#![cfg(target_arch = "wasm32")]
use lens_core::{default_links, AssetResolver, LensController, ViewportSize};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod render;

use config::WebConfig;
use events::{EventListener, SharedController};

/// A live menu: the controller, its frame loop and every DOM subscription.
/// Dropping it tears all of them down together.
struct MountedMenu {
    controller: SharedController,
    listeners: Vec<EventListener>,
    main: web::Element,
}

impl MountedMenu {
    fn mount(root: &web::Element) -> anyhow::Result<Self> {
        let (window, document) =
            dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

        let cfg = WebConfig::from_attributes(|name| root.get_attribute(name));
        let links = default_links();
        let assets = AssetResolver::new(cfg.asset_base.as_str());
        let elements = dom::build_menu(&document, root, &links, &assets)?;

        let (w, h) = events::window_size(&window);
        let controller: SharedController = Rc::new(RefCell::new(LensController::new(
            cfg.lens,
            ViewportSize::new(w, h),
            links.len(),
            frame::RafScheduler::new(window.clone()),
        )?));

        let mut listeners = vec![
            events::wire_resize(&window, &controller)?,
            events::wire_pointer_move(&window, &controller)?,
        ];
        listeners.extend(events::wire_link_hover(&elements.items, &controller)?);

        let renderer = render::Renderer::new(elements.cursor, elements.images);
        frame::start_loop(&controller, renderer);

        Ok(Self {
            controller,
            listeners,
            main: elements.main,
        })
    }

    fn hover_index(&self) -> i32 {
        self.controller.borrow().hover_state().as_i32()
    }
}

impl Drop for MountedMenu {
    fn drop(&mut self) {
        self.controller.borrow_mut().unmount();
        self.listeners.clear();
        self.main.remove();
    }
}

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<MountedMenu>> = const { RefCell::new(None) };
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

/// Handle for a menu mounted from JS.
#[wasm_bindgen]
pub struct LensMenu {
    inner: Option<MountedMenu>,
}

#[wasm_bindgen]
impl LensMenu {
    /// Build the menu inside the element with id `root_id` and start tracking.
    #[wasm_bindgen(constructor)]
    pub fn new(root_id: &str) -> Result<LensMenu, JsValue> {
        let (_, document) = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let root = document
            .get_element_by_id(root_id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{}", root_id)))?;
        let inner = MountedMenu::mount(&root).map_err(to_js)?;
        Ok(LensMenu { inner: Some(inner) })
    }

    /// Stop the frame loop, remove every listener and the menu markup.
    pub fn unmount(&mut self) {
        self.inner.take();
    }

    /// Hovered link index, or -1.
    #[wasm_bindgen(getter, js_name = hoverIndex)]
    pub fn hover_index(&self) -> i32 {
        self.inner.as_ref().map_or(-1, |m| m.hover_index())
    }
}

/// Tear down the menu mounted automatically at start-up.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(menu) = AUTO_MOUNTED.with(|m| m.borrow_mut().take()) {
        drop(menu);
        log::info!("auto-mounted menu released");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lens-menu starting");

    let Some(root) = dom::window_document()
        .and_then(|(_, d)| d.get_element_by_id(constants::ROOT_ELEMENT_ID))
    else {
        log::info!(
            "no #{} element; waiting for `new LensMenu(id)`",
            constants::ROOT_ELEMENT_ID
        );
        return Ok(());
    };
    match MountedMenu::mount(&root) {
        Ok(menu) => AUTO_MOUNTED.with(|m| *m.borrow_mut() = Some(menu)),
        Err(e) => log::error!("mount error: {:?}", e),
    }
    Ok(())
}
