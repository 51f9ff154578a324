use crate::constants::{ACTIVE_CLASS, TRANSFORM_PROPERTY};
use lens_core::FrameOutput;
use std::cell::Cell;
use web_sys as web;

/// Writes frame output into the lens markup.
pub struct Renderer {
    cursor: web::HtmlElement,
    images: Vec<web::HtmlElement>,
    active: Cell<Option<usize>>,
}

impl Renderer {
    pub fn new(cursor: web::HtmlElement, images: Vec<web::HtmlElement>) -> Self {
        Self {
            cursor,
            images,
            active: Cell::new(None),
        }
    }

    pub fn apply(&self, out: &FrameOutput) {
        if let Some(t) = &out.transforms {
            _ = self
                .cursor
                .style()
                .set_property(TRANSFORM_PROPERTY, &t.lens.to_string());
            // Every image gets the same transform; only the active one is visible.
            let image_css = t.image.to_string();
            for img in &self.images {
                _ = img.style().set_property(TRANSFORM_PROPERTY, &image_css);
            }
        }
        self.set_active(out.hover);
    }

    fn set_active(&self, hover: Option<usize>) {
        let prev = self.active.get();
        if prev == hover {
            return;
        }
        if let Some(img) = prev.and_then(|i| self.images.get(i)) {
            _ = img.class_list().remove_1(ACTIVE_CLASS);
        }
        if let Some(img) = hover.and_then(|i| self.images.get(i)) {
            _ = img.class_list().add_1(ACTIVE_CLASS);
        }
        self.active.set(hover);
    }
}
