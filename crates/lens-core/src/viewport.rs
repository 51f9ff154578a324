use crate::geometry::ViewportSize;

/// Last observed window size.
#[derive(Clone, Debug, Default)]
pub struct ViewportTracker {
    size: ViewportSize,
}

impl ViewportTracker {
    pub fn new(size: ViewportSize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> ViewportSize {
        self.size
    }

    pub fn is_renderable(&self) -> bool {
        self.size.is_renderable()
    }

    /// Replace the stored size. Returns whether it changed.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if !(width.is_finite() && height.is_finite()) {
            log::warn!("[viewport] ignoring non-finite size {}x{}", width, height);
            return false;
        }
        let next = ViewportSize::new(width, height);
        if next == self.size {
            return false;
        }
        log::debug!("[viewport] {}x{}", next.width, next.height);
        self.size = next;
        true
    }
}
