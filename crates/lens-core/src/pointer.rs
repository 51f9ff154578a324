use crate::geometry::Position;

/// Raw (unsmoothed) pointer position, as last reported by the platform.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    position: Position,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Store a new sample. Non-finite coordinates are dropped.
    pub fn record(&mut self, x: f64, y: f64) -> bool {
        let p = Position::new(x, y);
        if !p.is_finite() {
            log::warn!("[pointer] ignoring non-finite sample ({}, {})", x, y);
            return false;
        }
        self.position = p;
        true
    }
}
