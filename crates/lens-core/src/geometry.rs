use glam::DVec2;

/// Pointer coordinates in viewport pixel space.
pub type Position = DVec2;

/// Current window dimensions in pixels. Components are never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    /// Negative components clamp to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// True when positions can be normalized against this size.
    #[inline]
    pub fn is_renderable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Position scaled into [0, 1] per axis (unclamped outside the viewport).
    /// Callers must check [`is_renderable`](Self::is_renderable) first.
    #[inline]
    pub fn normalize(&self, p: Position) -> DVec2 {
        DVec2::new(p.x / self.width, p.y / self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_dimensions_clamp_to_zero() {
        let v = ViewportSize::new(-20.0, 300.0);
        assert_eq!(v.width, 0.0);
        assert_eq!(v.height, 300.0);
        assert!(!v.is_renderable());
    }

    #[test]
    fn normalize_maps_corners() {
        let v = ViewportSize::new(800.0, 600.0);
        assert_eq!(v.normalize(DVec2::new(800.0, 600.0)), DVec2::ONE);
        assert_eq!(v.normalize(DVec2::new(400.0, 150.0)), DVec2::new(0.5, 0.25));
    }
}
