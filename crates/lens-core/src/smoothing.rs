use crate::constants::SMOOTHING_ALPHA;
use crate::geometry::Position;

/// First-order low-pass filter over pointer positions.
///
/// Each [`step`](Smoother::step) moves the value a fixed fraction `alpha` of
/// the way toward the target, so with a stationary target the remaining
/// distance shrinks by `(1 - alpha)` per step.
#[derive(Clone, Debug)]
pub struct Smoother {
    alpha: f64,
    value: Position,
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new(SMOOTHING_ALPHA)
    }
}

impl Smoother {
    pub fn new(alpha: f64) -> Self {
        Self::starting_at(alpha, Position::ZERO)
    }

    pub fn starting_at(alpha: f64, value: Position) -> Self {
        debug_assert!(alpha > 0.0 && alpha <= 1.0, "alpha out of range: {alpha}");
        Self { alpha, value }
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[inline]
    pub fn value(&self) -> Position {
        self.value
    }

    /// Advance one frame toward `target` and return the new value.
    pub fn step(&mut self, target: Position) -> Position {
        if !target.is_finite() {
            return self.value;
        }
        // value + (target - value) * alpha
        self.value = self.value.lerp(target, self.alpha);
        self.value
    }
}
