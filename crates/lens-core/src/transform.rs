//! Pointer position → CSS transform mapping.
//!
//! Both mappings normalize the smoothed pointer position against the
//! viewport and are pure: the same inputs always give bit-identical output.
//! A viewport with zero area yields `None` rather than dividing by zero; the
//! caller keeps whatever it rendered last.

use crate::config::LensConfig;
use crate::constants::IMAGE_CENTER_OFFSET_PCT;
use crate::geometry::{Position, ViewportSize};
use std::fmt;

/// Translation of the lens container, in percent of its own box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LensTransform {
    pub translate_x_pct: f64,
    pub translate_y_pct: f64,
}

/// Scale and 3D rotation shared by every image inside the lens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotate_x_deg: f64,
    /// Rendered negated: `rotateY(-rotate_y_deg)`.
    pub rotate_y_deg: f64,
}

/// Both transforms for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transforms {
    pub lens: LensTransform,
    pub image: ImageTransform,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TransformMapper {
    config: LensConfig,
}

impl TransformMapper {
    pub fn new(config: LensConfig) -> Self {
        Self { config }
    }

    pub fn lens(&self, position: Position, viewport: ViewportSize) -> Option<LensTransform> {
        if !viewport.is_renderable() {
            return None;
        }
        let n = viewport.normalize(position);
        let tx = self.config.lens_travel_x_pct;
        let ty = self.config.lens_travel_y_pct;
        Some(LensTransform {
            translate_x_pct: n.x * (tx * 2.0) - tx,
            translate_y_pct: n.y * (ty * 2.0) - ty,
        })
    }

    pub fn image(&self, position: Position, viewport: ViewportSize) -> Option<ImageTransform> {
        if !viewport.is_renderable() {
            return None;
        }
        let n = viewport.normalize(position);
        let sx = self.config.image_scale_x_span;
        let sy = self.config.image_scale_y_span;
        let rx = self.config.image_rotate_x_deg;
        let ry = self.config.image_rotate_y_deg;
        // Scale follows the horizontal position on both axes.
        Some(ImageTransform {
            scale_x: 1.0 + (n.x * (sx * 2.0) - sx).abs(),
            scale_y: 1.0 + (n.x * (sy * 2.0) - sy).abs(),
            rotate_x_deg: -rx + n.y * (rx * 2.0),
            rotate_y_deg: -ry + n.x * (ry * 2.0),
        })
    }

    pub fn map(&self, position: Position, viewport: ViewportSize) -> Option<Transforms> {
        Some(Transforms {
            lens: self.lens(position, viewport)?,
            image: self.image(position, viewport)?,
        })
    }
}

/// Lens transform with the stock tuning.
pub fn lens_transform(position: Position, viewport: ViewportSize) -> Option<LensTransform> {
    TransformMapper::default().lens(position, viewport)
}

/// Image transform with the stock tuning.
pub fn image_transform(position: Position, viewport: ViewportSize) -> Option<ImageTransform> {
    TransformMapper::default().image(position, viewport)
}

// -0.0 + 0.0 == +0.0, so CSS never sees "-0".
#[inline]
fn css_num(v: f64) -> f64 {
    v + 0.0
}

impl fmt::Display for LensTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}%, {}%)",
            css_num(self.translate_x_pct),
            css_num(self.translate_y_pct)
        )
    }
}

impl fmt::Display for ImageTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate3d({c}%, {c}%, 0) scale3d({}, {}, 1) rotateX({}deg) rotateY({}deg)",
            css_num(self.scale_x),
            css_num(self.scale_y),
            css_num(self.rotate_x_deg),
            css_num(-self.rotate_y_deg),
            c = IMAGE_CENTER_OFFSET_PCT,
        )
    }
}
