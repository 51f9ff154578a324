use crate::constants::*;
use crate::error::LensError;

/// Tunable parameters for smoothing and transform mapping.
///
/// `Default` reproduces the stock menu. Half-ranges are symmetric around the
/// viewport centre, e.g. a `lens_travel_x_pct` of 90 spans -90%..90%.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LensConfig {
    pub smoothing_alpha: f64,
    pub lens_travel_x_pct: f64,
    pub lens_travel_y_pct: f64,
    pub image_scale_x_span: f64,
    pub image_scale_y_span: f64,
    pub image_rotate_x_deg: f64,
    pub image_rotate_y_deg: f64,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            smoothing_alpha: SMOOTHING_ALPHA,
            lens_travel_x_pct: LENS_TRAVEL_X_PCT,
            lens_travel_y_pct: LENS_TRAVEL_Y_PCT,
            image_scale_x_span: IMAGE_SCALE_X_SPAN,
            image_scale_y_span: IMAGE_SCALE_Y_SPAN,
            image_rotate_x_deg: IMAGE_ROTATE_X_DEG,
            image_rotate_y_deg: IMAGE_ROTATE_Y_DEG,
        }
    }
}

impl LensConfig {
    /// Copy of `self` with a different smoothing factor.
    pub fn with_smoothing(self, alpha: f64) -> Self {
        Self {
            smoothing_alpha: alpha,
            ..self
        }
    }

    /// Alpha must lie in (0, 1]; every other value must be finite and >= 0.
    pub fn validate(&self) -> Result<(), LensError> {
        let a = self.smoothing_alpha;
        if !(a.is_finite() && a > 0.0 && a <= 1.0) {
            return Err(LensError::InvalidConfig {
                field: "smoothing_alpha",
                value: a,
            });
        }
        let ranges = [
            ("lens_travel_x_pct", self.lens_travel_x_pct),
            ("lens_travel_y_pct", self.lens_travel_y_pct),
            ("image_scale_x_span", self.image_scale_x_span),
            ("image_scale_y_span", self.image_scale_y_span),
            ("image_rotate_x_deg", self.image_rotate_x_deg),
            ("image_rotate_y_deg", self.image_rotate_y_deg),
        ];
        for (field, value) in ranges {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LensError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(LensConfig::default().validate().is_ok());
    }

    #[test]
    fn alpha_outside_unit_interval_is_rejected() {
        for alpha in [0.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = LensConfig::default().with_smoothing(alpha).validate();
            assert!(
                matches!(
                    err,
                    Err(LensError::InvalidConfig {
                        field: "smoothing_alpha",
                        ..
                    })
                ),
                "alpha {alpha} accepted"
            );
        }
        assert!(LensConfig::default().with_smoothing(1.0).validate().is_ok());
    }

    #[test]
    fn negative_range_names_the_field() {
        let cfg = LensConfig {
            image_rotate_y_deg: -1.0,
            ..LensConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(LensError::InvalidConfig {
                field: "image_rotate_y_deg",
                value: -1.0
            })
        );
    }
}
