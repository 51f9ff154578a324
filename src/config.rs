use crate::constants::{ASSET_BASE_ATTR, SMOOTHING_ATTR};
use lens_core::{LensConfig, DEFAULT_ASSET_BASE};

/// Per-mount settings read from the root element's `data-*` attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct WebConfig {
    pub asset_base: String,
    pub lens: LensConfig,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            lens: LensConfig::default(),
        }
    }
}

impl WebConfig {
    /// Build from an attribute lookup. Missing attributes keep their
    /// defaults; a smoothing value that does not parse or validate is
    /// replaced by the default with a warning.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(base) = attr(ASSET_BASE_ATTR) {
            let base = base.trim();
            if !base.is_empty() {
                cfg.asset_base = base.to_string();
            }
        }
        if let Some(raw) = attr(SMOOTHING_ATTR) {
            match raw.trim().parse::<f64>() {
                Ok(alpha) => {
                    let lens = cfg.lens.with_smoothing(alpha);
                    match lens.validate() {
                        Ok(()) => cfg.lens = lens,
                        Err(e) => log::warn!("[config] {}; using default smoothing", e),
                    }
                }
                Err(_) => log::warn!("[config] unparsable {}={:?}", SMOOTHING_ATTR, raw),
            }
        }
        cfg
    }
}
