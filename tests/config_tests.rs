// Host-side tests for reading WebConfig from root element attributes.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

use config::WebConfig;
use lens_core::{LensConfig, DEFAULT_ASSET_BASE};
use std::collections::HashMap;

fn from(pairs: &[(&str, &str)]) -> WebConfig {
    let attrs: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    WebConfig::from_attributes(|name| attrs.get(name).cloned())
}

#[test]
fn missing_attributes_use_defaults() {
    let cfg = from(&[]);
    assert_eq!(cfg.asset_base, DEFAULT_ASSET_BASE);
    assert_eq!(cfg.lens, LensConfig::default());
}

#[test]
fn asset_base_is_trimmed_and_blank_ignored() {
    assert_eq!(
        from(&[("data-asset-base", " /static/img ")]).asset_base,
        "/static/img"
    );
    assert_eq!(
        from(&[("data-asset-base", "   ")]).asset_base,
        DEFAULT_ASSET_BASE
    );
}

#[test]
fn valid_smoothing_overrides_alpha() {
    let cfg = from(&[("data-smoothing", "0.35")]);
    assert_eq!(cfg.lens.smoothing_alpha, 0.35);
    assert_eq!(cfg.lens.lens_travel_x_pct, LensConfig::default().lens_travel_x_pct);
}

#[test]
fn bad_smoothing_falls_back_to_default() {
    for raw in ["fast", "0", "1.5", "-0.2", "NaN"] {
        let cfg = from(&[("data-smoothing", raw)]);
        assert_eq!(
            cfg.lens.smoothing_alpha,
            LensConfig::default().smoothing_alpha,
            "accepted {raw:?}"
        );
    }
}
