// Host-side tests for DOM constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn link_events_are_a_pointer_enter_leave_pair() {
    assert_eq!(EVENT_LINK_ENTER, "pointerenter");
    assert_eq!(EVENT_LINK_LEAVE, "pointerleave");
    assert_ne!(EVENT_LINK_ENTER, EVENT_POINTER_MOVE);
}

#[test]
fn class_names_are_distinct_and_css_safe() {
    let names = [CURSOR_CLASS, MENU_CLASS, ACTIVE_CLASS];
    for (i, a) in names.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        for b in &names[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn config_attributes_are_data_attributes() {
    assert!(ASSET_BASE_ATTR.starts_with("data-"));
    assert!(SMOOTHING_ATTR.starts_with("data-"));
}
