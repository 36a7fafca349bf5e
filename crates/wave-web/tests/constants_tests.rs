// Host-side tests for the page wiring constants.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(TRANSITION_DELAY_MS > 0);
    assert!(ACCORDION_CLOSE_MS > 0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
}

#[test]
fn selectors_are_css_like() {
    for sel in REVEAL_SELECTORS {
        assert!(sel.starts_with('.'), "{sel}");
    }
    assert!(RIPPLE_SELECTOR.split(',').all(|s| s.trim().starts_with('.')));
    assert!(ACCORDION_SELECTOR.starts_with('.'));
}

#[test]
fn ids_and_classes_have_no_prefix() {
    for name in [
        WAVE_CANVAS_ID,
        TEXT_CANVAS_ID,
        ACCORDION_PANEL_ID,
        OVERLAY_CLASS,
        OVERLAY_HIDDEN_CLASS,
        REVEAL_CLASS,
        REVEAL_VISIBLE_CLASS,
        RIPPLE_CLASS,
    ] {
        assert!(!name.is_empty());
        assert!(!name.starts_with('#') && !name.starts_with('.'), "{name}");
    }
    assert!(PRESET_ATTR.starts_with("data-") && LABEL_ATTR.starts_with("data-"));
}
