// Host-side tests for constants and their relationships.
// The DOM contract lives in the wasm-only crate, so we include it directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn zoom_constants_are_consistent() {
    assert!(MIN_SCALE > 0.0);
    assert!(MAX_SCALE > MIN_SCALE);
    assert!(CARD_MAX_SCALE > MIN_SCALE && CARD_MAX_SCALE <= MAX_SCALE);
    assert!(ZOOM_STEP > 1.0);

    // One zoom step out of min must land beyond the settle threshold,
    // otherwise zoom-in would be undone by the next zoom-out.
    assert!(MIN_SCALE * ZOOM_STEP > MIN_SCALE * RECENTER_TOLERANCE);
    assert!(RECENTER_TOLERANCE >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_constants_are_within_reasonable_bounds() {
    // Fractions
    assert!(DRAG_RESISTANCE > 0.0 && DRAG_RESISTANCE <= 1.0);
    assert!(PINCH_SENSITIVITY > 0.0 && PINCH_SENSITIVITY <= 1.0);

    // Distances and times
    assert!(PINCH_MIN_DISTANCE > 0.0);
    assert!(CARD_SWIPE_MIN_DISTANCE > 0.0 && CARD_SWIPE_MIN_DISTANCE <= SWIPE_MIN_DISTANCE);
    assert!(SWIPE_MAX_DURATION_MS > DOUBLE_TAP_WINDOW_MS);
    assert!(DOUBLE_TAP_SLOP < SWIPE_MIN_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_constants_are_stable() {
    assert!(SPRING_OMEGA > 0.0);
    assert!(SPRING_DAMPING_RATIO >= 1.0, "release spring must not oscillate");
    // Semi-implicit Euler stays stable while omega * dt is well below 2.
    assert!(SPRING_OMEGA * SPRING_MAX_DT_SEC < 1.0);
    assert!(SPRING_SETTLE_DISTANCE > 0.0 && SPRING_SETTLE_SPEED > 0.0);
}

#[test]
fn selectors_are_attribute_selectors() {
    for sel in [
        VIEWER_ROOT_SELECTOR,
        VIEWPORT_SELECTOR,
        SLIDE_SELECTOR,
        CONTENT_SELECTOR,
        CLOSE_SELECTOR,
        PREV_SELECTOR,
        NEXT_SELECTOR,
        ZOOM_IN_SELECTOR,
        ZOOM_OUT_SELECTOR,
        ZOOM_RESET_SELECTOR,
        CARD_SELECTOR,
        CARD_LABEL_SELECTOR,
    ] {
        assert!(sel.starts_with("[data-") && sel.ends_with(']'), "{sel}");
    }
    for attr in [OPEN_ATTR, TARGET_ATTR, KIND_ATTR, SRC_ATTR, PRESET_ATTR, MOUNTED_ATTR] {
        assert!(attr.starts_with("data-"), "{attr}");
    }
}
