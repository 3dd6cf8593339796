// Host-side tests for pan boundary measurement and rubber-band math.

mod common;

use common::FixedGeometry;
use folio_core::geometry::{resist_axis, unresist_axis};
use folio_core::*;
use glam::Vec2;

fn fixed(vw: f32, vh: f32, cw: f32, ch: f32) -> FixedGeometry {
    FixedGeometry {
        viewport: Rect::from_size(vw, vh),
        content: Rect::from_size(cw, ch),
    }
}

#[test]
fn boundary_is_half_the_scaled_overflow() {
    let bounds = PanBounds::measure(&fixed(100.0, 100.0, 70.0, 70.0), 2.0);
    assert_eq!(bounds, PanBounds::Limit(Vec2::new(20.0, 20.0)));

    let wide = PanBounds::measure(&fixed(800.0, 600.0, 800.0, 450.0), 2.0);
    assert_eq!(wide, PanBounds::Limit(Vec2::new(400.0, 150.0)));
}

#[test]
fn content_smaller_than_viewport_cannot_move() {
    let bounds = PanBounds::measure(&fixed(800.0, 600.0, 300.0, 200.0), 1.5);
    assert_eq!(bounds, PanBounds::Limit(Vec2::ZERO));
    assert_eq!(bounds.clamp(Vec2::new(40.0, -10.0)), Vec2::ZERO);
}

#[test]
fn missing_or_degenerate_geometry_is_unconstrained() {
    assert_eq!(PanBounds::measure(&Unmeasured, 2.0), PanBounds::Unconstrained);
    assert_eq!(
        PanBounds::measure(&fixed(0.0, 0.0, 70.0, 70.0), 2.0),
        PanBounds::Unconstrained
    );
    assert_eq!(
        PanBounds::measure(&fixed(100.0, 100.0, f32::NAN, 70.0), 2.0),
        PanBounds::Unconstrained
    );

    let free = PanBounds::Unconstrained;
    let far = Vec2::new(1e4, -1e4);
    assert_eq!(free.resist(far, 0.5), far);
    assert_eq!(free.clamp(far), far);
    assert!(free.contains(far));
}

#[test]
fn resistance_only_applies_past_the_bound() {
    assert_eq!(resist_axis(15.0, 20.0, 0.5), 15.0);
    assert_eq!(resist_axis(-20.0, 20.0, 0.5), -20.0);
    assert_eq!(resist_axis(100.0, 20.0, 0.5), 60.0);
    assert_eq!(resist_axis(-100.0, 20.0, 0.5), -60.0);
    assert_eq!(resist_axis(100.0, 20.0, 0.0), 20.0);
}

#[test]
fn unresist_inverts_resist() {
    for raw in [-250.0f32, -21.0, -3.0, 0.0, 19.5, 47.0, 300.0] {
        let applied = resist_axis(raw, 20.0, 0.5);
        let back = unresist_axis(applied, 20.0, 0.5);
        assert!((back - raw).abs() < 1e-3, "raw={raw} back={back}");
    }
}

#[test]
fn contains_matches_clamp() {
    let bounds = PanBounds::Limit(Vec2::new(20.0, 10.0));
    assert!(bounds.contains(Vec2::new(20.0, -10.0)));
    assert!(!bounds.contains(Vec2::new(20.5, 0.0)));
    assert_eq!(bounds.clamp(Vec2::new(35.0, -40.0)), Vec2::new(20.0, -10.0));
}

#[test]
fn rect_measurability() {
    assert!(Rect::new(10.0, 10.0, 1.0, 1.0).is_measurable());
    assert!(!Rect::default().is_measurable());
    assert!(!Rect::from_size(100.0, 0.0).is_measurable());
    assert!(!Rect::from_size(f32::INFINITY, 10.0).is_measurable());
}
