// Host-side tests for touch interpretation: swipe, pinch, double tap, pan.

mod common;

use common::FixedGeometry;
use folio_core::*;
use glam::Vec2;

fn controller(zoom_step: f32, kinds: Vec<MediaKind>) -> MediaGestureController {
    let config = GestureConfig {
        zoom_step,
        ..GestureConfig::lightbox()
    };
    MediaGestureController::new(config, kinds)
}

fn images(n: usize) -> MediaGestureController {
    controller(2.0, vec![MediaKind::Image; n])
}

fn pt(id: i32, x: f32, y: f32) -> [TouchPoint; 1] {
    [TouchPoint::new(id, x, y)]
}

/// One finger from `from` to `to`, down at `start_ms` and lifted `duration_ms` later.
fn swipe(
    c: &mut MediaGestureController,
    start_ms: f64,
    from: (f32, f32),
    to: (f32, f32),
    duration_ms: f64,
) -> Option<GestureIntent> {
    c.touch_start(&pt(0, from.0, from.1), start_ms, &Unmeasured);
    c.touch_move(&pt(0, to.0, to.1), &Unmeasured);
    c.touch_end(&pt(0, to.0, to.1), start_ms + duration_ms, &Unmeasured)
}

#[test]
fn quick_left_swipe_navigates_next() {
    let mut c = images(3);
    let intent = swipe(&mut c, 0.0, (200.0, 100.0), (120.0, 105.0), 200.0);
    assert_eq!(intent, Some(GestureIntent::Navigate(NavDirection::Next)));
    assert!(!c.is_gesturing());
}

#[test]
fn quick_right_swipe_navigates_previous() {
    let mut c = images(3);
    let intent = swipe(&mut c, 0.0, (120.0, 100.0), (200.0, 95.0), 200.0);
    assert_eq!(intent, Some(GestureIntent::Navigate(NavDirection::Previous)));
}

#[test]
fn swipe_while_zoomed_pans_instead() {
    let mut c = images(3);
    c.zoom_in();
    assert_eq!(c.scale(), 2.0);
    let intent = swipe(&mut c, 0.0, (200.0, 100.0), (120.0, 105.0), 200.0);
    assert_eq!(intent, None);
    assert_eq!(c.offset(), Vec2::new(-80.0, 5.0));
    assert!(!c.is_dragging());
}

#[test]
fn slow_short_or_vertical_swipes_are_ignored() {
    let mut c = images(3);
    assert_eq!(swipe(&mut c, 0.0, (200.0, 100.0), (120.0, 100.0), 600.0), None);
    assert_eq!(swipe(&mut c, 1_000.0, (200.0, 100.0), (170.0, 100.0), 100.0), None);
    assert_eq!(swipe(&mut c, 2_000.0, (200.0, 100.0), (140.0, 190.0), 100.0), None);
    assert_eq!(c.active_index(), 0);
}

#[test]
fn swipe_needs_more_than_one_item() {
    let mut c = images(1);
    assert_eq!(swipe(&mut c, 0.0, (200.0, 100.0), (50.0, 100.0), 100.0), None);
}

#[test]
fn card_preset_swipes_at_shorter_distance() {
    let mut c = MediaGestureController::new(
        GestureConfig::archive_card(),
        vec![MediaKind::Image; 2],
    );
    let intent = swipe(&mut c, 0.0, (100.0, 0.0), (55.0, 0.0), 150.0);
    assert_eq!(intent, Some(GestureIntent::Navigate(NavDirection::Next)));
}

#[test]
fn pinch_scale_is_damped_by_sensitivity() {
    let mut c = images(1);
    let fingers = [TouchPoint::new(0, 0.0, 0.0), TouchPoint::new(1, 100.0, 0.0)];
    c.touch_start(&fingers, 0.0, &Unmeasured);
    c.touch_move(&pt(1, 200.0, 0.0), &Unmeasured);
    assert!((c.scale() - 1.5).abs() < 1e-5, "got {}", c.scale());

    c.touch_move(&pt(1, 1_000.0, 0.0), &Unmeasured);
    assert_eq!(c.scale(), 4.0);
}

#[test]
fn pinch_with_fingers_landing_separately() {
    let mut c = images(1);
    c.touch_start(&pt(7, 50.0, 50.0), 0.0, &Unmeasured);
    c.touch_start(&pt(9, 50.0, 150.0), 20.0, &Unmeasured);
    c.touch_move(&pt(9, 50.0, 250.0), &Unmeasured);
    assert!((c.scale() - 1.5).abs() < 1e-5);
}

#[test]
fn pinch_in_below_min_recentres() {
    let mut c = controller(1.4, vec![MediaKind::Image]);
    c.zoom_in();
    c.drag_start(&Unmeasured);
    c.drag_move(Vec2::new(50.0, 0.0), &Unmeasured);
    c.drag_end(&Unmeasured);
    assert_eq!(c.offset(), Vec2::new(50.0, 0.0));
    let fingers = [TouchPoint::new(0, 0.0, 0.0), TouchPoint::new(1, 200.0, 0.0)];
    c.touch_start(&fingers, 0.0, &Unmeasured);
    c.touch_move(&pt(1, 20.0, 0.0), &Unmeasured);
    assert_eq!(c.scale(), 1.0);
    assert_eq!(c.offset(), Vec2::ZERO);
}

#[test]
fn pinch_release_near_min_settles() {
    let mut c = images(1);
    let fingers = [TouchPoint::new(0, 0.0, 0.0), TouchPoint::new(1, 100.0, 0.0)];
    c.touch_start(&fingers, 0.0, &Unmeasured);
    c.touch_move(&pt(1, 110.0, 0.0), &Unmeasured);
    assert!(c.scale() > 1.0);
    assert_eq!(c.touch_end(&fingers, 300.0, &Unmeasured), None);
    assert_eq!(c.scale(), 1.0);
    assert!(!c.is_gesturing());
}

#[test]
fn leftover_finger_after_pinch_does_not_swipe() {
    let mut c = images(3);
    let fingers = [TouchPoint::new(0, 300.0, 0.0), TouchPoint::new(1, 400.0, 0.0)];
    c.touch_start(&fingers, 0.0, &Unmeasured);
    c.touch_end(&pt(1, 400.0, 0.0), 100.0, &Unmeasured);
    c.touch_move(&pt(0, 100.0, 0.0), &Unmeasured);
    assert_eq!(c.touch_end(&pt(0, 100.0, 0.0), 200.0, &Unmeasured), None);
    assert_eq!(c.active_index(), 0);
}

#[test]
fn third_finger_does_not_change_the_pinch_pair() {
    let mut c = images(1);
    let fingers = [TouchPoint::new(0, 0.0, 0.0), TouchPoint::new(1, 100.0, 0.0)];
    c.touch_start(&fingers, 0.0, &Unmeasured);
    c.touch_start(&pt(2, 500.0, 400.0), 10.0, &Unmeasured);
    c.touch_move(&pt(1, 200.0, 0.0), &Unmeasured);
    assert!((c.scale() - 1.5).abs() < 1e-5, "got {}", c.scale());

    // Lifting the extra finger leaves the pinch untouched.
    c.touch_end(&pt(2, 500.0, 400.0), 50.0, &Unmeasured);
    assert!((c.scale() - 1.5).abs() < 1e-5);
    c.touch_move(&pt(1, 300.0, 0.0), &Unmeasured);
    assert!((c.scale() - 2.0).abs() < 1e-5, "got {}", c.scale());

    // Lifting a pinch finger ends the pinch.
    c.touch_end(&pt(0, 0.0, 0.0), 80.0, &Unmeasured);
    c.touch_move(&pt(1, 900.0, 0.0), &Unmeasured);
    assert!((c.scale() - 2.0).abs() < 1e-5);
}

#[test]
fn pinch_on_video_is_ignored() {
    let mut c = controller(2.0, vec![MediaKind::Video]);
    let fingers = [TouchPoint::new(0, 0.0, 0.0), TouchPoint::new(1, 100.0, 0.0)];
    c.touch_start(&fingers, 0.0, &Unmeasured);
    c.touch_move(&pt(1, 300.0, 0.0), &Unmeasured);
    assert_eq!(c.scale(), 1.0);
}

#[test]
fn tiny_pinch_distance_is_ignored() {
    let mut c = images(1);
    let fingers = [TouchPoint::new(0, 0.0, 0.0), TouchPoint::new(1, 4.0, 0.0)];
    c.touch_start(&fingers, 0.0, &Unmeasured);
    c.touch_move(&pt(1, 200.0, 0.0), &Unmeasured);
    assert_eq!(c.scale(), 1.0);
}

#[test]
fn double_tap_within_window_resets_zoom() {
    let mut c = images(1);
    c.zoom_in();
    c.touch_start(&pt(0, 100.0, 100.0), 0.0, &Unmeasured);
    c.touch_end(&pt(0, 100.0, 100.0), 60.0, &Unmeasured);
    c.touch_start(&pt(0, 104.0, 98.0), 150.0, &Unmeasured);
    assert_eq!(c.scale(), 1.0);
    assert_eq!(c.offset(), Vec2::ZERO);
    c.touch_end(&pt(0, 104.0, 98.0), 200.0, &Unmeasured);
    assert!(!c.is_gesturing());
}

#[test]
fn taps_outside_window_do_not_reset() {
    let mut c = images(1);
    c.zoom_in();
    c.touch_start(&pt(0, 100.0, 100.0), 0.0, &Unmeasured);
    c.touch_end(&pt(0, 100.0, 100.0), 60.0, &Unmeasured);
    c.touch_start(&pt(0, 100.0, 100.0), 500.0, &Unmeasured);
    assert_eq!(c.scale(), 2.0);
    c.touch_end(&pt(0, 100.0, 100.0), 560.0, &Unmeasured);
}

#[test]
fn taps_far_apart_do_not_reset() {
    let mut c = images(1);
    c.zoom_in();
    c.touch_start(&pt(0, 100.0, 100.0), 0.0, &Unmeasured);
    c.touch_end(&pt(0, 100.0, 100.0), 60.0, &Unmeasured);
    c.touch_start(&pt(0, 300.0, 100.0), 150.0, &Unmeasured);
    assert_eq!(c.scale(), 2.0);
}

#[test]
fn pan_is_bounded_with_resistance() {
    let geometry = FixedGeometry {
        viewport: Rect::from_size(100.0, 100.0),
        content: Rect::from_size(70.0, 70.0),
    };
    let mut c = images(1);
    c.zoom_in();
    c.touch_start(&pt(0, 0.0, 0.0), 0.0, &geometry);
    assert!(c.is_dragging());
    c.touch_move(&pt(0, 100.0, 0.0), &geometry);
    assert!((c.offset().x - 60.0).abs() < 1e-4);
    c.touch_end(&pt(0, 100.0, 0.0), 400.0, &geometry);
    assert!(c.is_animating());
    while c.tick(1.0 / 60.0) {}
    assert_eq!(c.offset(), Vec2::new(20.0, 0.0));
}

#[test]
fn cancel_ends_pan_and_clears_session() {
    let mut c = images(1);
    c.zoom_in();
    c.touch_start(&pt(0, 0.0, 0.0), 0.0, &Unmeasured);
    c.touch_move(&pt(0, 30.0, 0.0), &Unmeasured);
    c.touch_cancel(&Unmeasured);
    assert!(!c.is_dragging());
    assert!(!c.is_gesturing());
    assert_eq!(c.offset(), Vec2::new(30.0, 0.0));
    // Stray end after cancel is harmless.
    assert_eq!(c.touch_end(&pt(0, 30.0, 0.0), 50.0, &Unmeasured), None);
}

#[test]
fn zoom_reset_mid_pan_stops_the_pan() {
    let mut c = images(1);
    c.zoom_in();
    c.touch_start(&pt(0, 0.0, 0.0), 0.0, &Unmeasured);
    c.zoom_reset();
    c.touch_move(&pt(0, 80.0, 0.0), &Unmeasured);
    assert_eq!(c.offset(), Vec2::ZERO);
    assert_eq!(c.touch_end(&pt(0, 80.0, 0.0), 100.0, &Unmeasured), None);
}
