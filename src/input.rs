use folio_core::{TouchPoint, TouchPoints};
use glam::Vec2;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseDrag {
    pub last: Option<Vec2>,
    pub pointer_id: i32,
}

#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Touch and pen input go through the touch handlers.
#[inline]
pub fn is_mouse(ev: &web::PointerEvent) -> bool {
    ev.pointer_type() == "mouse"
}

pub fn touch_points(list: &web::TouchList) -> TouchPoints {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| TouchPoint::new(t.identifier(), t.client_x() as f32, t.client_y() as f32))
        .collect()
}

/// Wheel deltas in lines/pages only matter for their sign here.
#[inline]
pub fn wheel_delta_y(ev: &web::WheelEvent) -> f64 {
    ev.delta_y()
}
