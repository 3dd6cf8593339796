use crate::input;
use crate::listener::{listen, listen_active, ListenerGuard};
use crate::viewer::Shared;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

// Handlers receive `changedTouches`: the contacts that went down, moved or
// lifted in this event. The controller tracks the rest by identifier.
pub fn wire_touch_handlers(
    shared: &Rc<Shared>,
    out: &mut Vec<ListenerGuard>,
) -> Result<(), JsValue> {
    let viewport = shared.viewport();
    let target: &web::EventTarget = viewport.as_ref();

    let s = shared.clone();
    out.push(listen(target, "touchstart", move |ev: web::TouchEvent| {
        touch_start(&s, &ev)
    })?);
    let s = shared.clone();
    out.push(listen_active(target, "touchmove", move |ev: web::TouchEvent| {
        touch_move(&s, &ev)
    })?);
    let s = shared.clone();
    out.push(listen(target, "touchend", move |ev: web::TouchEvent| {
        touch_end(&s, &ev)
    })?);
    let s = shared.clone();
    out.push(listen(target, "touchcancel", move |_ev: web::TouchEvent| {
        touch_cancel(&s)
    })?);
    Ok(())
}

fn touch_start(s: &Shared, ev: &web::TouchEvent) {
    if !s.is_open() {
        return;
    }
    let points = input::touch_points(&ev.changed_touches());
    let now_ms = ev.time_stamp();
    s.with_gesture(|c, g| c.touch_start(&points, now_ms, g));
    s.render();
}

fn touch_move(s: &Shared, ev: &web::TouchEvent) {
    if !s.is_open() {
        return;
    }
    // The page behind is scroll-locked; keep the browser from panning or
    // pinch-zooming it while the viewer handles the gesture.
    ev.prevent_default();
    let points = input::touch_points(&ev.changed_touches());
    s.with_gesture(|c, g| c.touch_move(&points, g));
    s.render();
}

fn touch_end(s: &Shared, ev: &web::TouchEvent) {
    if !s.is_open() {
        return;
    }
    let points = input::touch_points(&ev.changed_touches());
    let now_ms = ev.time_stamp();
    let (intent, animating) = s.with_gesture(|c, g| {
        let intent = c.touch_end(&points, now_ms, g);
        (intent, c.is_animating())
    });
    s.after_gesture(animating);
    if let Some(intent) = intent {
        s.apply_intent(intent);
    }
}

fn touch_cancel(s: &Shared) {
    let animating = s.with_gesture(|c, g| {
        c.touch_cancel(g);
        c.is_animating()
    });
    s.after_gesture(animating);
}
