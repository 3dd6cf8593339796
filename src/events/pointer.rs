use crate::input::{self, MouseDrag};
use crate::listener::{listen, listen_active, ListenerGuard};
use crate::viewer::Shared;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Mouse drag-to-pan and wheel zoom on the viewport. Touch and pen go
/// through `touch.rs`.
pub fn wire_pointer_handlers(
    shared: &Rc<Shared>,
    out: &mut Vec<ListenerGuard>,
) -> Result<(), JsValue> {
    let viewport = shared.viewport();
    let target: &web::EventTarget = viewport.as_ref();

    let s = shared.clone();
    out.push(listen_active(target, "pointerdown", move |ev: web::PointerEvent| {
        pointer_down(&s, &ev)
    })?);
    let s = shared.clone();
    out.push(listen(target, "pointermove", move |ev: web::PointerEvent| {
        pointer_move(&s, &ev)
    })?);
    for event in ["pointerup", "pointercancel"] {
        let s = shared.clone();
        out.push(listen(target, event, move |ev: web::PointerEvent| {
            pointer_up(&s, &ev)
        })?);
    }
    let s = shared.clone();
    out.push(listen_active(target, "wheel", move |ev: web::WheelEvent| {
        wheel(&s, &ev)
    })?);
    Ok(())
}

fn pointer_down(s: &Shared, ev: &web::PointerEvent) {
    if !input::is_mouse(ev) || ev.button() != 0 || !s.is_open() {
        return;
    }
    if !s.with_gesture(|c, g| c.drag_start(g)) {
        return;
    }
    s.animation.stop();
    s.state.borrow_mut().mouse = MouseDrag {
        last: Some(input::pointer_client_px(ev)),
        pointer_id: ev.pointer_id(),
    };
    _ = s.viewport().set_pointer_capture(ev.pointer_id());
    ev.prevent_default();
    s.render();
}

fn pointer_move(s: &Shared, ev: &web::PointerEvent) {
    if !input::is_mouse(ev) {
        return;
    }
    let pos = input::pointer_client_px(ev);
    let delta = {
        let mut st = s.state.borrow_mut();
        match st.mouse.last {
            Some(last) if st.mouse.pointer_id == ev.pointer_id() => {
                st.mouse.last = Some(pos);
                pos - last
            }
            _ => return,
        }
    };
    s.with_gesture(|c, g| c.drag_move(delta, g));
    s.render();
}

fn pointer_up(s: &Shared, ev: &web::PointerEvent) {
    let was_dragging = {
        let mut st = s.state.borrow_mut();
        if st.mouse.pointer_id != ev.pointer_id() {
            return;
        }
        st.mouse.last.take().is_some()
    };
    if !was_dragging {
        return;
    }
    _ = s.viewport().release_pointer_capture(ev.pointer_id());
    let animating = s.with_gesture(|c, g| c.drag_end(g));
    s.after_gesture(animating);
}

fn wheel(s: &Shared, ev: &web::WheelEvent) {
    if !s.is_open() {
        return;
    }
    ev.prevent_default();
    let delta_y = input::wheel_delta_y(ev);
    let animating = s.with_gesture(|c, g| {
        c.on_wheel(delta_y);
        c.settle_offset(g)
    });
    s.after_gesture(animating);
}
