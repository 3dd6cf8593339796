use crate::listener::{listen_active, ListenerGuard};
use crate::viewer::Shared;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

pub fn handle_keydown(s: &Shared, ev: &web::KeyboardEvent) {
    if !s.is_open() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    let (intent, zoom_changed, animating) = s.with_gesture(|c, g| {
        let before = (c.scale(), c.offset());
        let intent = c.key_down(&key);
        let animating = c.settle_offset(g);
        (intent, (c.scale(), c.offset()) != before, animating)
    });
    if intent.is_none() && !zoom_changed {
        return;
    }
    ev.prevent_default();
    match intent {
        Some(intent) => {
            log::info!("[keys] {} -> {:?}", key, intent);
            s.apply_intent(intent);
        }
        None => s.after_gesture(animating),
    }
}

pub fn wire_keydown(
    shared: &Rc<Shared>,
    window: &web::Window,
    out: &mut Vec<ListenerGuard>,
) -> Result<(), JsValue> {
    let s = shared.clone();
    out.push(listen_active(window.as_ref(), "keydown", move |ev: web::KeyboardEvent| {
        handle_keydown(&s, &ev)
    })?);
    Ok(())
}
