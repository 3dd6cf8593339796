//! Scoped event listener registration.
//!
//! A `ListenerGuard` owns the closure and removes the listener when dropped,
//! so every exit path (viewer dropped, page teardown, init error halfway
//! through wiring) deregisters what was registered.

use std::any::Any;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    callback: js_sys::Function,
    // Keeps the Rust side of `callback` alive; dropped after removal.
    _closure: Box<dyn Any>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.callback);
        log::trace!("[listener] removed {}", self.event);
    }
}

/// Passive listener (the handler never calls `prevent_default`).
pub fn listen<E>(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(E) + 'static,
) -> Result<ListenerGuard, JsValue>
where
    E: 'static,
    dyn FnMut(E): WasmClosure,
{
    register(target, event, handler, true)
}

/// Non-passive listener, required for `prevent_default` on wheel/touchmove.
pub fn listen_active<E>(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(E) + 'static,
) -> Result<ListenerGuard, JsValue>
where
    E: 'static,
    dyn FnMut(E): WasmClosure,
{
    register(target, event, handler, false)
}

fn register<E>(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(E) + 'static,
    passive: bool,
) -> Result<ListenerGuard, JsValue>
where
    E: 'static,
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let callback: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    let options = web::AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event, &callback, &options,
    )?;
    Ok(ListenerGuard {
        target: target.clone(),
        event,
        callback,
        _closure: Box::new(closure),
    })
}
