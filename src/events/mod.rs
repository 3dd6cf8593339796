pub mod keyboard;
pub mod pointer;
pub mod touch;

use crate::attrs;
use crate::constants::*;
use crate::dom;
use crate::listener::{listen, listen_active, ListenerGuard};
use crate::viewer::{Shared, ZoomAction};
use folio_core::NavDirection;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Registers every listener a viewer needs. Guards land in `out` as they
/// are created, so a failure halfway still deregisters the earlier ones.
pub fn wire_viewer(
    shared: &Rc<Shared>,
    document: &web::Document,
    out: &mut Vec<ListenerGuard>,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    pointer::wire_pointer_handlers(shared, out).map_err(js_err)?;
    touch::wire_touch_handlers(shared, out).map_err(js_err)?;
    keyboard::wire_keydown(shared, &window, out).map_err(js_err)?;
    wire_buttons(shared, out).map_err(js_err)?;
    wire_open_triggers(shared, document, out).map_err(js_err)?;
    Ok(())
}

fn wire_click(
    root: &web::Element,
    selector: &str,
    out: &mut Vec<ListenerGuard>,
    handler: impl Fn() + Clone + 'static,
) -> Result<(), JsValue> {
    for el in dom::query_all::<web::Element>(root, selector) {
        let handler = handler.clone();
        out.push(listen(el.as_ref(), "click", move |_ev: web::MouseEvent| handler())?);
    }
    Ok(())
}

fn wire_buttons(shared: &Rc<Shared>, out: &mut Vec<ListenerGuard>) -> Result<(), JsValue> {
    let root = shared.root();
    let s = shared.clone();
    wire_click(&root, CLOSE_SELECTOR, out, move || s.close())?;
    let s = shared.clone();
    wire_click(&root, PREV_SELECTOR, out, move || s.navigate(NavDirection::Previous))?;
    let s = shared.clone();
    wire_click(&root, NEXT_SELECTOR, out, move || s.navigate(NavDirection::Next))?;
    let s = shared.clone();
    wire_click(&root, ZOOM_IN_SELECTOR, out, move || s.zoom(ZoomAction::In))?;
    let s = shared.clone();
    wire_click(&root, ZOOM_OUT_SELECTOR, out, move || s.zoom(ZoomAction::Out))?;
    let s = shared.clone();
    wire_click(&root, ZOOM_RESET_SELECTOR, out, move || s.zoom(ZoomAction::Reset))?;
    Ok(())
}

// Thumbnails/links elsewhere on the page: data-viewer-open="<index>"
// data-viewer-target="<viewer root id>".
fn wire_open_triggers(
    shared: &Rc<Shared>,
    document: &web::Document,
    out: &mut Vec<ListenerGuard>,
) -> Result<(), JsValue> {
    let root_id = shared.root().id();
    let Some(page) = document.document_element() else {
        return Ok(());
    };
    if root_id.is_empty() {
        return Ok(());
    }
    let selector = format!("[{}][{}=\"{}\"]", OPEN_ATTR, TARGET_ATTR, root_id);
    for el in dom::query_all::<web::Element>(&page, &selector) {
        let raw = el.get_attribute(OPEN_ATTR).unwrap_or_default();
        let Some(index) = attrs::parse_open_index(&raw) else {
            log::warn!("[viewer] bad {} value '{}'", OPEN_ATTR, raw);
            continue;
        };
        let s = shared.clone();
        out.push(listen_active(el.as_ref(), "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            s.open(index);
        })?);
    }
    Ok(())
}
