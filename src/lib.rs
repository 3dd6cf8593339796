#![cfg(target_arch = "wasm32")]
//! WASM front-end for the portfolio media viewer.
//!
//! On start every `[data-media-viewer]` root in the page is mounted and every
//! `[data-archive-card]` gets its category colours. Pages that build viewers
//! themselves can construct `MediaViewer` from JS instead.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod attrs;
mod cards;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod listener;
mod overlay;
mod viewer;

pub use viewer::MediaViewer;

thread_local! {
    // Viewers mounted at start live as long as the page.
    static MOUNTED: RefCell<Vec<MediaViewer>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let page = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;

    let cards = cards::style_archive_cards(&document);
    log::info!("[cards] styled {}", cards);

    for root in dom::query_all::<web::HtmlElement>(&page, constants::VIEWER_ROOT_SELECTOR) {
        match MediaViewer::mount(root) {
            Ok(viewer) => MOUNTED.with(|m| m.borrow_mut().push(viewer)),
            Err(e) => log::error!("[viewer] mount failed: {:#}", e),
        }
    }
    Ok(())
}
