use crate::attrs;
use crate::constants::*;
use crate::dom::{self, BodyScroll, DomGeometry};
use crate::events;
use crate::frame::AnimationLoop;
use crate::input::MouseDrag;
use crate::listener::ListenerGuard;
use crate::overlay::{self, Chrome};
use folio_core::embed::{embed_url, EmbedOptions, VideoSource};
use folio_core::scroll_lock::ScrollHold;
use folio_core::{
    GestureIntent, MediaGestureController, MediaItem, MediaKind, NavDirection, ViewportPhase,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Slide {
    pub element: web::HtmlElement,
    /// Receives the zoom/pan transform.
    pub content: web::HtmlElement,
    pub frame: Option<web::HtmlIFrameElement>,
    /// Embed URL assigned to `frame` only while the slide is active.
    pub embed_src: Option<String>,
}

pub struct ViewerDom {
    pub root: web::HtmlElement,
    pub viewport: web::HtmlElement,
    pub slides: Vec<Slide>,
    pub chrome: Chrome,
}

impl ViewerDom {
    pub fn geometry(&self, index: usize) -> DomGeometry<'_> {
        DomGeometry {
            viewport: &self.viewport,
            content: self.slides.get(index).map(|s| &s.content),
        }
    }
}

pub struct ViewerState {
    pub controller: MediaGestureController,
    pub items: Vec<MediaItem>,
    pub dom: ViewerDom,
    pub scroll_lock: Option<ScrollHold<BodyScroll>>,
    pub mouse: MouseDrag,
    pub open: bool,
}

#[derive(Clone, Copy, Debug)]
pub enum ZoomAction {
    In,
    Out,
    Reset,
}

/// State shared between the exported handle, DOM listeners and the
/// animation loop.
pub struct Shared {
    pub state: RefCell<ViewerState>,
    pub animation: AnimationLoop,
}

impl Shared {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    pub fn viewport(&self) -> web::HtmlElement {
        self.state.borrow().dom.viewport.clone()
    }

    pub fn root(&self) -> web::HtmlElement {
        self.state.borrow().dom.root.clone()
    }

    /// Runs `f` against the controller with live geometry for the active slide.
    pub fn with_gesture<R>(
        &self,
        f: impl FnOnce(&mut MediaGestureController, &DomGeometry<'_>) -> R,
    ) -> R {
        let mut st = self.state.borrow_mut();
        let st = &mut *st;
        let geometry = st.dom.geometry(st.controller.active_index());
        f(&mut st.controller, &geometry)
    }

    /// Schedules frames if the controller started a spring, then repaints.
    pub fn after_gesture(&self, animating: bool) {
        if animating {
            self.animation.start();
        }
        self.render();
    }

    pub fn open(&self, index: usize) {
        {
            let mut st = self.state.borrow_mut();
            if st.items.is_empty() {
                log::warn!("[viewer] nothing to open");
                return;
            }
            st.controller.request_navigate(index as isize);
            st.controller.reset();
            st.open = true;
            if let Some(lock) = st.scroll_lock.as_mut() {
                lock.acquire();
            }
            overlay::show(&st.dom.root);
        }
        self.animation.stop();
        self.sync_slides();
        self.render();
        log::info!("[viewer] open item {}", index);
    }

    pub fn close(&self) {
        self.animation.stop();
        {
            let mut st = self.state.borrow_mut();
            if !st.open {
                return;
            }
            st.open = false;
            st.mouse = MouseDrag::default();
            st.controller.reset();
            if let Some(lock) = st.scroll_lock.as_mut() {
                lock.release();
            }
            overlay::hide(&st.dom.root);
        }
        self.sync_slides();
        self.render();
        log::info!("[viewer] closed");
    }

    pub fn apply_intent(&self, intent: GestureIntent) {
        if intent == GestureIntent::Dismiss {
            self.close();
            return;
        }
        self.animation.stop();
        let index = self.state.borrow_mut().controller.apply_intent(intent);
        if let Some(index) = index {
            log::debug!("[viewer] {:?} -> item {}", intent, index);
        }
        self.sync_slides();
        self.render();
    }

    pub fn navigate(&self, direction: NavDirection) {
        self.apply_intent(GestureIntent::Navigate(direction));
    }

    pub fn zoom(&self, action: ZoomAction) {
        let animating = self.with_gesture(|c, g| {
            match action {
                ZoomAction::In => c.zoom_in(),
                ZoomAction::Out => c.zoom_out(),
                ZoomAction::Reset => c.zoom_reset(),
            }
            c.settle_offset(g)
        });
        self.after_gesture(animating);
    }

    fn on_frame(&self, dt_sec: f32) -> bool {
        let more = self.state.borrow_mut().controller.tick(dt_sec);
        self.render();
        more
    }

    /// Active-slide visibility and lazy embeds. Only needed when the active
    /// item or the open state changes.
    pub fn sync_slides(&self) {
        let st = self.state.borrow();
        let active = st.controller.active_index();
        for (i, slide) in st.dom.slides.iter().enumerate() {
            let on = st.open && i == active;
            dom::toggle_class(&slide.element, ACTIVE_CLASS, on);
            _ = slide
                .element
                .set_attribute("aria-hidden", if on { "false" } else { "true" });
            if !on {
                _ = slide.content.style().remove_property("transform");
            }
            if let (Some(frame), Some(src)) = (&slide.frame, &slide.embed_src) {
                if on {
                    if frame.src() != *src {
                        frame.set_src(src);
                    }
                } else if frame.has_attribute("src") {
                    // Unloading the iframe stops playback.
                    _ = frame.remove_attribute("src");
                }
            }
        }
    }

    pub fn render(&self) {
        let st = self.state.borrow();
        let c = &st.controller;
        let vs = c.state();
        let index = vs.active_index;
        if let Some(slide) = st.dom.slides.get(index) {
            dom::set_style(&slide.content, "transform", &vs.css_transform());
            let live = vs.is_dragging || c.is_gesturing() || c.is_animating();
            dom::set_style(
                &slide.content,
                "transition",
                if live { "none" } else { ZOOM_TRANSITION },
            );
        }
        dom::toggle_class(
            &st.dom.viewport,
            ZOOMED_CLASS,
            c.phase() == ViewportPhase::Zoomed,
        );
        dom::toggle_class(&st.dom.viewport, DRAGGING_CLASS, vs.is_dragging);
        let title = st.items.get(index).map(|i| i.title.as_str()).unwrap_or("");
        st.dom
            .chrome
            .update(c.zoom_percent(), index, st.items.len(), title);
    }
}

fn video_embed_src(source: &str) -> String {
    match source.parse::<VideoSource>() {
        Ok(video) => embed_url(&video, &EmbedOptions::default()),
        Err(e) => {
            log::warn!("[viewer] {}; using source as-is", e);
            source.to_string()
        }
    }
}

fn build_slide(element: web::HtmlElement, item: &MediaItem) -> Slide {
    let content = dom::query_one::<web::HtmlElement>(&element, CONTENT_SELECTOR)
        .unwrap_or_else(|| element.clone());
    let (frame, embed_src) = match item.kind {
        MediaKind::Video => (
            dom::query_one::<web::HtmlIFrameElement>(&element, IFRAME_SELECTOR),
            Some(video_embed_src(&item.source)),
        ),
        MediaKind::Image => (None, None),
    };
    Slide {
        element,
        content,
        frame,
        embed_src,
    }
}

/// A mounted lightbox. Dropping it (or calling `free()` from JS) closes the
/// viewer and removes every listener it registered.
#[wasm_bindgen]
pub struct MediaViewer {
    shared: Rc<Shared>,
    _listeners: Vec<ListenerGuard>,
}

impl MediaViewer {
    pub fn mount(root: web::HtmlElement) -> anyhow::Result<Self> {
        if root.has_attribute(MOUNTED_ATTR) {
            anyhow::bail!("viewer root is already mounted");
        }
        let document = root
            .owner_document()
            .ok_or_else(|| anyhow::anyhow!("viewer root is detached"))?;
        let viewport =
            dom::query_one::<web::HtmlElement>(&root, VIEWPORT_SELECTOR).unwrap_or_else(|| root.clone());

        let get = |name: &str| root.get_attribute(name);
        let config = attrs::config_from_attrs(get).unwrap_or_else(|e| {
            log::warn!("[viewer] {}; keeping preset", e);
            attrs::preset_from_attrs(get)
        });

        let mut items = Vec::new();
        let mut slides = Vec::new();
        for el in dom::query_all::<web::HtmlElement>(&root, SLIDE_SELECTOR) {
            match attrs::media_item_from_attrs(|name| el.get_attribute(name)) {
                Ok(item) => {
                    slides.push(build_slide(el, &item));
                    items.push(item);
                }
                Err(e) => log::warn!("[viewer] skipping slide: {}", e),
            }
        }
        let kinds = items.iter().map(|i| i.kind).collect();
        let chrome = Chrome {
            zoom_label: dom::query_one(&root, ZOOM_LABEL_SELECTOR),
            counter: dom::query_one(&root, COUNTER_SELECTOR),
            title: dom::query_one(&root, TITLE_SELECTOR),
        };
        let count = items.len();
        let state = ViewerState {
            controller: MediaGestureController::new(config, kinds),
            items,
            dom: ViewerDom {
                root: root.clone(),
                viewport,
                slides,
                chrome,
            },
            scroll_lock: dom::page_scroll_hold(&document),
            mouse: MouseDrag::default(),
            open: false,
        };

        let shared = Rc::new_cyclic(|weak: &Weak<Shared>| {
            let weak = weak.clone();
            Shared {
                state: RefCell::new(state),
                animation: AnimationLoop::new(move |dt_sec| {
                    weak.upgrade()
                        .map(|s| s.on_frame(dt_sec))
                        .unwrap_or(false)
                }),
            }
        });

        let mut listeners = Vec::new();
        events::wire_viewer(&shared, &document, &mut listeners)?;

        _ = root.set_attribute(MOUNTED_ATTR, "true");
        overlay::hide(&root);
        shared.sync_slides();
        shared.render();
        log::info!(
            "[viewer] mounted #{} with {} items, {} listeners",
            root.id(),
            count,
            listeners.len()
        );
        Ok(Self {
            shared,
            _listeners: listeners,
        })
    }
}

#[wasm_bindgen]
impl MediaViewer {
    #[wasm_bindgen(constructor)]
    pub fn new(root_id: &str) -> Result<MediaViewer, JsValue> {
        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let root = document
            .get_element_by_id(root_id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{}", root_id)))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| JsValue::from_str(&format!("#{} is not an HTML element", root_id)))?;
        Self::mount(root).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
    }

    pub fn open(&self, index: usize) {
        self.shared.open(index);
    }

    pub fn close(&self) {
        self.shared.close();
    }

    pub fn next(&self) {
        self.shared.navigate(NavDirection::Next);
    }

    pub fn prev(&self) {
        self.shared.navigate(NavDirection::Previous);
    }

    pub fn zoom_in(&self) {
        self.shared.zoom(ZoomAction::In);
    }

    pub fn zoom_out(&self) {
        self.shared.zoom(ZoomAction::Out);
    }

    pub fn zoom_reset(&self) {
        self.shared.zoom(ZoomAction::Reset);
    }

    pub fn zoom_percent(&self) -> u32 {
        self.shared.state.borrow().controller.zoom_percent()
    }

    pub fn active_index(&self) -> usize {
        self.shared.state.borrow().controller.active_index()
    }

    pub fn is_open(&self) -> bool {
        self.shared.is_open()
    }
}

impl Drop for MediaViewer {
    fn drop(&mut self) {
        self.shared.close();
        _ = self.shared.root().remove_attribute(MOUNTED_ATTR);
    }
}
