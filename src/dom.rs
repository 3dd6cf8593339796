use folio_core::scroll_lock::{ScrollHold, ScrollHost, ScrollLock};
use folio_core::{Geometry, Rect};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All descendants of `root` matching `selector` that are of type `T`.
pub fn query_all<T: JsCast>(root: &web::Element, selector: &str) -> Vec<T> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

#[inline]
pub fn query_one<T: JsCast>(root: &web::Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn set_text(el: Option<&web::Element>, text: &str) {
    if let Some(el) = el {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

fn measured(width: f64, height: f64) -> Option<Rect> {
    let rect = Rect::from_size(width as f32, height as f32);
    rect.is_measurable().then_some(rect)
}

/// Live layout reads for one slide. The content size is the untransformed
/// layout box; the bounding rect would already include the current scale.
pub struct DomGeometry<'a> {
    pub viewport: &'a web::HtmlElement,
    pub content: Option<&'a web::HtmlElement>,
}

impl Geometry for DomGeometry<'_> {
    fn viewport_rect(&self) -> Option<Rect> {
        let r = self.viewport.get_bounding_client_rect();
        measured(r.width(), r.height()).map(|m| Rect {
            origin: glam::Vec2::new(r.left() as f32, r.top() as f32),
            ..m
        })
    }

    fn content_rect(&self) -> Option<Rect> {
        let el = self.content?;
        measured(el.offset_width() as f64, el.offset_height() as f64)
    }
}

/// `<body>` as the page scroll host.
pub struct BodyScroll(pub web::HtmlElement);

impl BodyScroll {
    pub fn from_document(document: &web::Document) -> Option<Self> {
        document.body().map(BodyScroll)
    }
}

impl ScrollHost for BodyScroll {
    fn overflow(&self) -> String {
        self.0
            .style()
            .get_property_value("overflow")
            .unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let style = self.0.style();
        if value.is_empty() {
            _ = style.remove_property("overflow");
        } else {
            _ = style.set_property("overflow", value);
        }
    }
}

thread_local! {
    // One lock for the page, shared by every mounted viewer.
    static PAGE_SCROLL: RefCell<Option<ScrollLock<BodyScroll>>> = const { RefCell::new(None) };
}

/// A new hold on the page scroll lock, creating the lock on first use.
pub fn page_scroll_hold(document: &web::Document) -> Option<ScrollHold<BodyScroll>> {
    PAGE_SCROLL.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = BodyScroll::from_document(document).map(ScrollLock::new);
        }
        slot.as_ref().map(|lock| lock.hold())
    })
}
