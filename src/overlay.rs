use crate::constants::HIDDEN_CLASS;
use web_sys as web;

#[inline]
pub fn show(el: &web::HtmlElement) {
    _ = el.class_list().remove_1(HIDDEN_CLASS);
    // fallback for pages without the CSS class
    _ = el.style().remove_property("display");
    _ = el.set_attribute("aria-hidden", "false");
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
    // fallback
    _ = el.style().set_property("display", "none");
    _ = el.set_attribute("aria-hidden", "true");
}

/// Zoom label, "n / total" counter and title of the active item.
pub struct Chrome {
    pub zoom_label: Option<web::Element>,
    pub counter: Option<web::Element>,
    pub title: Option<web::Element>,
}

impl Chrome {
    pub fn update(&self, zoom_percent: u32, index: usize, count: usize, title: &str) {
        crate::dom::set_text(self.zoom_label.as_ref(), &format!("{}%", zoom_percent));
        let counter = if count == 0 {
            String::new()
        } else {
            format!("{} / {}", index + 1, count)
        };
        crate::dom::set_text(self.counter.as_ref(), &counter);
        crate::dom::set_text(self.title.as_ref(), title);
    }
}
