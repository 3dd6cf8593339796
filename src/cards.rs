use crate::constants::{CARD_LABEL_SELECTOR, CARD_SELECTOR, CATEGORY_ATTR};
use crate::dom;
use folio_core::style::{category_style, ProjectCategory};
use web_sys as web;

/// Applies each archive card's category colour scheme as CSS custom
/// properties and fills an empty category label. Returns the card count.
pub fn style_archive_cards(document: &web::Document) -> usize {
    let Some(page) = document.document_element() else {
        return 0;
    };
    let cards = dom::query_all::<web::HtmlElement>(&page, CARD_SELECTOR);
    for card in &cards {
        let raw = card.get_attribute(CATEGORY_ATTR).unwrap_or_default();
        let category = raw.parse::<ProjectCategory>().unwrap_or_else(|e| {
            log::warn!("[cards] {}", e);
            ProjectCategory::Other
        });
        let style = category_style(category);
        for (name, value) in style.css_vars() {
            dom::set_style(card, name, value);
        }
        if let Some(label) = dom::query_one::<web::Element>(card, CARD_LABEL_SELECTOR) {
            if label.text_content().map_or(true, |t| t.trim().is_empty()) {
                label.set_text_content(Some(style.label));
            }
        }
    }
    cards.len()
}
