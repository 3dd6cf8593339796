// DOM contract between the page markup and the viewer.

// Roots and regions
pub const VIEWER_ROOT_SELECTOR: &str = "[data-media-viewer]";
pub const VIEWPORT_SELECTOR: &str = "[data-viewer-viewport]";
pub const SLIDE_SELECTOR: &str = "[data-media-item]";
pub const CONTENT_SELECTOR: &str = "[data-media-content]"; // element that receives the transform
pub const IFRAME_SELECTOR: &str = "iframe";

// Chrome
pub const ZOOM_LABEL_SELECTOR: &str = "[data-viewer-zoom-label]";
pub const COUNTER_SELECTOR: &str = "[data-viewer-counter]";
pub const TITLE_SELECTOR: &str = "[data-viewer-title]";

// Buttons
pub const CLOSE_SELECTOR: &str = "[data-viewer-close]";
pub const PREV_SELECTOR: &str = "[data-viewer-prev]";
pub const NEXT_SELECTOR: &str = "[data-viewer-next]";
pub const ZOOM_IN_SELECTOR: &str = "[data-viewer-zoom-in]";
pub const ZOOM_OUT_SELECTOR: &str = "[data-viewer-zoom-out]";
pub const ZOOM_RESET_SELECTOR: &str = "[data-viewer-zoom-reset]";

// Triggers outside the modal: data-viewer-open="<index>" data-viewer-target="<root id>"
pub const OPEN_ATTR: &str = "data-viewer-open";
pub const TARGET_ATTR: &str = "data-viewer-target";

// Per-slide attributes
pub const KIND_ATTR: &str = "data-kind";
pub const SRC_ATTR: &str = "data-src";
pub const TITLE_ATTR: &str = "data-title";

// Per-viewer configuration overrides
pub const PRESET_ATTR: &str = "data-preset";
pub const MAX_SCALE_ATTR: &str = "data-max-scale";
pub const ZOOM_STEP_ATTR: &str = "data-zoom-step";
pub const SWIPE_DISTANCE_ATTR: &str = "data-swipe-distance";
pub const MOUNTED_ATTR: &str = "data-viewer-mounted";

// Archive cards
pub const CARD_SELECTOR: &str = "[data-archive-card]";
pub const CATEGORY_ATTR: &str = "data-category";
pub const CARD_LABEL_SELECTOR: &str = "[data-card-label]";

// State classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "is-active";
pub const ZOOMED_CLASS: &str = "is-zoomed";
pub const DRAGGING_CLASS: &str = "is-dragging";

// Button zoom eases via CSS; gestures and springs drive every frame themselves.
pub const ZOOM_TRANSITION: &str = "transform 0.2s ease-out";
