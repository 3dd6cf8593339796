// Shared fixtures for the host-side tests.

use folio_core::{Geometry, Rect};

/// Layout that always measures the same rectangles.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedGeometry {
    pub viewport: Rect,
    pub content: Rect,
}

impl Geometry for FixedGeometry {
    fn viewport_rect(&self) -> Option<Rect> {
        Some(self.viewport)
    }
    fn content_rect(&self) -> Option<Rect> {
        Some(self.content)
    }
}
