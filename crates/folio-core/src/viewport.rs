//! Render-facing viewport state.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub scale: f32,
    /// Translation applied to the media element, in viewport pixels.
    pub offset: Vec2,
    pub is_dragging: bool,
    pub active_index: usize,
}

impl ViewportState {
    pub fn new(min_scale: f32) -> Self {
        Self {
            scale: min_scale,
            offset: Vec2::ZERO,
            is_dragging: false,
            active_index: 0,
        }
    }

    /// Back to fitted, centred, not dragging. Keeps the active index.
    pub fn reset(&mut self, min_scale: f32) {
        self.scale = min_scale;
        self.offset = Vec2::ZERO;
        self.is_dragging = false;
    }

    pub fn phase(&self, min_scale: f32) -> ViewportPhase {
        if self.scale <= min_scale {
            ViewportPhase::Idle
        } else {
            ViewportPhase::Zoomed
        }
    }

    /// CSS transform for the media element.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.4})",
            self.offset.x, self.offset.y, self.scale
        )
    }
}

/// `Idle` is the only phase that recognises swipe navigation; `Zoomed` is
/// the only phase where drags and pinches move the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportPhase {
    Idle,
    Zoomed,
}
