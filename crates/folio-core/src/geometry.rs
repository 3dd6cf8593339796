//! Pan boundary math.
//!
//! Measurements are best-effort: anything missing or degenerate yields an
//! unconstrained boundary instead of an error, and the next successful
//! measurement corrects it.

use glam::Vec2;

/// Axis-aligned rectangle in viewport (CSS) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Zero-size or non-finite rects come from unmounted/hidden elements.
    #[inline]
    pub fn is_measurable(&self) -> bool {
        self.size.is_finite() && self.size.x > 0.0 && self.size.y > 0.0
    }
}

/// Read-only layout queries issued by the controller on demand.
///
/// `content_rect` is the untransformed layout size of the media element;
/// the controller applies the current scale itself.
pub trait Geometry {
    fn viewport_rect(&self) -> Option<Rect>;
    fn content_rect(&self) -> Option<Rect>;
}

/// Geometry that never measures anything; panning is unconstrained.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unmeasured;

impl Geometry for Unmeasured {
    fn viewport_rect(&self) -> Option<Rect> {
        None
    }
    fn content_rect(&self) -> Option<Rect> {
        None
    }
}

/// Maximum absolute offset per axis before resistance kicks in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanBounds {
    Unconstrained,
    Limit(Vec2),
}

impl PanBounds {
    /// Half of the scaled-content overflow beyond the viewport, per axis.
    pub fn measure<G: Geometry + ?Sized>(geometry: &G, scale: f32) -> Self {
        let (Some(viewport), Some(content)) = (geometry.viewport_rect(), geometry.content_rect())
        else {
            return PanBounds::Unconstrained;
        };
        if !viewport.is_measurable() || !content.is_measurable() {
            log::trace!("[gesture] geometry unavailable, pan unconstrained");
            return PanBounds::Unconstrained;
        }
        let overflow = content.size * scale - viewport.size;
        PanBounds::Limit((overflow * 0.5).max(Vec2::ZERO))
    }

    /// Rubber-band: movement past the boundary is scaled by `resistance`.
    pub fn resist(&self, raw: Vec2, resistance: f32) -> Vec2 {
        match *self {
            PanBounds::Unconstrained => raw,
            PanBounds::Limit(limit) => Vec2::new(
                resist_axis(raw.x, limit.x, resistance),
                resist_axis(raw.y, limit.y, resistance),
            ),
        }
    }

    /// Nearest in-bounds offset.
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        match *self {
            PanBounds::Unconstrained => offset,
            PanBounds::Limit(limit) => offset.clamp(-limit, limit),
        }
    }

    pub fn contains(&self, offset: Vec2) -> bool {
        self.clamp(offset) == offset
    }
}

#[inline]
pub fn resist_axis(raw: f32, bound: f32, resistance: f32) -> f32 {
    let excess = raw.abs() - bound;
    if excess <= 0.0 {
        raw
    } else {
        raw.signum() * (bound + excess * resistance)
    }
}

/// Inverse of [`resist_axis`]: the raw offset that produces `applied`.
#[inline]
pub fn unresist_axis(applied: f32, bound: f32, resistance: f32) -> f32 {
    let excess = applied.abs() - bound;
    if excess <= 0.0 || resistance <= 0.0 {
        applied
    } else {
        applied.signum() * (bound + excess / resistance)
    }
}
