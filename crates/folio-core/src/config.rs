//! Per-call-site gesture tuning.
//!
//! Every modal shell uses the same controller; what differs between them
//! (zoom ceiling, swipe threshold, damping) lives here.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("min scale must be positive, got {0}")]
    NonPositiveMinScale(f32),
    #[error("max scale {max} is below min scale {min}")]
    InvertedScaleRange { min: f32, max: f32 },
    #[error("zoom step must be greater than 1.0, got {0}")]
    ZoomStepTooSmall(f32),
    #[error("recenter tolerance must be at least 1.0, got {0}")]
    ToleranceBelowOne(f32),
    #[error("{name} must be within [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
    #[error("invalid number for {name}: '{raw}'")]
    InvalidNumber { name: &'static str, raw: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    pub min_scale: f32,
    pub max_scale: f32,
    pub zoom_step: f32,
    pub recenter_tolerance: f32,
    pub drag_resistance: f32,
    pub pinch_sensitivity: f32,
    pub swipe_min_distance: f32,
    pub swipe_max_duration_ms: f64,
    pub double_tap_window_ms: f64,
    pub double_tap_slop: f32,
    pub spring_omega: f32,
    pub spring_damping: f32,
    /// Videos render inside provider iframes; zooming them is off by default.
    pub zoom_videos: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::lightbox()
    }
}

impl GestureConfig {
    /// Full-screen image/video modal.
    pub fn lightbox() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            zoom_step: ZOOM_STEP,
            recenter_tolerance: RECENTER_TOLERANCE,
            drag_resistance: DRAG_RESISTANCE,
            pinch_sensitivity: PINCH_SENSITIVITY,
            swipe_min_distance: SWIPE_MIN_DISTANCE,
            swipe_max_duration_ms: SWIPE_MAX_DURATION_MS,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
            double_tap_slop: DOUBLE_TAP_SLOP,
            spring_omega: SPRING_OMEGA,
            spring_damping: SPRING_DAMPING_RATIO,
            zoom_videos: false,
        }
    }

    /// Archive card viewer: smaller surface, lower zoom ceiling, lighter swipe.
    pub fn archive_card() -> Self {
        Self {
            max_scale: CARD_MAX_SCALE,
            swipe_min_distance: CARD_SWIPE_MIN_DISTANCE,
            ..Self::lightbox()
        }
    }

    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "lightbox" | "modal" | "" => Ok(Self::lightbox()),
            "card" | "archive" | "archive-card" => Ok(Self::archive_card()),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_scale > 0.0) {
            return Err(ConfigError::NonPositiveMinScale(self.min_scale));
        }
        if !(self.max_scale >= self.min_scale) {
            return Err(ConfigError::InvertedScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if !(self.zoom_step > 1.0) {
            return Err(ConfigError::ZoomStepTooSmall(self.zoom_step));
        }
        if !(self.recenter_tolerance >= 1.0) {
            return Err(ConfigError::ToleranceBelowOne(self.recenter_tolerance));
        }
        for (name, value) in [
            ("drag_resistance", self.drag_resistance),
            ("pinch_sensitivity", self.pinch_sensitivity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { name, value });
            }
        }
        for (name, value) in [
            ("swipe_min_distance", self.swipe_min_distance as f64),
            ("swipe_max_duration_ms", self.swipe_max_duration_ms),
            ("double_tap_window_ms", self.double_tap_window_ms),
            ("spring_omega", self.spring_omega as f64),
            ("spring_damping", self.spring_damping as f64),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(())
    }

    /// Scale at or below which zoom-out settles back to `min_scale`. Never
    /// below `min_scale` itself, even for an unvalidated tolerance.
    #[inline]
    pub fn settle_threshold(&self) -> f32 {
        (self.min_scale * self.recenter_tolerance).max(self.min_scale)
    }

    #[inline]
    pub fn clamp_scale(&self, scale: f32) -> f32 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}
