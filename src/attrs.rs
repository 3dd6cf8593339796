// Markup attribute parsing. Free of `web_sys` so the host tests can include
// it directly; callers pass an attribute getter.

use super::constants::*;
use folio_core::{ConfigError, GestureConfig, MediaError, MediaItem, MediaKind};

/// Reads one `[data-media-item]` element. A missing `data-kind` means image.
pub fn media_item_from_attrs(get: impl Fn(&str) -> Option<String>) -> Result<MediaItem, MediaError> {
    let kind = match get(KIND_ATTR) {
        Some(raw) => raw.parse::<MediaKind>()?,
        None => MediaKind::Image,
    };
    let source = get(SRC_ATTR).ok_or(MediaError::MissingSource)?;
    let title = get(TITLE_ATTR).unwrap_or_default();
    MediaItem::new(kind, source, title.trim())
}

/// Preset named by `data-preset`, with numeric overrides applied on top.
pub fn config_from_attrs(get: impl Fn(&str) -> Option<String>) -> Result<GestureConfig, ConfigError> {
    let mut config = match get(PRESET_ATTR) {
        Some(name) => GestureConfig::preset(&name)?,
        None => GestureConfig::lightbox(),
    };
    if let Some(raw) = get(MAX_SCALE_ATTR) {
        config.max_scale = parse_number("max scale", &raw)?;
    }
    if let Some(raw) = get(ZOOM_STEP_ATTR) {
        config.zoom_step = parse_number("zoom step", &raw)?;
    }
    if let Some(raw) = get(SWIPE_DISTANCE_ATTR) {
        config.swipe_min_distance = parse_number("swipe distance", &raw)?;
    }
    config.validate()?;
    Ok(config)
}

/// The preset alone, ignoring overrides; unknown presets fall back to the
/// lightbox tuning.
pub fn preset_from_attrs(get: impl Fn(&str) -> Option<String>) -> GestureConfig {
    get(PRESET_ATTR)
        .and_then(|name| GestureConfig::preset(&name).ok())
        .unwrap_or_else(GestureConfig::lightbox)
}

pub fn parse_open_index(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

fn parse_number(name: &'static str, raw: &str) -> Result<f32, ConfigError> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::InvalidNumber {
            name,
            raw: raw.to_string(),
        })
}
